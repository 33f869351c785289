use creaturedex_core::encyclopedia::{EncyclopediaKind, UnsupportedKind};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    UnsupportedKind(#[from] UnsupportedKind),

    #[error("{kind} {id:?} not found")]
    NotFound { kind: EncyclopediaKind, id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let unsupported: Error = UnsupportedKind("unknown".to_string()).into();
        assert_eq!(
            unsupported.to_string(),
            "Unsupported encyclopedia type: unknown"
        );

        let missing = Error::NotFound {
            kind: EncyclopediaKind::Digimon,
            id: "Agumonn".to_string(),
        };
        assert_eq!(missing.to_string(), "digimon \"Agumonn\" not found");
    }
}
