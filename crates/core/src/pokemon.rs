use serde::{Deserialize, Serialize};

/// Window used by the substring search tier
pub const SEARCH_WINDOW: usize = 100;

/// A `{name, url}` reference as returned by the list endpoint
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Paginated Pokémon list response
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PokemonListResponse {
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

impl PokemonListResponse {
    /// The renderable shape returned when the list request fails
    pub fn empty() -> Self {
        Self {
            count: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Artwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// Pokémon detail record
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Pokemon {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
}

impl Pokemon {
    /// Official artwork when available, otherwise the default front sprite
    pub fn image_url(&self) -> Option<&str> {
        self.sprites
            .other
            .as_ref()
            .and_then(|other| other.official_artwork.as_ref())
            .and_then(|artwork| artwork.front_default.as_deref())
            .or(self.sprites.front_default.as_deref())
    }

    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.kind.name.as_str()).collect()
    }

    pub fn ability_names(&self) -> Vec<&str> {
        self.abilities.iter().map(|a| a.ability.name.as_str()).collect()
    }
}

/// Extract the id segment from a resource URL
///
/// `https://pokeapi.co/api/v2/pokemon/25/` yields `25`. Returns `None` when the
/// URL has no usable trailing segment.
pub fn resource_id_from_url(url: &str) -> Option<&str> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty() && !segment.contains(':'))
}

/// Normalize a user query for the Pokémon API (names are lower-case)
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Case-insensitive substring filter over list entries
pub fn filter_by_name<'a>(results: &'a [NamedResource], query: &str) -> Vec<&'a NamedResource> {
    let needle = query.to_lowercase();
    results
        .iter()
        .filter(|resource| resource.name.to_lowercase().contains(&needle))
        .collect()
}

/// Endpoint for a list window
pub fn list_endpoint(offset: usize, limit: usize) -> String {
    format!("/pokemon?offset={offset}&limit={limit}")
}

/// Endpoint for a single record
pub fn detail_endpoint(id_or_name: &str) -> String {
    format!("/pokemon/{}", urlencoding::encode(id_or_name))
}
