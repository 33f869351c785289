/// Upstream and paging configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub pokemon_api_url: String,
    pub digimon_api_url: String,
    pub default_page_size: usize,
    /// Upper bound on concurrent detail requests in one fan-out
    pub fetch_concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pokemon_api_url: Self::DEFAULT_POKEMON_API_URL.to_string(),
            digimon_api_url: Self::DEFAULT_DIGIMON_API_URL.to_string(),
            default_page_size: Self::DEFAULT_PAGE_SIZE,
            fetch_concurrency: Self::DEFAULT_FETCH_CONCURRENCY,
        }
    }
}

impl Config {
    pub const DEFAULT_POKEMON_API_URL: &'static str = "https://pokeapi.co/api/v2";
    pub const DEFAULT_DIGIMON_API_URL: &'static str = "https://digi-api.com/api/v1";
    pub const DEFAULT_PAGE_SIZE: usize = 20;
    pub const DEFAULT_FETCH_CONCURRENCY: usize = 20;

    /// Load configuration from environment variables
    ///
    /// Uses POKEMON_API_URL and DIGIMON_API_URL for the upstream base URLs,
    /// DEFAULT_PAGE_SIZE for list pages and CREATUREDEX_FETCH_CONCURRENCY for
    /// fan-out width. Missing or invalid values are logged and defaulted.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let url = |key: &str, default: &str| match lookup(key) {
            Some(value) if !value.trim().is_empty() => value.trim().to_string(),
            _ => {
                log::warn!("{key} not set, using {default}");
                default.to_string()
            }
        };

        let number = |key: &str, default: usize| match lookup(key) {
            Some(value) => match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    log::warn!("Invalid {key} value {value:?}, using {default}");
                    default
                }
            },
            None => default,
        };

        Self {
            pokemon_api_url: url("POKEMON_API_URL", Self::DEFAULT_POKEMON_API_URL),
            digimon_api_url: url("DIGIMON_API_URL", Self::DEFAULT_DIGIMON_API_URL),
            default_page_size: number("DEFAULT_PAGE_SIZE", Self::DEFAULT_PAGE_SIZE),
            fetch_concurrency: number(
                "CREATUREDEX_FETCH_CONCURRENCY",
                Self::DEFAULT_FETCH_CONCURRENCY,
            ),
        }
    }

    /// Apply CLI overrides to the configuration
    pub fn with_overrides(
        mut self,
        pokemon_api_url: Option<String>,
        digimon_api_url: Option<String>,
        page_size: Option<usize>,
    ) -> Self {
        if let Some(url) = pokemon_api_url {
            self.pokemon_api_url = url;
        }
        if let Some(url) = digimon_api_url {
            self.digimon_api_url = url;
        }
        if let Some(size) = page_size.filter(|size| *size > 0) {
            self.default_page_size = size;
        }
        self
    }
}
