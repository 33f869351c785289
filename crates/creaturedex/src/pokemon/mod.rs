use crate::prelude::{eprintln, *};
use creaturedex_core::encyclopedia::format_id;
use creaturedex_core::pokemon::resource_id_from_url;

pub mod get;
pub mod list;
pub mod search;
pub mod service;

pub use service::PokemonService;

#[derive(Debug, clap::Parser)]
#[command(name = "pokemon")]
#[command(about = "Pokémon encyclopedia (pokeapi.co)")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List Pokémon page by page
    #[clap(name = "list")]
    List(list::ListOptions),

    /// Show one Pokémon by id or name
    #[clap(name = "get")]
    Get(get::GetOptions),

    /// Search Pokémon by name
    #[clap(name = "search")]
    Search(search::SearchOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let config = global.config();
    if global.verbose {
        eprintln!("Pokémon API Base: {}", config.pokemon_api_url);
        eprintln!();
    }

    let encyclopedia = global.encyclopedia(&config);

    match app.command {
        Commands::List(options) => list::run(options, &encyclopedia, &config).await,
        Commands::Get(options) => get::run(options, encyclopedia.pokemon()).await,
        Commands::Search(options) => search::run(options, encyclopedia.pokemon()).await,
    }
}

/// `#0025` from a resource URL, or `#????` when the URL carries no id
pub fn display_id_from_url(url: &str) -> String {
    resource_id_from_url(url)
        .and_then(|id| id.parse::<u64>().ok())
        .map(|id| format_id(id, 4))
        .unwrap_or_else(|| "#????".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_id_from_url() {
        assert_eq!(
            display_id_from_url("https://pokeapi.co/api/v2/pokemon/25/"),
            "#0025"
        );
        assert_eq!(display_id_from_url("https://pokeapi.co/"), "#????");
    }
}
