use crate::prelude::{eprintln, *};

pub mod get;
pub mod list;
pub mod search;
pub mod service;

pub use service::DigimonService;

#[derive(Debug, clap::Parser)]
#[command(name = "digimon")]
#[command(about = "Digimon encyclopedia (digi-api.com)")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List Digimon page by page, with type, attribute and level
    #[clap(name = "list")]
    List(list::ListOptions),

    /// Show one Digimon by id or name
    #[clap(name = "get")]
    Get(get::GetOptions),

    /// Search Digimon by name
    #[clap(name = "search")]
    Search(search::SearchOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let config = global.config();
    if global.verbose {
        eprintln!("Digimon API Base: {}", config.digimon_api_url);
        eprintln!();
    }

    let encyclopedia = global.encyclopedia(&config);

    match app.command {
        Commands::List(options) => list::run(options, encyclopedia.digimon(), &config).await,
        Commands::Get(options) => get::run(options, encyclopedia.digimon()).await,
        Commands::Search(options) => search::run(options, encyclopedia.digimon()).await,
    }
}
