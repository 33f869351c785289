use crate::prelude::*;
use clap::Parser;

mod config;
mod digimon;
mod encyclopedia;
mod error;
mod fanout;
mod http;
mod output;
mod pokemon;
mod prelude;
mod search;
mod server;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Browse and search the Pokémon and Digimon encyclopedias"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Pokémon API base URL (overrides POKEMON_API_URL)
    #[clap(long, global = true)]
    pokemon_api_url: Option<String>,

    /// Digimon API base URL (overrides DIGIMON_API_URL)
    #[clap(long, global = true)]
    digimon_api_url: Option<String>,

    /// Default list page size (overrides DEFAULT_PAGE_SIZE)
    #[clap(long, global = true)]
    page_size: Option<usize>,

    /// Whether to display additional information.
    #[clap(long, env = "CREATUREDEX_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

impl Global {
    pub fn config(&self) -> config::Config {
        config::Config::from_env().with_overrides(
            self.pokemon_api_url.clone(),
            self.digimon_api_url.clone(),
            self.page_size,
        )
    }

    pub fn encyclopedia(&self, config: &config::Config) -> encyclopedia::Encyclopedia {
        encyclopedia::Encyclopedia::from_config(config, http::default_transport())
    }
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Pokémon encyclopedia
    Pokemon(crate::pokemon::App),

    /// Digimon encyclopedia
    Digimon(crate::digimon::App),

    /// Search either encyclopedia by name
    Search(crate::search::SearchOptions),

    /// Serve the page-data JSON API
    Serve(crate::server::ServeOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Pokemon(sub_app) => crate::pokemon::run(sub_app, app.global).await,
        SubCommands::Digimon(sub_app) => crate::digimon::run(sub_app, app.global).await,
        SubCommands::Search(options) => crate::search::run(options, app.global).await,
        SubCommands::Serve(options) => crate::server::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
