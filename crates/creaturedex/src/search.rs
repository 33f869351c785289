use crate::prelude::{eprintln, *};
use creaturedex_core::encyclopedia::{EncyclopediaKind, Entity};

use crate::output::output_json;

#[derive(Debug, clap::Args, Clone)]
pub struct SearchOptions {
    /// Encyclopedia to search: pokemon or digimon
    #[arg(value_name = "KIND")]
    pub kind: String,

    /// Name or part of a name
    pub query: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: SearchOptions, global: crate::Global) -> Result<()> {
    let kind = options.kind.parse::<EncyclopediaKind>().map_err(Error::from)?;

    let config = global.config();
    if global.verbose {
        eprintln!("Searching {} for {:?}...", kind, options.query);
    }

    let results = global
        .encyclopedia(&config)
        .search(kind, &options.query)
        .await;

    if options.json {
        return output_json(&results);
    }

    print!("{}", format_results_text(kind, &options.query, results));
    Ok(())
}

fn format_results_text(kind: EncyclopediaKind, query: &str, results: Vec<Entity>) -> String {
    match kind {
        EncyclopediaKind::Pokemon => {
            let pokemon: Vec<_> = results
                .into_iter()
                .filter_map(|entity| match entity {
                    Entity::Pokemon(pokemon) => Some(pokemon),
                    Entity::Digimon(_) => None,
                })
                .collect();
            crate::pokemon::search::format_results_text(query, &pokemon)
        }
        EncyclopediaKind::Digimon => {
            let digimon: Vec<_> = results
                .into_iter()
                .filter_map(|entity| match entity {
                    Entity::Digimon(digimon) => Some(digimon),
                    Entity::Pokemon(_) => None,
                })
                .collect();
            crate::digimon::search::format_results_text(query, &digimon)
        }
    }
}
