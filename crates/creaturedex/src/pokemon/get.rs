use crate::prelude::{eprintln, *};
use colored::Colorize;
use creaturedex_core::encyclopedia::{format_id, EncyclopediaKind};
use creaturedex_core::pokemon::Pokemon;

use super::PokemonService;
use crate::output::{capitalize, output_json, section_header};

#[derive(Debug, clap::Args, Clone)]
pub struct GetOptions {
    /// Pokémon id or name
    #[arg(value_name = "ID_OR_NAME")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: GetOptions, service: &PokemonService) -> Result<()> {
    let id = options.id.trim().to_lowercase();

    let Some(pokemon) = service.detail(&id).await else {
        eprintln!("{} {}", "Could not load Pokémon".red().bold(), id.bright_white());
        eprintln!(
            "{}: {}",
            "Check the id or name, or search for it".yellow(),
            f!("creaturedex pokemon search {id}").cyan()
        );
        return Err(Error::NotFound {
            kind: EncyclopediaKind::Pokemon,
            id,
        }
        .into());
    };

    if options.json {
        output_json(&pokemon)?;
    } else {
        print!("{}", format_detail_text(&pokemon));
    }

    Ok(())
}

/// Height is reported in decimetres
fn format_height(height: u32) -> String {
    f!("{:.1} m", height as f64 / 10.0)
}

/// Weight is reported in hectograms
fn format_weight(weight: u32) -> String {
    f!("{:.1} kg", weight as f64 / 10.0)
}

fn format_detail_text(pokemon: &Pokemon) -> String {
    let mut result = section_header(&f!(
        "{} {}",
        format_id(pokemon.id, 4),
        capitalize(&pokemon.name)
    ));

    let types: Vec<String> = pokemon.type_names().into_iter().map(capitalize).collect();
    let abilities: Vec<String> = pokemon
        .ability_names()
        .into_iter()
        .map(capitalize)
        .collect();

    result.push_str(&f!("\n{}: {}\n", "Types".green(), types.join(", ").bright_white()));
    result.push_str(&f!(
        "{}: {}\n",
        "Abilities".green(),
        abilities.join(", ").bright_white()
    ));
    result.push_str(&f!(
        "{}: {} | {}: {}\n",
        "Height".green(),
        format_height(pokemon.height).bright_white(),
        "Weight".green(),
        format_weight(pokemon.weight).bright_white()
    ));
    if let Some(image) = pokemon.image_url() {
        result.push_str(&f!("{}: {}\n", "Image".green(), image.cyan().underline()));
    }

    if !pokemon.stats.is_empty() {
        let mut table = new_table();
        table.set_titles(prettytable::row!["STAT", "BASE"]);
        for slot in &pokemon.stats {
            table.add_row(prettytable::row![slot.stat.name, slot.base_stat]);
        }
        result.push('\n');
        result.push_str(&table.to_string());
    }

    result.push('\n');
    result
}
