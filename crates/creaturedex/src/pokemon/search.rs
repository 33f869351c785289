use crate::prelude::*;
use colored::Colorize;
use creaturedex_core::encyclopedia::format_id;
use creaturedex_core::pokemon::Pokemon;

use super::PokemonService;
use crate::output::{capitalize, output_json, section_header};

#[derive(Debug, clap::Args, Clone)]
pub struct SearchOptions {
    /// Name or part of a name
    pub query: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: SearchOptions, service: &PokemonService) -> Result<()> {
    let results = service.search(&options.query).await;

    if options.json {
        output_json(&results)?;
    } else {
        print!("{}", format_results_text(&options.query, &results));
    }

    Ok(())
}

pub fn format_results_text(query: &str, results: &[Pokemon]) -> String {
    let mut result = section_header(&f!("POKÉMON MATCHING {:?}", query.trim()));

    if results.is_empty() {
        result.push_str(&f!("\n{}\n", "No Pokémon found.".yellow()));
        return result;
    }

    let mut table = new_table();
    table.set_titles(prettytable::row!["ID", "NAME", "TYPES"]);
    for pokemon in results {
        table.add_row(prettytable::row![
            format_id(pokemon.id, 4),
            capitalize(&pokemon.name),
            pokemon.type_names().join(", ")
        ]);
    }

    result.push('\n');
    result.push_str(&table.to_string());
    result.push('\n');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokemon::service::fixtures;

    #[test]
    fn test_format_results_text() {
        colored::control::set_override(false);
        let pikachu: Pokemon = serde_json::from_value(fixtures::pokemon(25, "pikachu")).unwrap();

        let text = format_results_text(" pika ", &[pikachu]);

        assert!(text.contains("POKÉMON MATCHING \"pika\""));
        assert!(text.contains("#0025"));
        assert!(text.contains("electric"));
    }

    #[test]
    fn test_format_results_text_empty() {
        colored::control::set_override(false);
        assert!(format_results_text("mew", &[]).contains("No Pokémon found."));
    }
}
