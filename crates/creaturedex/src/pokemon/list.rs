use crate::prelude::*;
use colored::Colorize;
use creaturedex_core::encyclopedia::{EncyclopediaKind, EntityPage, EntitySummary};

use super::display_id_from_url;
use crate::config::Config;
use crate::encyclopedia::Encyclopedia;
use crate::output::{capitalize, format_navigation, output_json, section_header};

#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Number of Pokémon per page [default: DEFAULT_PAGE_SIZE or 20]
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ListOptions, encyclopedia: &Encyclopedia, config: &Config) -> Result<()> {
    let limit = options
        .limit
        .filter(|limit| *limit > 0)
        .unwrap_or(config.default_page_size);
    let page = options.page.max(1);

    let output = encyclopedia
        .entities(EncyclopediaKind::Pokemon, page - 1, limit)
        .await;

    if options.json {
        output_json(&output)?;
    } else {
        print!("{}", format_list_text(&output, page));
    }

    Ok(())
}

fn format_list_text(output: &EntityPage, page: usize) -> String {
    let mut result = section_header(&f!(
        "POKÉMON (Page {} of {})",
        page,
        output.pagination.total_pages
    ));

    if output.content.is_empty() {
        result.push_str(&f!("\n{}\n", "No Pokémon on this page.".yellow()));
    } else {
        let mut table = new_table();
        table.set_titles(prettytable::row!["ID", "NAME", "DETAILS"]);

        for entry in &output.content {
            if let EntitySummary::Pokemon(resource) = entry {
                table.add_row(prettytable::row![
                    display_id_from_url(&resource.url),
                    capitalize(&resource.name),
                    f!("creaturedex pokemon get {}", resource.name)
                ]);
            }
        }

        result.push('\n');
        result.push_str(&table.to_string());
    }

    result.push_str(&format_navigation(
        "creaturedex pokemon list",
        page,
        output.pagination.total_pages,
    ));
    result.push('\n');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use creaturedex_core::encyclopedia::pokemon_entity_page;
    use creaturedex_core::pokemon::{NamedResource, PokemonListResponse};

    fn list_output(names: &[(u64, &str)], count: usize) -> EntityPage {
        let list = PokemonListResponse {
            count,
            next: None,
            previous: None,
            results: names
                .iter()
                .map(|(id, name)| NamedResource {
                    name: name.to_string(),
                    url: f!("https://pokeapi.co/api/v2/pokemon/{id}/"),
                })
                .collect(),
        };
        pokemon_entity_page(list, 0, 20)
    }

    #[test]
    fn test_format_list_text() {
        colored::control::set_override(false);
        let text = format_list_text(&list_output(&[(1, "bulbasaur"), (25, "pikachu")], 1302), 1);

        assert!(text.contains("POKÉMON (Page 1 of 66)"));
        assert!(text.contains("#0001"));
        assert!(text.contains("Pikachu"));
        assert!(text.contains("creaturedex pokemon get pikachu"));
        assert!(text.contains("creaturedex pokemon list --page 2"));
    }

    #[test]
    fn test_format_list_text_empty() {
        colored::control::set_override(false);
        let text = format_list_text(&list_output(&[], 0), 1);

        assert!(text.contains("No Pokémon on this page."));
        assert!(text.contains("Page 1 of 1"));
    }
}
