use crate::prelude::*;
use colored::Colorize;
use creaturedex_core::digimon::Digimon;
use creaturedex_core::encyclopedia::{format_id, FALLBACK_ATTRIBUTE, FALLBACK_LEVEL};

use super::DigimonService;
use crate::output::{output_json, section_header};

#[derive(Debug, clap::Args, Clone)]
pub struct SearchOptions {
    /// Name or part of a name
    pub query: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: SearchOptions, service: &DigimonService) -> Result<()> {
    let results = service.search(&options.query).await;

    if options.json {
        output_json(&results)?;
    } else {
        print!("{}", format_results_text(&options.query, &results));
    }

    Ok(())
}

pub fn format_results_text(query: &str, results: &[Digimon]) -> String {
    let mut result = section_header(&f!("DIGIMON MATCHING {:?}", query.trim()));

    if results.is_empty() {
        result.push_str(&f!("\n{}\n", "No Digimon found.".yellow()));
        return result;
    }

    let mut table = new_table();
    table.set_titles(prettytable::row!["ID", "NAME", "LEVEL", "ATTRIBUTE"]);
    for digimon in results {
        table.add_row(prettytable::row![
            format_id(digimon.id, 4),
            digimon.name,
            digimon.primary_level().unwrap_or(FALLBACK_LEVEL),
            digimon.primary_attribute().unwrap_or(FALLBACK_ATTRIBUTE)
        ]);
    }

    result.push('\n');
    result.push_str(&table.to_string());
    result.push('\n');
    result
}
