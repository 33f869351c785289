use crate::prelude::*;
use colored::Colorize;
use creaturedex_core::digimon::EnhancedListResponse;
use creaturedex_core::encyclopedia::{format_id, DigimonPageItem};

use super::DigimonService;
use crate::config::Config;
use crate::output::{format_navigation, output_json, section_header};

#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Number of Digimon per page [default: DEFAULT_PAGE_SIZE or 20]
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ListOptions, service: &DigimonService, config: &Config) -> Result<()> {
    let limit = options
        .limit
        .filter(|limit| *limit > 0)
        .unwrap_or(config.default_page_size);
    let page = options.page.max(1);

    let output = service.enhanced_list(page - 1, limit).await;

    if options.json {
        output_json(&output)?;
    } else {
        print!("{}", format_list_text(&output, page));
    }

    Ok(())
}

fn format_list_text(output: &EnhancedListResponse, page: usize) -> String {
    let total_pages = output.pageable.total_pages.max(1);
    let mut result = section_header(&f!("DIGIMON (Page {} of {})", page, total_pages));

    if output.content.is_empty() {
        result.push_str(&f!("\n{}\n", "No Digimon on this page.".yellow()));
    } else {
        let mut table = new_table();
        table.set_titles(prettytable::row!["ID", "NAME", "LEVEL", "ATTRIBUTE", "TYPE"]);

        for digimon in &output.content {
            let item = DigimonPageItem::from(digimon.clone());
            table.add_row(prettytable::row![
                format_id(item.digimon.id, 4),
                item.digimon.name,
                item.level,
                item.attribute,
                item.kind
            ]);
        }

        result.push('\n');
        result.push_str(&table.to_string());
    }

    result.push_str(&format_navigation(
        "creaturedex digimon list",
        page,
        total_pages,
    ));
    result.push('\n');
    result
}
