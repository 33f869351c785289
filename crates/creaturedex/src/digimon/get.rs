use crate::prelude::{eprintln, *};
use colored::Colorize;
use creaturedex_core::digimon::Digimon;
use creaturedex_core::encyclopedia::{format_id, EncyclopediaKind};

use super::DigimonService;
use crate::output::{output_json, section_header};

/// Evolutions shown per direction in the text view
const EVOLUTIONS_SHOWN: usize = 8;

#[derive(Debug, clap::Args, Clone)]
pub struct GetOptions {
    /// Digimon id or name
    #[arg(value_name = "ID_OR_NAME")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: GetOptions, service: &DigimonService) -> Result<()> {
    let id = options.id.trim().to_string();

    let Some(digimon) = service.detail(&id).await else {
        eprintln!("{} {}", "Could not load Digimon".red().bold(), id.bright_white());
        eprintln!(
            "{}: {}",
            "Check the id or name, or search for it".yellow(),
            f!("creaturedex digimon search {id}").cyan()
        );
        return Err(Error::NotFound {
            kind: EncyclopediaKind::Digimon,
            id,
        }
        .into());
    };

    if options.json {
        output_json(&digimon)?;
    } else {
        print!("{}", format_detail_text(&digimon));
    }

    Ok(())
}

fn join_or_unknown<'a>(values: impl Iterator<Item = &'a str>) -> String {
    let values: Vec<&str> = values.collect();
    if values.is_empty() {
        "unknown".to_string()
    } else {
        values.join(", ")
    }
}

fn format_detail_text(digimon: &Digimon) -> String {
    let mut result = section_header(&f!("{} {}", format_id(digimon.id, 4), digimon.name));

    let rows = [
        ("Level", join_or_unknown(digimon.levels.iter().map(|l| l.level.as_str()))),
        ("Type", join_or_unknown(digimon.types.iter().map(|t| t.kind.as_str()))),
        (
            "Attribute",
            join_or_unknown(digimon.attributes.iter().map(|a| a.attribute.as_str())),
        ),
        ("Fields", join_or_unknown(digimon.fields.iter().map(|f| f.field.as_str()))),
    ];

    result.push('\n');
    for (label, value) in rows {
        result.push_str(&f!("{}: {}\n", label.green(), value.bright_white()));
    }

    if let Some(date) = &digimon.release_date {
        result.push_str(&f!("{}: {}\n", "Released".green(), date.bright_white()));
    }
    if digimon.x_antibody == Some(true) {
        result.push_str(&f!("{}\n", "X-Antibody".bright_magenta()));
    }
    if let Some(image) = digimon.image_url() {
        result.push_str(&f!("{}: {}\n", "Image".green(), image.cyan().underline()));
    }

    if let Some(description) = digimon.description() {
        result.push_str(&f!("\n{}\n", description));
    }

    if !digimon.skills.is_empty() {
        let mut table = new_table();
        table.set_titles(prettytable::row!["SKILL", "DESCRIPTION"]);
        for skill in &digimon.skills {
            table.add_row(prettytable::row![skill.skill, skill.description]);
        }
        result.push('\n');
        result.push_str(&table.to_string());
    }

    for (label, evolutions) in [
        ("Evolves from", &digimon.prior_evolutions),
        ("Evolves to", &digimon.next_evolutions),
    ] {
        if evolutions.is_empty() {
            continue;
        }
        let mut names: Vec<&str> = evolutions
            .iter()
            .take(EVOLUTIONS_SHOWN)
            .map(|e| e.name.as_str())
            .collect();
        if evolutions.len() > EVOLUTIONS_SHOWN {
            names.push("…");
        }
        result.push_str(&f!("\n{}: {}", label.green(), names.join(", ")));
    }

    result.push('\n');
    result
}
