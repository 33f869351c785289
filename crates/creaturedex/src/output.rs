use crate::prelude::{println, *};
use colored::Colorize;
use creaturedex_core::pagination::{page_links, PageLink, PageLinks, PAGE_WINDOW_RANGE};
use serde::Serialize;

pub fn format_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

pub fn output_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", format_json(value)?);
    Ok(())
}

/// Upper-case the first character of a name
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn section_header(title: &str) -> String {
    f!(
        "\n{}\n{}\n{}\n",
        "=".repeat(80).bright_cyan(),
        title.bright_cyan().bold(),
        "=".repeat(80).bright_cyan()
    )
}

/// Render `‹ 1 … 3 4 [5] 6 7 … 10 ›`
pub fn format_page_bar(links: &PageLinks) -> String {
    let mut parts: Vec<String> = Vec::new();

    if links.previous.is_some() {
        parts.push("‹".to_string());
    }

    for link in &links.links {
        parts.push(match link {
            PageLink::Page(page) if *page == links.current_page => {
                f!("[{page}]").bright_cyan().bold().to_string()
            }
            PageLink::Page(page) => page.to_string(),
            PageLink::Ellipsis => "…".bright_black().to_string(),
        });
    }

    if links.next.is_some() {
        parts.push("›".to_string());
    }

    parts.join(" ")
}

/// Navigation footer for a list command
///
/// `command` is the list invocation without paging flags, e.g.
/// `creaturedex pokemon list`.
pub fn format_navigation(command: &str, current_page: usize, total_pages: usize) -> String {
    let links = page_links(current_page, total_pages, PAGE_WINDOW_RANGE);
    let mut result = String::new();

    result.push_str(&f!("\n{}\n", "=".repeat(80).bright_yellow()));
    result.push_str(&f!("{}\n", "NAVIGATION".bright_yellow().bold()));
    result.push_str(&f!("{}\n", "=".repeat(80).bright_yellow()));

    result.push_str(&f!(
        "\n{} {} {} {}\n",
        "Page".bright_white(),
        current_page.to_string().bright_cyan().bold(),
        "of".bright_white(),
        total_pages.max(1).to_string().bright_cyan().bold()
    ));

    if links.links.is_empty() {
        return result;
    }

    result.push_str(&f!("\n  {}\n", format_page_bar(&links)));

    result.push_str(&f!("\n{}:\n", "To navigate".bright_white().bold()));
    if let Some(next) = links.next {
        result.push_str(&f!(
            "  {}: {}\n",
            "Next page".green(),
            f!("{command} --page {next}").cyan()
        ));
    }
    if let Some(previous) = links.previous {
        result.push_str(&f!(
            "  {}: {}\n",
            "Previous page".green(),
            f!("{command} --page {previous}").cyan()
        ));
    }

    result
}
