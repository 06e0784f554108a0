//! Human-readable plugin listing (`README.md`)

use super::sorted_by_id;
use chrono::{DateTime, FixedOffset};
use plugin_repo_core::types::CatalogEntry;
use plugin_repo_core::{Error, Result};

/// Title, legend and table header of the listing
pub const LISTING_PREAMBLE: &[&str] = &[
    "# Divination Plugins",
    "",
    "## Legend",
    "",
    "⚠️ = Testing/very experimental plugin. May cause game crashes or other inconveniences.",
    "",
    "## Plugin List",
    "",
    "| Name | Version | Author | Description |",
    "|:-----|:-------:|:------:|:------------|",
];

const PLACEHOLDER: &str = "-";

/// Render the markdown table of all visible entries
///
/// Dates are shown in `offset` as `YYYY-MM-DD`. The document has no
/// trailing newline.
pub fn render_listing(entries: &[CatalogEntry], offset: &FixedOffset) -> Result<String> {
    let mut lines: Vec<String> = LISTING_PREAMBLE.iter().map(|l| l.to_string()).collect();

    for entry in sorted_by_id(entries) {
        if entry.is_hide {
            continue;
        }
        lines.push(render_row(entry, offset)?);
    }

    Ok(lines.join("\n"))
}

fn render_row(entry: &CatalogEntry, offset: &FixedOffset) -> Result<String> {
    let name = match entry.repo_url.as_deref() {
        Some(url) => format!("[{}]({})", cell(&entry.name), url),
        None => cell(&entry.name),
    };

    let stable_version = if entry.download_link_install != entry.download_link_testing {
        format!(
            "**[{}]({})**",
            entry.assembly_version, entry.download_link_install
        )
    } else {
        PLACEHOLDER.to_string()
    };
    let testing_version = match entry.testing_assembly_version.as_deref() {
        Some(version) if !version.is_empty() => {
            format!("⚠️ [{}]({})", version, entry.download_link_testing)
        }
        _ => PLACEHOLDER.to_string(),
    };
    let version = format!(
        "{} / {} ({})",
        stable_version,
        testing_version,
        format_date(entry.last_updated, offset)?
    );

    let tags: Vec<String> = entry
        .all_tags()
        .map(|tag| format!(r"**\#{}**", cell(tag)))
        .collect();
    let description = format!(
        "{}<br>{}<br>{}",
        entry.punchline.as_deref().map_or_else(|| PLACEHOLDER.to_string(), cell),
        entry.description.as_deref().map_or_else(|| PLACEHOLDER.to_string(), cell),
        tags.join(" ")
    );

    Ok(format!(
        "| {} | {} | {} | {} |",
        name,
        version,
        cell(&entry.author),
        description
    ))
}

/// Calendar date of an epoch timestamp in the listing timezone
fn format_date(timestamp: i64, offset: &FixedOffset) -> Result<String> {
    let utc = DateTime::from_timestamp(timestamp, 0)
        .ok_or_else(|| Error::malformed_timestamp(timestamp.to_string()))?;
    Ok(utc.with_timezone(offset).format("%Y-%m-%d").to_string())
}

/// Keep free text inside its table cell
fn cell(text: &str) -> String {
    text.replace("\r\n", "<br>")
        .replace('\n', "<br>")
        .replace('|', r"\|")
}
