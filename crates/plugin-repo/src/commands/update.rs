//! Catalog update command

use anyhow::{Context, Result};
use chrono::DateTime;
use plugin_repo_catalog::{CatalogPipeline, CatalogSummary};
use plugin_repo_core::types::CatalogEntry;
use plugin_repo_core::RepoConfig;
use tabled::{settings::Style, Table, Tabled};
use tracing::debug;

use crate::cli::Cli;
use crate::output;

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "internal name")]
    internal_name: String,
    stable: String,
    testing: String,
    #[tabled(rename = "last updated (UTC)")]
    last_updated: String,
    hidden: String,
}

impl From<&CatalogEntry> for EntryRow {
    fn from(entry: &CatalogEntry) -> Self {
        let stable = if entry.is_testing_exclusive {
            "-".to_string()
        } else {
            entry.assembly_version.clone()
        };

        Self {
            internal_name: entry.internal_name.clone(),
            stable,
            testing: entry
                .testing_assembly_version
                .clone()
                .unwrap_or_else(|| "-".to_string()),
            last_updated: DateTime::from_timestamp(entry.last_updated, 0)
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| entry.last_updated.to_string()),
            hidden: if entry.is_hide { "yes" } else { "" }.to_string(),
        }
    }
}

/// Rebuild the catalog, or preview it with `--dry-run`
pub fn run(cli: &Cli) -> Result<()> {
    let mut config = RepoConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(root) = &cli.root {
        config.plugins_root = root.clone();
    }
    debug!("Using plugins root {}", config.plugins_root);

    let pipeline = CatalogPipeline::new(config);

    if cli.dry_run {
        let output = pipeline.preview().context("Failed to build catalog")?;
        if !cli.quiet {
            print_preview(&output.entries, &CatalogSummary::from_entries(&output.entries));
        }
        return Ok(());
    }

    let summary = pipeline.run().context("Failed to update catalog")?;
    if !cli.quiet {
        let config = pipeline.config();
        output::success(&format!(
            "Catalog updated with {} plugins",
            summary.entries
        ));
        output::kv("catalog", config.catalog_path().as_str());
        output::kv("listing", config.listing_path().as_str());
    }
    Ok(())
}

fn print_preview(entries: &[CatalogEntry], summary: &CatalogSummary) {
    output::header("Catalog preview (nothing written)");

    if entries.is_empty() {
        output::info("No plugins found in either channel");
        return;
    }

    let rows: Vec<EntryRow> = entries.iter().map(EntryRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    println!("{}", table);
    println!();

    output::info(&format!(
        "{} plugins: {} with a testing build, {} testing-exclusive, {} hidden",
        summary.entries, summary.with_testing_build, summary.testing_exclusive, summary.hidden
    ));
}
