//! Output documents built from the merged catalog

mod catalog;
mod listing;

pub use catalog::render_catalog;
pub use listing::{render_listing, LISTING_PREAMBLE};

use plugin_repo_core::types::CatalogEntry;

/// Entries ordered by internal name (ordinal comparison)
fn sorted_by_id(entries: &[CatalogEntry]) -> Vec<&CatalogEntry> {
    let mut sorted: Vec<&CatalogEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.internal_name.cmp(&b.internal_name));
    sorted
}
