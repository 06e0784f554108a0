//! Assertion helpers for merged catalogs

use plugin_repo_core::types::CatalogEntry;

/// Look up an entry by internal name, failing with the known names
pub fn find_entry<'a>(entries: &'a [CatalogEntry], internal_name: &str) -> &'a CatalogEntry {
    entries
        .iter()
        .find(|e| e.internal_name == internal_name)
        .unwrap_or_else(|| {
            let known: Vec<&str> = entries.iter().map(|e| e.internal_name.as_str()).collect();
            panic!(
                "Expected entry '{}' in catalog, found: {:?}",
                internal_name, known
            )
        })
}

/// Assert that identifiers are in ascending ordinal order
pub fn assert_sorted_by_id(ids: &[String]) {
    let mut sorted = ids.to_vec();
    sorted.sort();
    assert_eq!(ids, sorted.as_slice(), "identifiers are not sorted");
}

/// Assert that an entry is published to testing only
pub fn assert_testing_exclusive(entry: &CatalogEntry) {
    assert!(
        entry.is_testing_exclusive,
        "Expected '{}' to be testing-exclusive",
        entry.internal_name
    );
    assert_eq!(
        entry.download_link_install, entry.download_link_testing,
        "testing-exclusive '{}' should install from the testing link",
        entry.internal_name
    );
}

/// Number of plugin rows in a rendered listing
pub fn listing_row_count(markdown: &str) -> usize {
    markdown
        .lines()
        .filter(|line| line.starts_with("| ") && !line.starts_with("| Name |"))
        .count()
}
