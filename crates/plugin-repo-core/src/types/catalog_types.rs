//! Merged catalog entry (one element of `master.json`)

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Keys the merge computes itself. Author-supplied values under these
/// names are discarded in favour of the derived ones.
pub const DERIVED_FIELDS: &[&str] = &[
    "AssemblyVersion",
    "Changelog",
    "DownloadLinkInstall",
    "DownloadLinkTesting",
    "IconUrl",
    "IsHide",
    "IsTestingExclusive",
    "LastUpdated",
    "RepoUrl",
    "TestingAssemblyVersion",
];

/// One plugin after both channels have been merged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CatalogEntry {
    pub internal_name: String,

    pub name: String,

    pub author: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub punchline: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default)]
    pub icon_url: Option<String>,

    /// Source repository, explicit or taken from the trigger event
    #[serde(default)]
    pub repo_url: Option<String>,

    pub is_hide: bool,

    /// Human commits of the publish, `<sha7>: <message>` per line
    #[serde(default)]
    pub changelog: Option<String>,

    /// Stable release version (testing version for testing-exclusive plugins)
    pub assembly_version: String,

    #[serde(default)]
    pub testing_assembly_version: Option<String>,

    pub is_testing_exclusive: bool,

    /// Seconds since the Unix epoch
    pub last_updated: i64,

    pub download_link_install: String,

    pub download_link_testing: String,

    /// Author manifest keys carried through from the winning channel
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl CatalogEntry {
    /// Tags to show in listings, category tags first
    pub fn all_tags(&self) -> impl Iterator<Item = &str> {
        self.category_tags
            .iter()
            .chain(self.tags.iter())
            .flatten()
            .map(String::as_str)
    }
}
