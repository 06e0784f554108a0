//! Plugin manifest as published by the plugin author

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Manifest describing one plugin in one channel (`<slug>.json`)
///
/// Field names follow the Dalamud manifest convention (PascalCase). Keys the
/// catalog does not interpret are kept in `extra` so the merged snapshot
/// stays a superset of what the author published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PluginManifest {
    /// Stable identifier, unique within a channel
    pub internal_name: String,

    /// Display name
    pub name: String,

    /// Author string
    pub author: String,

    /// Assembly version string (e.g. `1.2.0.0`)
    pub assembly_version: String,

    /// Icon URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,

    /// One-line summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub punchline: Option<String>,

    /// Long description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Category tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_tags: Option<Vec<String>>,

    /// Freeform tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Hide the plugin from the human-readable listing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_hide: Option<bool>,

    /// Explicit source repository URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,

    /// Any other manifest keys, carried through untouched
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl PluginManifest {
    /// Parse a manifest from JSON text
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// All tags, category tags first
    pub fn all_tags(&self) -> impl Iterator<Item = &str> {
        self.category_tags
            .iter()
            .chain(self.tags.iter())
            .flatten()
            .map(String::as_str)
    }
}
