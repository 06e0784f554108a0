//! Configuration file loading and parsing

use crate::error::{Error, Result};
use crate::types::Channel;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::debug;

/// Configuration file names to search for
pub const CONFIG_FILE_NAMES: &[&str] = &["plugin-repo.yaml", "plugin-repo.yml"];

/// Repository layout and rendering settings
///
/// Every field has a default, so an empty file (or no file at all) yields
/// the `docs/plugins` layout served from `xiv.starry.blue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case", deny_unknown_fields)]
pub struct RepoConfig {
    /// Directory holding one subdirectory per channel and the generated files
    pub plugins_root: Utf8PathBuf,

    /// Download links are `<base>/<channel>/<slug>/<archive>`
    pub download_base_url: String,

    /// Packaged plugin archive; its presence marks a plugin directory
    pub archive_file_name: String,

    /// Commit history record
    pub commits_file_name: String,

    /// Trigger event record
    pub event_file_name: String,

    /// Commit author whose commits never appear in changelogs
    pub automation_author: String,

    /// Full catalog snapshot, written under `plugins_root`
    pub catalog_file_name: String,

    /// Markdown listing, written under `plugins_root`
    pub listing_file_name: String,

    /// UTC offset used for dates in the listing
    pub listing_utc_offset_hours: i32,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            plugins_root: Utf8PathBuf::from("docs/plugins"),
            download_base_url: "https://xiv.starry.blue/plugins".to_string(),
            archive_file_name: "latest.zip".to_string(),
            commits_file_name: "commits.json".to_string(),
            event_file_name: "event.json".to_string(),
            automation_author: "github-actions".to_string(),
            catalog_file_name: "master.json".to_string(),
            listing_file_name: "README.md".to_string(),
            listing_utc_offset_hours: 9,
        }
    }
}

impl RepoConfig {
    /// Load configuration from the specified path, or look for one in the
    /// current directory and fall back to defaults
    pub fn load(path: Option<&Utf8Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_file(p),
            None => {
                let cwd = std::env::current_dir()?;
                let cwd = Utf8PathBuf::try_from(cwd).map_err(|_| {
                    Error::invalid_config("Current directory path is not valid UTF-8")
                })?;
                Self::discover(&cwd)
            }
        }
    }

    /// Load the first config file found in `dir`, or defaults if none exists
    pub fn discover(dir: &Utf8Path) -> Result<Self> {
        for name in CONFIG_FILE_NAMES {
            let path = dir.join(name);
            if path.exists() {
                return Self::load_file(&path);
            }
        }

        debug!("No config file in {}, using defaults", dir);
        let config = Self::default();
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a specific config file
    pub fn load_file(path: &Utf8Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::config_not_found(path.as_str())
            } else {
                Error::Io(e)
            }
        })?;

        debug!("Loading config from {}", path);
        Self::from_yaml(&content)
    }

    /// Parse and validate YAML config content
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to an empty mapping
        let config: Self = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml_ng::from_str(content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the layout ambiguous
    pub fn validate(&self) -> Result<()> {
        let file_names = [
            ("archive_file_name", &self.archive_file_name),
            ("commits_file_name", &self.commits_file_name),
            ("event_file_name", &self.event_file_name),
            ("catalog_file_name", &self.catalog_file_name),
            ("listing_file_name", &self.listing_file_name),
        ];

        for (key, value) in file_names {
            if value.is_empty() {
                return Err(Error::invalid_config(format!("{} must not be empty", key)));
            }
            if value.contains('/') || value.contains('\\') {
                return Err(Error::invalid_config(format!(
                    "{} must be a bare file name, got '{}'",
                    key, value
                )));
            }
        }

        if self.download_base_url.is_empty() {
            return Err(Error::invalid_config("download_base_url must not be empty"));
        }

        if !(-23..=23).contains(&self.listing_utc_offset_hours) {
            return Err(Error::invalid_config(format!(
                "listing_utc_offset_hours must be within -23..=23, got {}",
                self.listing_utc_offset_hours
            )));
        }

        Ok(())
    }

    /// Root directory of one channel
    pub fn channel_root(&self, channel: Channel) -> Utf8PathBuf {
        self.plugins_root.join(channel.as_str())
    }

    /// Public download link of a plugin archive
    pub fn download_link(&self, channel: Channel, slug: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.download_base_url.trim_end_matches('/'),
            channel,
            slug,
            self.archive_file_name
        )
    }

    /// Output path of the full catalog snapshot
    pub fn catalog_path(&self) -> Utf8PathBuf {
        self.plugins_root.join(&self.catalog_file_name)
    }

    /// Output path of the markdown listing
    pub fn listing_path(&self) -> Utf8PathBuf {
        self.plugins_root.join(&self.listing_file_name)
    }

    /// Timezone used for listing dates
    pub fn listing_offset(&self) -> Result<FixedOffset> {
        FixedOffset::east_opt(self.listing_utc_offset_hours * 3600).ok_or_else(|| {
            Error::invalid_config(format!(
                "invalid listing offset: {} hours",
                self.listing_utc_offset_hours
            ))
        })
    }
}
