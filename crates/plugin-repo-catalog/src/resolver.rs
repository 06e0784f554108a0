//! Per-directory metadata lookups
//!
//! Each lookup reads the publish metadata of a single plugin directory and
//! falls back quietly when an optional file is missing. Nothing is cached;
//! every call re-reads what it needs.

use chrono::{DateTime, NaiveDateTime};
use plugin_repo_core::types::{CommitRecord, TriggerEvent, TriggerKind};
use plugin_repo_core::{Error, RepoConfig, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::time::UNIX_EPOCH;
use tracing::{debug, warn};

/// UTC timestamps without an explicit offset
const UTC_Z_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// ISO-8601 with a space separator instead of `T`
const SPACED_OFFSET_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f%:z";

/// Changelog, repository and last-updated lookups for plugin directories
pub struct MetadataResolver<'a> {
    config: &'a RepoConfig,
}

impl<'a> MetadataResolver<'a> {
    pub fn new(config: &'a RepoConfig) -> Self {
        Self { config }
    }

    /// Changelog built from the commit history, automation commits removed
    ///
    /// Returns `None` when the history is missing, unreadable, not an
    /// array, or has no human commits.
    pub fn changelog(&self, dir: &Path) -> Result<Option<String>> {
        let commits = match self.read_commits(dir) {
            Ok(Some(commits)) => commits,
            Ok(None) => return Ok(None),
            Err(Error::MalformedCommitHistory { path, message }) => {
                warn!("Ignoring malformed commit history {}: {}", path, message);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let lines: Vec<String> = commits
            .iter()
            .filter(|c| c.commit.author.name != self.config.automation_author)
            .map(|c| format!("{}: {}", c.short_sha(), c.commit.message))
            .collect();

        if lines.is_empty() {
            return Ok(None);
        }
        Ok(Some(lines.join("\n")))
    }

    /// Repository URL recorded in the trigger event
    pub fn repo_url(&self, dir: &Path) -> Result<Option<String>> {
        Ok(self
            .read_event(dir)?
            .and_then(|event| event.repository_url)
            .filter(|url| !url.is_empty()))
    }

    /// Last update of the directory in seconds since the epoch
    ///
    /// Without a trigger event the archive modification time is used, or 0
    /// when there is no archive either.
    pub fn last_updated(&self, dir: &Path) -> Result<i64> {
        let Some(event) = self.read_event(dir)? else {
            let archive = dir.join(&self.config.archive_file_name);
            if !archive.is_file() {
                return Ok(0);
            }
            return file_mtime(&archive);
        };

        match event.kind {
            TriggerKind::Push { timestamp } => parse_timestamp(&timestamp),
            TriggerKind::Release { created_at } => parse_timestamp(&created_at),
            TriggerKind::ManualDispatch => {
                let path = dir.join(&self.config.commits_file_name);
                if !path.is_file() {
                    return Err(Error::missing_commit_history(path.display().to_string()));
                }

                let commits = self.read_commits(dir)?.ok_or_else(|| {
                    Error::malformed_commit_history(
                        path.display().to_string(),
                        "expected an array of commits",
                    )
                })?;
                let newest = commits
                    .first()
                    .ok_or_else(|| Error::missing_commit_history(path.display().to_string()))?;
                let date = newest.commit.author.date.as_deref().ok_or_else(|| {
                    Error::malformed_commit_history(
                        path.display().to_string(),
                        format!("commit {} has no author date", newest.short_sha()),
                    )
                })?;

                parse_timestamp(date)
            }
        }
    }

    /// Commit history, or `None` if the file is missing or not an array
    fn read_commits(&self, dir: &Path) -> Result<Option<Vec<CommitRecord>>> {
        let path = dir.join(&self.config.commits_file_name);
        if !path.is_file() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let value: Value = serde_json::from_str(&content)
            .map_err(|e| Error::malformed_commit_history(path.display().to_string(), e))?;

        if !value.is_array() {
            debug!("{} is not an array, ignoring", path.display());
            return Ok(None);
        }

        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| Error::malformed_commit_history(path.display().to_string(), e))
    }

    /// Classified trigger event, or `None` if the file is missing
    fn read_event(&self, dir: &Path) -> Result<Option<TriggerEvent>> {
        let path = dir.join(&self.config.event_file_name);
        if !path.is_file() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        TriggerEvent::from_json(&content)
            .map(Some)
            .map_err(|e| Error::malformed_event(path.display().to_string(), e))
    }
}

/// Parse an ISO-8601 timestamp with offset, or the `...Z` UTC form, into
/// seconds since the epoch
pub fn parse_timestamp(value: &str) -> Result<i64> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.timestamp());
    }
    if let Ok(parsed) = DateTime::parse_from_str(value, SPACED_OFFSET_FORMAT) {
        return Ok(parsed.timestamp());
    }

    NaiveDateTime::parse_from_str(value, UTC_Z_FORMAT)
        .map(|naive| naive.and_utc().timestamp())
        .map_err(|_| Error::malformed_timestamp(value))
}

/// Modification time of a file in whole seconds since the epoch
fn file_mtime(path: &Path) -> Result<i64> {
    let modified = fs::metadata(path)?.modified()?;
    Ok(match modified.duration_since(UNIX_EPOCH) {
        Ok(since) => since.as_secs() as i64,
        Err(before) => -(before.duration().as_secs() as i64),
    })
}
