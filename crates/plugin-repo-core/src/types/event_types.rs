//! Publish metadata written next to each plugin archive
//!
//! - `commits.json`: commit list of the publish, newest first
//! - `event.json`: payload of the automation event that triggered the publish

use serde::Deserialize;

/// One entry of the commit history record
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommitRecord {
    /// Full commit hash
    pub sha: String,

    pub commit: CommitDetail,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommitDetail {
    pub message: String,

    pub author: CommitAuthor,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommitAuthor {
    pub name: String,

    /// Authoring timestamp as recorded by the forge
    #[serde(default)]
    pub date: Option<String>,
}

impl CommitRecord {
    /// Abbreviated hash (first seven characters)
    pub fn short_sha(&self) -> &str {
        match self.sha.char_indices().nth(7) {
            Some((idx, _)) => &self.sha[..idx],
            None => &self.sha,
        }
    }
}

/// How a publish run was started, classified once from the event payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerKind {
    /// `on: push`, dated by the head commit
    Push { timestamp: String },

    /// `on: release`, dated by the release creation time
    Release { created_at: String },

    /// `on: workflow_dispatch`, dated by the newest commit of the history
    ManualDispatch,
}

/// Trigger event record (`event.json`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawTriggerEvent")]
pub struct TriggerEvent {
    pub kind: TriggerKind,

    /// `repository.html_url` of the payload, if any
    pub repository_url: Option<String>,
}

impl TriggerEvent {
    /// Parse and classify an event payload
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}

#[derive(Deserialize)]
struct RawTriggerEvent {
    #[serde(default)]
    head_commit: Option<RawHeadCommit>,

    #[serde(default)]
    created_at: Option<String>,

    #[serde(default)]
    repository: Option<RawRepository>,
}

#[derive(Deserialize)]
struct RawHeadCommit {
    timestamp: String,
}

#[derive(Deserialize)]
struct RawRepository {
    #[serde(default)]
    html_url: Option<String>,
}

impl From<RawTriggerEvent> for TriggerEvent {
    fn from(raw: RawTriggerEvent) -> Self {
        let kind = match (raw.head_commit, raw.created_at) {
            (Some(head), _) => TriggerKind::Push {
                timestamp: head.timestamp,
            },
            (None, Some(created_at)) => TriggerKind::Release { created_at },
            (None, None) => TriggerKind::ManualDispatch,
        };

        Self {
            kind,
            repository_url: raw.repository.and_then(|r| r.html_url),
        }
    }
}
