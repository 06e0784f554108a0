//! Error types for plugin-repo-core

use thiserror::Error;

/// Result type alias using plugin-repo-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a catalog run
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration value
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest could not be read or is missing a required field
    #[error("Malformed manifest {path}: {message}")]
    MalformedManifest { path: String, message: String },

    /// Two plugin directories in one channel share an internal name
    #[error("Duplicate internal name '{internal_name}' in {channel} channel: {first} and {second}")]
    DuplicateIdentifier {
        internal_name: String,
        channel: String,
        first: String,
        second: String,
    },

    /// Commit history entries do not match the expected shape
    #[error("Malformed commit history {path}: {message}")]
    MalformedCommitHistory { path: String, message: String },

    /// Trigger event record does not match the expected shape
    #[error("Malformed trigger event {path}: {message}")]
    MalformedEvent { path: String, message: String },

    /// A manual dispatch was recorded without any commits to date it by
    #[error("Manual dispatch event in {path} requires a non-empty commit history")]
    MissingCommitHistory { path: String },

    /// Timestamp in neither RFC 3339 nor `%Y-%m-%dT%H:%M:%SZ` form
    #[error("Malformed timestamp: '{value}'")]
    MalformedTimestamp { value: String },

    /// Plugin archive could not be opened or read
    #[error("Archive error {path}: {message}")]
    Archive { path: String, message: String },
}

impl Error {
    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a malformed manifest error
    pub fn malformed_manifest(path: impl Into<String>, message: impl ToString) -> Self {
        Self::MalformedManifest {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Create a malformed commit history error
    pub fn malformed_commit_history(path: impl Into<String>, message: impl ToString) -> Self {
        Self::MalformedCommitHistory {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Create a malformed event error
    pub fn malformed_event(path: impl Into<String>, message: impl ToString) -> Self {
        Self::MalformedEvent {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Create a missing commit history error
    pub fn missing_commit_history(path: impl Into<String>) -> Self {
        Self::MissingCommitHistory { path: path.into() }
    }

    /// Create a malformed timestamp error
    pub fn malformed_timestamp(value: impl Into<String>) -> Self {
        Self::MalformedTimestamp {
            value: value.into(),
        }
    }

    /// Create an archive error
    pub fn archive(path: impl Into<String>, message: impl ToString) -> Self {
        Self::Archive {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
