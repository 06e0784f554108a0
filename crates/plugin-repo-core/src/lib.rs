//! # plugin-repo-core
//!
//! Core library for the plugin repository providing:
//! - Repository layout configuration (plugin-repo.yaml)
//! - Typed plugin manifests, publish metadata and catalog entries
//! - The error type shared by the catalog pipeline

pub mod config;
pub mod error;
pub mod types;

pub use config::RepoConfig;
pub use error::{Error, Result};
