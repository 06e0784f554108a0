//! Configuration loading and management

mod loader;

pub use loader::{RepoConfig, CONFIG_FILE_NAMES};
