//! Common test utilities for plugin-repo-catalog
//!
//! This module provides shared test infrastructure including:
//! - Constants for authors, timestamps and hashes
//! - Builders for manifest, commit and event JSON
//! - A temporary repository layout to write plugin directories into
//! - Assertion helpers for merged catalogs

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod assertions;
pub mod builders;
pub mod constants;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use constants::*;
pub use fixtures::*;
