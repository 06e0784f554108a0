//! Plugin catalog generation
//!
//! This crate handles:
//! - Scanning the stable and testing channels for plugin manifests
//! - Resolving changelog, repository URL and last update per plugin
//! - Merging both channels into one catalog with testing-first precedence
//! - Rendering the JSON snapshot and the markdown listing

pub mod extractor;
pub mod merge;
pub mod pipeline;
pub mod render;
pub mod resolver;

pub use extractor::{ChannelManifests, ManifestExtractor, PublishedPlugin};
pub use merge::MergeEngine;
pub use pipeline::{CatalogOutput, CatalogPipeline, CatalogSummary};
pub use render::{render_catalog, render_listing};
pub use resolver::{parse_timestamp, MetadataResolver};
