//! End-to-end catalog run
//!
//! extract (stable, testing) -> merge -> render -> write. Both documents
//! are rendered before anything touches the disk, and each file is
//! replaced atomically, so a failed run leaves the previous outputs intact.

use crate::extractor::ManifestExtractor;
use crate::merge::MergeEngine;
use crate::render::{render_catalog, render_listing};
use plugin_repo_core::types::{CatalogEntry, Channel};
use plugin_repo_core::{RepoConfig, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Rendered outputs of one run
#[derive(Debug, Clone)]
pub struct CatalogOutput {
    pub entries: Vec<CatalogEntry>,

    /// Contents of the full catalog snapshot
    pub catalog_json: String,

    /// Contents of the markdown listing
    pub listing_markdown: String,
}

/// Counts reported after a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    pub entries: usize,
    pub hidden: usize,
    pub testing_exclusive: usize,
    pub with_testing_build: usize,
}

impl CatalogSummary {
    pub fn from_entries(entries: &[CatalogEntry]) -> Self {
        Self {
            entries: entries.len(),
            hidden: entries.iter().filter(|e| e.is_hide).count(),
            testing_exclusive: entries.iter().filter(|e| e.is_testing_exclusive).count(),
            with_testing_build: entries
                .iter()
                .filter(|e| e.testing_assembly_version.is_some())
                .count(),
        }
    }
}

/// Builds and writes the catalog for one repository layout
pub struct CatalogPipeline {
    config: RepoConfig,
}

impl CatalogPipeline {
    pub fn new(config: RepoConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RepoConfig {
        &self.config
    }

    /// Extract both channels and merge them
    pub fn build(&self) -> Result<Vec<CatalogEntry>> {
        let extractor = ManifestExtractor::new(&self.config);
        let stable = extractor.extract(Channel::Stable)?;
        let testing = extractor.extract(Channel::Testing)?;

        MergeEngine::new(&self.config).merge(&stable, &testing)
    }

    /// Render both documents in memory
    pub fn render(&self, entries: Vec<CatalogEntry>) -> Result<CatalogOutput> {
        let offset = self.config.listing_offset()?;
        let catalog_json = render_catalog(&entries)?;
        let listing_markdown = render_listing(&entries, &offset)?;

        Ok(CatalogOutput {
            entries,
            catalog_json,
            listing_markdown,
        })
    }

    /// Build and render without writing anything
    pub fn preview(&self) -> Result<CatalogOutput> {
        let entries = self.build()?;
        self.render(entries)
    }

    /// Replace both output files
    pub fn write(&self, output: &CatalogOutput) -> Result<()> {
        let catalog_path = self.config.catalog_path();
        let listing_path = self.config.listing_path();

        write_atomic(catalog_path.as_std_path(), &output.catalog_json)?;
        info!("Wrote {}", catalog_path);
        write_atomic(listing_path.as_std_path(), &output.listing_markdown)?;
        info!("Wrote {}", listing_path);

        Ok(())
    }

    /// Full run: build, render and write
    pub fn run(&self) -> Result<CatalogSummary> {
        let output = self.preview()?;
        self.write(&output)?;

        let summary = CatalogSummary::from_entries(&output.entries);
        info!(
            "Catalog updated: {} entries ({} hidden, {} testing-exclusive)",
            summary.entries, summary.hidden, summary.testing_exclusive
        );
        Ok(summary)
    }
}

/// Write via a temp file in the target directory, then rename over the target
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut file = NamedTempFile::new_in(parent)?;
    file.write_all(content.as_bytes())?;
    preserve_mode(file.as_file(), path)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;

    debug!("Persisted {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Give the temp file the mode of the file it replaces, or 0644 for a new one
#[cfg(unix)]
fn preserve_mode(file: &fs::File, target: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let permissions = match fs::metadata(target) {
        Ok(meta) => meta.permissions(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => fs::Permissions::from_mode(0o644),
        Err(e) => return Err(e),
    };
    file.set_permissions(permissions)
}

#[cfg(not(unix))]
fn preserve_mode(_file: &fs::File, _target: &Path) -> io::Result<()> {
    Ok(())
}
