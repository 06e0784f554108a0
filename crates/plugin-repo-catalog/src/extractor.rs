//! Channel scanning and manifest extraction
//!
//! A plugin directory is any directory under `<plugins_root>/<channel>/`
//! that holds the packaged archive. Its name is the plugin's public slug;
//! the manifest is read from a loose `<slug>.json` next to the archive, or
//! from the `<slug>.json` entry inside the archive.

use plugin_repo_core::types::{Channel, PluginManifest};
use plugin_repo_core::{Error, RepoConfig, Result};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;
use zip::result::ZipError;
use zip::ZipArchive;

/// A plugin as found in one channel
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedPlugin {
    /// Channel the plugin was found in
    pub channel: Channel,

    /// Directory name, used in download links
    pub slug: String,

    /// Plugin directory
    pub dir: PathBuf,

    pub manifest: PluginManifest,
}

/// Plugins of one channel keyed by internal name
pub type ChannelManifests = BTreeMap<String, PublishedPlugin>;

/// Reads every plugin manifest of a channel
pub struct ManifestExtractor<'a> {
    config: &'a RepoConfig,
}

impl<'a> ManifestExtractor<'a> {
    pub fn new(config: &'a RepoConfig) -> Self {
        Self { config }
    }

    /// Extract all manifests of `channel`
    ///
    /// A missing channel root yields an empty map.
    pub fn extract(&self, channel: Channel) -> Result<ChannelManifests> {
        let root = self.config.channel_root(channel);
        let mut manifests = ChannelManifests::new();

        if !root.is_dir() {
            warn!("Channel root {} does not exist, no {} plugins", root, channel);
            return Ok(manifests);
        }

        for entry in WalkDir::new(&root).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_dir() {
                continue;
            }

            let dir = entry.path();
            if !dir.join(&self.config.archive_file_name).is_file() {
                continue;
            }

            let Some(slug) = entry.file_name().to_str() else {
                warn!("Skipping plugin directory with non UTF-8 name: {:?}", dir);
                continue;
            };

            let manifest = self.read_manifest(dir, slug)?;
            debug!(
                "Found {} {} v{} in {}",
                channel, manifest.internal_name, manifest.assembly_version, slug
            );

            let plugin = PublishedPlugin {
                channel,
                slug: slug.to_string(),
                dir: dir.to_path_buf(),
                manifest,
            };

            if let Some(existing) = manifests.get(&plugin.manifest.internal_name) {
                return Err(Error::DuplicateIdentifier {
                    internal_name: plugin.manifest.internal_name.clone(),
                    channel: channel.to_string(),
                    first: existing.slug.clone(),
                    second: plugin.slug,
                });
            }
            manifests.insert(plugin.manifest.internal_name.clone(), plugin);
        }

        info!("Extracted {} {} manifests", manifests.len(), channel);
        Ok(manifests)
    }

    /// Read the manifest of one plugin directory, loose file first
    pub fn read_manifest(&self, dir: &Path, slug: &str) -> Result<PluginManifest> {
        let manifest_name = format!("{}.json", slug);
        let loose_path = dir.join(&manifest_name);

        let (source, content) = if loose_path.is_file() {
            let source = loose_path.display().to_string();
            let bytes = fs::read(&loose_path)?;
            let content = String::from_utf8(bytes)
                .map_err(|e| Error::malformed_manifest(&source, e))?;
            (source, content)
        } else {
            let archive_path = dir.join(&self.config.archive_file_name);
            let content = read_archive_entry(&archive_path, &manifest_name)?;
            (
                format!("{}!{}", archive_path.display(), manifest_name),
                content,
            )
        };

        PluginManifest::from_json(content.trim_start_matches('\u{feff}'))
            .map_err(|e| Error::malformed_manifest(source, e))
    }
}

/// Read one entry of a zip archive as UTF-8 text
fn read_archive_entry(archive_path: &Path, entry_name: &str) -> Result<String> {
    let display = archive_path.display().to_string();
    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file).map_err(|e| Error::archive(&display, e))?;

    let mut entry = archive.by_name(entry_name).map_err(|e| match e {
        ZipError::FileNotFound => {
            Error::malformed_manifest(&display, format!("archive has no entry '{}'", entry_name))
        }
        other => Error::archive(&display, other),
    })?;

    let mut content = String::new();
    entry
        .read_to_string(&mut content)
        .map_err(|e| Error::malformed_manifest(&display, e))?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn write_zip(path: &Path, entries: &[(&str, &str)]) {
        let mut writer = ZipWriter::new(File::create(path).unwrap());
        for (name, content) in entries {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn test_read_archive_entry() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("latest.zip");
        write_zip(&archive, &[("Foo.json", "{}"), ("Foo.dll", "bin")]);

        assert_eq!(read_archive_entry(&archive, "Foo.json").unwrap(), "{}");
    }

    #[test]
    fn test_missing_archive_entry_is_malformed_manifest() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("latest.zip");
        write_zip(&archive, &[("Other.json", "{}")]);

        let err = read_archive_entry(&archive, "Foo.json").unwrap_err();
        assert!(matches!(err, Error::MalformedManifest { .. }), "got {:?}", err);
    }

    #[test]
    fn test_corrupt_archive_is_archive_error() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("latest.zip");
        fs::write(&archive, b"not a zip").unwrap();

        let err = read_archive_entry(&archive, "Foo.json").unwrap_err();
        assert!(matches!(err, Error::Archive { .. }), "got {:?}", err);
    }
}
