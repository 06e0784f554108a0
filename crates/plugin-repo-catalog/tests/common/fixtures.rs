//! Temporary repository layouts
//!
//! `RepoFixture` owns a temp dir laid out like `docs/plugins/` and hands out
//! `PluginDir` builders that write archives and metadata files into it.

use camino::Utf8PathBuf;
use plugin_repo_catalog::CatalogPipeline;
use plugin_repo_core::types::Channel;
use plugin_repo_core::RepoConfig;
use serde_json::Value;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// A plugin repository rooted in a temp dir
pub struct RepoFixture {
    _temp: TempDir,
    pub config: RepoConfig,
}

impl RepoFixture {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(temp.path().join("docs").join("plugins"))
            .expect("temp path should be valid UTF-8");
        fs::create_dir_all(&root).unwrap();

        let config = RepoConfig {
            plugins_root: root,
            ..RepoConfig::default()
        };
        Self {
            _temp: temp,
            config,
        }
    }

    /// Create (or reuse) the directory of `slug` in `channel`
    pub fn plugin(&self, channel: Channel, slug: &str) -> PluginDir {
        let path = self
            .config
            .channel_root(channel)
            .join(slug)
            .into_std_path_buf();
        fs::create_dir_all(&path).unwrap();
        PluginDir {
            path,
            slug: slug.to_string(),
            config: self.config.clone(),
        }
    }

    /// Publish a plugin whose manifest lives only inside the archive
    pub fn publish(&self, channel: Channel, slug: &str, manifest: Value) -> PluginDir {
        self.plugin(channel, slug).archive(&manifest)
    }

    pub fn pipeline(&self) -> CatalogPipeline {
        CatalogPipeline::new(self.config.clone())
    }

    pub fn read_output(&self, file_name: &str) -> String {
        fs::read_to_string(self.config.plugins_root.join(file_name)).unwrap()
    }
}

/// Builder for one plugin directory
pub struct PluginDir {
    pub path: PathBuf,
    pub slug: String,
    config: RepoConfig,
}

impl PluginDir {
    /// Write the archive with `<slug>.json` inside
    pub fn archive(self, manifest: &Value) -> Self {
        let name = format!("{}.json", self.slug);
        let content = manifest.to_string();
        self.archive_with(&[(name.as_str(), content.as_str()), ("plugin.dll", "MZ")])
    }

    /// Write the archive with arbitrary entries
    pub fn archive_with(self, entries: &[(&str, &str)]) -> Self {
        let file = File::create(self.path.join(&self.config.archive_file_name)).unwrap();
        let mut writer = ZipWriter::new(file);
        for (name, content) in entries {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
        self
    }

    /// Write a loose `<slug>.json` next to the archive
    pub fn loose_manifest(self, manifest: &Value) -> Self {
        let path = self.path.join(format!("{}.json", self.slug));
        self.raw_file_at(&path, &manifest.to_string())
    }

    pub fn commits(self, commits: Value) -> Self {
        let name = self.config.commits_file_name.clone();
        self.raw_file(&name, &commits.to_string())
    }

    pub fn event(self, event: Value) -> Self {
        let name = self.config.event_file_name.clone();
        self.raw_file(&name, &event.to_string())
    }

    /// Write any file into the plugin directory
    pub fn raw_file(self, name: &str, content: &str) -> Self {
        let path = self.path.join(name);
        self.raw_file_at(&path, content)
    }

    /// Write a file with arbitrary, possibly non UTF-8, bytes
    pub fn raw_bytes(self, name: &str, content: &[u8]) -> Self {
        fs::write(self.path.join(name), content).unwrap();
        self
    }

    fn raw_file_at(self, path: &Path, content: &str) -> Self {
        fs::write(path, content).unwrap();
        self
    }

    pub fn archive_path(&self) -> PathBuf {
        self.path.join(&self.config.archive_file_name)
    }

    /// Archive mtime as the resolver reports it
    pub fn archive_mtime(&self) -> i64 {
        let modified = fs::metadata(self.archive_path())
            .unwrap()
            .modified()
            .unwrap();
        modified
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64
    }
}
