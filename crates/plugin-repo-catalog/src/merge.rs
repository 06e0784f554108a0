//! Merging of stable and testing channels into catalog entries
//!
//! Testing wins for every field it provides, except the release version
//! and install link, which come from stable whenever the plugin is
//! published there.

use crate::extractor::{ChannelManifests, PublishedPlugin};
use crate::resolver::MetadataResolver;
use plugin_repo_core::types::{CatalogEntry, Channel, DERIVED_FIELDS};
use plugin_repo_core::{RepoConfig, Result};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info};

/// Combines both channels into one catalog
pub struct MergeEngine<'a> {
    config: &'a RepoConfig,
    resolver: MetadataResolver<'a>,
}

impl<'a> MergeEngine<'a> {
    pub fn new(config: &'a RepoConfig) -> Self {
        Self {
            config,
            resolver: MetadataResolver::new(config),
        }
    }

    /// Merge every internal name present in either channel
    ///
    /// Entries come out ordered by internal name. Any resolver failure
    /// aborts the whole merge.
    pub fn merge(
        &self,
        stable: &ChannelManifests,
        testing: &ChannelManifests,
    ) -> Result<Vec<CatalogEntry>> {
        let ids: BTreeSet<&String> = stable.keys().chain(testing.keys()).collect();

        let mut entries = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(entry) = self.merge_plugin(stable.get(id), testing.get(id))? {
                entries.push(entry);
            }
        }

        info!("Merged {} catalog entries", entries.len());
        Ok(entries)
    }

    /// Merge the two publications of one plugin; `None` if neither exists
    pub fn merge_plugin(
        &self,
        stable: Option<&PublishedPlugin>,
        testing: Option<&PublishedPlugin>,
    ) -> Result<Option<CatalogEntry>> {
        let Some(base) = testing.or(stable) else {
            return Ok(None);
        };
        let manifest = &base.manifest;
        debug!("Merging {}", manifest.internal_name);

        let changelog = self.first_resolved(testing, stable, |dir| self.resolver.changelog(dir))?;

        let explicit_repo = testing
            .and_then(|p| p.manifest.repo_url.clone())
            .or_else(|| stable.and_then(|p| p.manifest.repo_url.clone()))
            .filter(|url| !url.is_empty());
        let repo_url = match explicit_repo {
            Some(url) => Some(url),
            None => self.first_resolved(testing, stable, |dir| self.resolver.repo_url(dir))?,
        };

        let is_hide = testing
            .and_then(|p| p.manifest.is_hide)
            .or_else(|| stable.and_then(|p| p.manifest.is_hide))
            .unwrap_or(false);

        let icon_url = testing
            .and_then(|p| p.manifest.icon_url.clone())
            .or_else(|| stable.and_then(|p| p.manifest.icon_url.clone()));

        let assembly_version = stable
            .unwrap_or(base)
            .manifest
            .assembly_version
            .clone();
        let testing_assembly_version = testing.map(|p| p.manifest.assembly_version.clone());

        let last_updated = self
            .last_updated(stable)?
            .max(self.last_updated(testing)?);

        let stable_link = stable.map(|p| self.config.download_link(Channel::Stable, &p.slug));
        let testing_link = testing.map(|p| self.config.download_link(Channel::Testing, &p.slug));
        let download_link_install = stable_link
            .clone()
            .or_else(|| testing_link.clone())
            .unwrap_or_default();
        let download_link_testing = testing_link.or(stable_link).unwrap_or_default();

        let mut extra = manifest.extra.clone();
        for field in DERIVED_FIELDS {
            extra.remove(*field);
        }

        Ok(Some(CatalogEntry {
            internal_name: manifest.internal_name.clone(),
            name: manifest.name.clone(),
            author: manifest.author.clone(),
            punchline: manifest.punchline.clone(),
            description: manifest.description.clone(),
            category_tags: manifest.category_tags.clone(),
            tags: manifest.tags.clone(),
            icon_url,
            repo_url,
            is_hide,
            changelog,
            assembly_version,
            testing_assembly_version,
            is_testing_exclusive: stable.is_none() && testing.is_some(),
            last_updated,
            download_link_install,
            download_link_testing,
            extra,
        }))
    }

    /// First non-empty lookup result, testing directory first
    fn first_resolved<F>(
        &self,
        testing: Option<&PublishedPlugin>,
        stable: Option<&PublishedPlugin>,
        lookup: F,
    ) -> Result<Option<String>>
    where
        F: Fn(&Path) -> Result<Option<String>>,
    {
        for plugin in [testing, stable].into_iter().flatten() {
            if let Some(value) = lookup(&plugin.dir)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    /// Unpublished channels count as the epoch
    fn last_updated(&self, plugin: Option<&PublishedPlugin>) -> Result<i64> {
        match plugin {
            Some(p) => self.resolver.last_updated(&p.dir),
            None => Ok(0),
        }
    }
}
