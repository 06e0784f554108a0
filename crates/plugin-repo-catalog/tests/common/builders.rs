//! JSON builders for manifests and publish metadata

use serde_json::{json, Map, Value};

/// Builder for plugin manifest JSON with sensible test defaults
#[derive(Debug, Clone)]
pub struct ManifestBuilder {
    fields: Map<String, Value>,
}

impl ManifestBuilder {
    /// Manifest with the four required fields
    pub fn new(internal_name: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("InternalName".to_string(), json!(internal_name));
        fields.insert("Name".to_string(), json!(format!("{} Plugin", internal_name)));
        fields.insert("Author".to_string(), json!("horoscope"));
        fields.insert("AssemblyVersion".to_string(), json!("1.0.0.0"));
        Self { fields }
    }

    pub fn version(self, version: &str) -> Self {
        self.field("AssemblyVersion", json!(version))
    }

    pub fn name(self, name: &str) -> Self {
        self.field("Name", json!(name))
    }

    pub fn author(self, author: &str) -> Self {
        self.field("Author", json!(author))
    }

    pub fn punchline(self, punchline: &str) -> Self {
        self.field("Punchline", json!(punchline))
    }

    pub fn description(self, description: &str) -> Self {
        self.field("Description", json!(description))
    }

    pub fn hidden(self, hidden: bool) -> Self {
        self.field("IsHide", json!(hidden))
    }

    pub fn repo_url(self, url: &str) -> Self {
        self.field("RepoUrl", json!(url))
    }

    pub fn icon_url(self, url: &str) -> Self {
        self.field("IconUrl", json!(url))
    }

    pub fn tags(self, tags: &[&str]) -> Self {
        self.field("Tags", json!(tags))
    }

    pub fn category_tags(self, tags: &[&str]) -> Self {
        self.field("CategoryTags", json!(tags))
    }

    /// Set an arbitrary key
    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Drop a key, e.g. to produce an invalid manifest
    pub fn without(mut self, key: &str) -> Self {
        self.fields.remove(key);
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

/// One commit history entry
pub fn commit(sha: &str, message: &str, author: &str, date: &str) -> Value {
    json!({
        "sha": sha,
        "commit": {
            "message": message,
            "author": { "name": author, "date": date }
        }
    })
}

/// Payload of a push-triggered publish
pub fn push_event(timestamp: &str) -> Value {
    json!({
        "ref": "refs/heads/master",
        "head_commit": { "id": "abc", "timestamp": timestamp },
        "repository": { "html_url": super::REPO_URL }
    })
}

/// Payload of a release-triggered publish
pub fn release_event(created_at: &str) -> Value {
    json!({
        "action": "published",
        "created_at": created_at
    })
}

/// Payload of a manually dispatched publish
pub fn manual_event(repo_url: Option<&str>) -> Value {
    match repo_url {
        Some(url) => json!({ "inputs": {}, "repository": { "html_url": url } }),
        None => json!({ "inputs": {} }),
    }
}
