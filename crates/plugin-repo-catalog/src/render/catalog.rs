//! Full catalog snapshot (`master.json`)

use super::sorted_by_id;
use plugin_repo_core::types::CatalogEntry;
use plugin_repo_core::Result;
use serde_json::Value;

/// Serialize every entry, hidden ones included, as a pretty-printed JSON
/// array sorted by internal name with object keys in alphabetical order
pub fn render_catalog(entries: &[CatalogEntry]) -> Result<String> {
    let values = sorted_by_id(entries)
        .into_iter()
        .map(|entry| serde_json::to_value(entry).map(sort_keys))
        .collect::<serde_json::Result<Vec<_>>>()?;

    Ok(serde_json::to_string_pretty(&Value::Array(values))?)
}

/// Rebuild objects with their keys in ascending order, recursively
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut fields: Vec<(String, Value)> = map.into_iter().collect();
            fields.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, sort_keys(value)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}
