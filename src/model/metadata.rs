//! Snapshot document metadata.

use indexmap::IndexMap;
use serde::Serialize;

/// Metadata carried by a snapshot document.
///
/// Never diffed. Reports show it side by side for context.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SnapshotMetadata {
    /// When the snapshot was generated, as written in the document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    /// The file the snapshot was generated from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    /// Any other metadata keys, kept verbatim
    #[serde(skip_serializing_if = "IndexMap::is_empty", flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl SnapshotMetadata {
    /// Build metadata from a document's `metadata` object.
    ///
    /// `generated_at` and `source_file` are rendered to strings whatever
    /// their JSON type; everything else lands in `extra`.
    #[must_use]
    pub fn from_object(object: &serde_json::Map<String, serde_json::Value>) -> Self {
        let mut metadata = Self::default();
        for (key, value) in object {
            match key.as_str() {
                "generated_at" => metadata.generated_at = Some(display_value(value)),
                "source_file" => metadata.source_file = Some(display_value(value)),
                _ => {
                    metadata.extra.insert(key.clone(), value.clone());
                }
            }
        }
        metadata
    }

    /// Whether neither well-known field nor any extra key is present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.generated_at.is_none() && self.source_file.is_none() && self.extra.is_empty()
    }
}

fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
