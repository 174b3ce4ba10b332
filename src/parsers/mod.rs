//! Snapshot document parsers.
//!
//! A snapshot document is a JSON (or YAML) object of the form
//!
//! ```json
//! {
//!   "metadata": { "generated_at": "...", "source_file": "..." },
//!   "aggregate_metrics": {
//!     "latency": { "p50": 10.0, "p99": 50.0 }
//!   }
//! }
//! ```
//!
//! A missing `aggregate_metrics` key yields an empty snapshot. Metric entries
//! that are not objects are skipped; field values of any JSON type are kept,
//! but only finite numbers take part in comparisons.
//!
//! ## Usage
//!
//! ```no_run
//! use metrics_diff::parsers::parse_snapshot;
//! use std::path::Path;
//!
//! let snapshot = parse_snapshot(Path::new("metrics.json")).unwrap();
//! println!("{} metrics", snapshot.metric_count());
//! ```

mod detection;

pub use detection::SnapshotFormat;

use crate::error::{ErrorContext, LoadErrorKind, MetricsDiffError, Result};
use crate::model::{FieldValue, MetricRecord, Snapshot, SnapshotMetadata};
use serde_json::{Map, Value};
use std::path::Path;

/// Key holding the metric table.
pub const METRICS_KEY: &str = "aggregate_metrics";
/// Key holding the optional metadata object.
pub const METADATA_KEY: &str = "metadata";

/// Parse a snapshot file, detecting its format.
pub fn parse_snapshot(path: &Path) -> Result<Snapshot> {
    let content = std::fs::read_to_string(path).map_err(|e| MetricsDiffError::io(path, e))?;
    let format = SnapshotFormat::detect(path, &content);
    tracing::debug!("Parsing {} as {}", path.display(), format);
    parse_snapshot_str(&content, format).with_context(|| path.display().to_string())
}

/// Parse a snapshot document from a string.
pub fn parse_snapshot_str(content: &str, format: SnapshotFormat) -> Result<Snapshot> {
    let document: Value = match format {
        SnapshotFormat::Json => serde_json::from_str(content)?,
        SnapshotFormat::Yaml => serde_yaml::from_str(content)?,
    };
    snapshot_from_value(document)
}

/// Build a snapshot from an already-decoded document.
pub fn snapshot_from_value(document: Value) -> Result<Snapshot> {
    let mut root = match document {
        Value::Object(root) => root,
        other => {
            return Err(MetricsDiffError::invalid_shape(
                "snapshot document",
                format!("expected an object at the top level, found {}", type_name(&other)),
            ))
        }
    };

    let metadata = match root.remove(METADATA_KEY) {
        Some(Value::Object(object)) => Some(SnapshotMetadata::from_object(&object)),
        Some(other) => {
            tracing::debug!("Ignoring non-object metadata ({})", type_name(&other));
            None
        }
        None => None,
    };

    let metrics = match root.remove(METRICS_KEY) {
        Some(Value::Object(metrics)) => metrics,
        Some(other) => {
            return Err(MetricsDiffError::load(
                "snapshot document",
                LoadErrorKind::InvalidShape(format!(
                    "'{METRICS_KEY}' must be an object, found {}",
                    type_name(&other)
                )),
            ))
        }
        None => Map::new(),
    };

    let mut snapshot = Snapshot::new();
    for (metric_name, value) in metrics {
        match value {
            Value::Object(fields) => {
                let record: MetricRecord = fields
                    .into_iter()
                    .map(|(field, value)| (field, FieldValue::from(value)))
                    .collect();
                snapshot.metrics.insert(metric_name, record);
            }
            other => {
                tracing::debug!(
                    "Skipping metric '{}': expected an object, found {}",
                    metric_name,
                    type_name(&other)
                );
            }
        }
    }
    snapshot.metadata = metadata;

    Ok(snapshot)
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
