//! Snapshot and field value types.

use super::SnapshotMetadata;
use indexmap::IndexMap;
use serde::Serialize;

/// Fields of a single metric, in document order.
pub type MetricRecord = IndexMap<String, FieldValue>;

/// A single field value from a metrics document.
///
/// Only [`FieldValue::Number`] takes part in comparisons. Everything else is
/// kept so the document round-trips, but the diff engine skips it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A finite numeric value
    Number(f64),
    /// Any non-numeric value (string, bool, null, array, object, non-finite)
    Other(serde_json::Value),
}

impl FieldValue {
    /// Returns the numeric value, if this field is numeric.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Other(_) => None,
        }
    }

    /// Whether this field takes part in comparisons.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            Self::Number(value)
        } else {
            Self::Other(serde_json::Value::String(value.to_string()))
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Other(serde_json::Value::String(value.to_string()))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Other(serde_json::Value::Bool(value))
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        match value.as_f64() {
            Some(n) if value.is_number() && n.is_finite() => Self::Number(n),
            _ => Self::Other(value),
        }
    }
}

/// One side (old or new) of a metrics comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snapshot {
    /// Metric name to field record, in document order
    pub metrics: IndexMap<String, MetricRecord>,
    /// Optional document metadata, surfaced verbatim to reports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<SnapshotMetadata>,
}

impl Snapshot {
    /// Create an empty snapshot
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a metric with the given fields.
    #[must_use]
    pub fn with_metric<K, V>(
        mut self,
        name: impl Into<String>,
        fields: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.insert_metric(name, fields);
        self
    }

    /// Attach metadata to this snapshot.
    #[must_use]
    pub fn with_metadata(mut self, metadata: SnapshotMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Insert (or replace) a metric with the given fields.
    pub fn insert_metric<K, V>(
        &mut self,
        name: impl Into<String>,
        fields: impl IntoIterator<Item = (K, V)>,
    ) where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let record: MetricRecord = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.metrics.insert(name.into(), record);
    }

    /// Look up a metric by name
    #[must_use]
    pub fn metric(&self, name: &str) -> Option<&MetricRecord> {
        self.metrics.get(name)
    }

    /// Number of metrics in this snapshot
    #[must_use]
    pub fn metric_count(&self) -> usize {
        self.metrics.len()
    }

    /// Number of numeric fields across all metrics
    #[must_use]
    pub fn numeric_field_count(&self) -> usize {
        self.metrics
            .values()
            .flat_map(IndexMap::values)
            .filter(|v| v.is_numeric())
            .count()
    }

    /// Whether the snapshot has no metrics
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_value_from_json() {
        assert_eq!(FieldValue::from(json!(3)), FieldValue::Number(3.0));
        assert_eq!(FieldValue::from(json!(2.5)), FieldValue::Number(2.5));
        assert!(!FieldValue::from(json!("fast")).is_numeric());
        assert!(!FieldValue::from(json!(true)).is_numeric());
        assert!(!FieldValue::from(json!(null)).is_numeric());
        assert!(!FieldValue::from(json!([1, 2])).is_numeric());
    }

    #[test]
    fn test_non_finite_float_is_not_numeric() {
        assert!(!FieldValue::from(f64::NAN).is_numeric());
        assert!(!FieldValue::from(f64::INFINITY).is_numeric());
        assert_eq!(FieldValue::from(1.5).as_number(), Some(1.5));
    }

    #[test]
    fn test_builder_preserves_order() {
        let snapshot = Snapshot::new()
            .with_metric("zeta", [("b", 1.0), ("a", 2.0)])
            .with_metric("alpha", [("count", 3.0)]);

        let names: Vec<_> = snapshot.metrics.keys().cloned().collect();
        assert_eq!(names, vec!["zeta", "alpha"]);

        let fields: Vec<_> = snapshot
            .metric("zeta")
            .map(|m| m.keys().cloned().collect())
            .unwrap_or_default();
        assert_eq!(fields, vec!["b", "a"]);
    }

    #[test]
    fn test_counts() {
        let mut snapshot = Snapshot::new().with_metric("latency", [("p50", 10.0), ("p99", 50.0)]);
        snapshot.insert_metric("info", [("unit", FieldValue::from("ms"))]);

        assert_eq!(snapshot.metric_count(), 2);
        assert_eq!(snapshot.numeric_field_count(), 2);
        assert!(!snapshot.is_empty());
        assert!(Snapshot::new().is_empty());
    }
}
