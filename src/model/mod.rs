//! In-memory representation of a metrics snapshot.
//!
//! A snapshot is a two-level mapping, metric name to field name to value,
//! plus optional document metadata. Both input formats (JSON and YAML) are
//! normalized to [`Snapshot`] before any diff operation.

mod metadata;
mod snapshot;

pub use metadata::SnapshotMetadata;
pub use snapshot::{FieldValue, MetricRecord, Snapshot};
