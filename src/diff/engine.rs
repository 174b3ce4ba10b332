//! Snapshot diff engine implementation.

use super::{order_and_filter, ChangeRecord, DiffResult, DiffSummary};
use crate::config::{ComparisonConfig, Validatable};
use crate::error::Result;
use crate::model::{FieldValue, MetricRecord, Snapshot};

/// Diff engine for comparing metrics snapshots.
///
/// Holds a read-only configuration, so one engine can serve any number of
/// comparisons, including from several threads.
#[derive(Debug, Clone, Default)]
pub struct DiffEngine {
    config: ComparisonConfig,
}

impl DiffEngine {
    /// Create a diff engine with the given configuration.
    ///
    /// Fails if the configuration does not validate, e.g. a negative
    /// `float_precision` deserialized from a file or set on a struct literal.
    pub fn new(config: ComparisonConfig) -> Result<Self> {
        match config.validate().into_iter().next() {
            Some(err) => Err(err.into()),
            None => Ok(Self { config }),
        }
    }

    /// The configuration in use
    #[must_use]
    pub const fn config(&self) -> &ComparisonConfig {
        &self.config
    }

    /// Compute the raw change list, in discovery order.
    ///
    /// Metrics are visited in old-snapshot order, then metrics only present
    /// in the new snapshot; fields likewise. Excluded metrics, ignored
    /// fields and any pair with a non-numeric side produce no record.
    #[must_use]
    pub fn diff(&self, old: &Snapshot, new: &Snapshot) -> Vec<ChangeRecord> {
        let mut records = Vec::new();

        let new_only = new
            .metrics
            .keys()
            .filter(|name| !old.metrics.contains_key(name.as_str()));

        for metric_name in old.metrics.keys().chain(new_only) {
            if self.config.is_metric_excluded(metric_name) {
                tracing::debug!("Skipping excluded metric '{}'", metric_name);
                continue;
            }
            self.diff_metric(
                metric_name,
                old.metric(metric_name),
                new.metric(metric_name),
                &mut records,
            );
        }

        tracing::debug!(
            "Compared {} old and {} new metrics, {} records",
            old.metric_count(),
            new.metric_count(),
            records.len()
        );
        records
    }

    /// Diff, then order and filter, and package the result.
    ///
    /// The summary counts the raw list, so it reflects unchanged pairs and
    /// anything `max_changes` cut off.
    pub fn compare(&self, old: &Snapshot, new: &Snapshot) -> DiffResult {
        let raw = self.diff(old, new);
        let summary = DiffSummary::from_records(&raw);
        let changes = order_and_filter(raw, &self.config);

        tracing::debug!(
            "{} of {} records kept after filtering",
            changes.len(),
            summary.total_compared
        );
        DiffResult { summary, changes }
    }

    fn diff_metric(
        &self,
        metric_name: &str,
        old: Option<&MetricRecord>,
        new: Option<&MetricRecord>,
        records: &mut Vec<ChangeRecord>,
    ) {
        let old_fields = old.into_iter().flat_map(|m| m.keys());
        let new_only_fields = new
            .into_iter()
            .flat_map(|m| m.keys())
            .filter(|field| !old.is_some_and(|m| m.contains_key(field.as_str())));

        for field_name in old_fields.chain(new_only_fields) {
            if self.config.is_field_ignored(field_name) {
                continue;
            }

            let old_value = old.and_then(|m| m.get(field_name));
            let new_value = new.and_then(|m| m.get(field_name));
            if !all_present_numeric(old_value, new_value) {
                tracing::debug!("Skipping non-numeric field '{}.{}'", metric_name, field_name);
                continue;
            }

            if let Some(record) = ChangeRecord::classify(
                metric_name,
                field_name.as_str(),
                old_value.and_then(FieldValue::as_number),
                new_value.and_then(FieldValue::as_number),
                self.config.float_precision,
            ) {
                records.push(record);
            }
        }
    }
}

fn all_present_numeric(old: Option<&FieldValue>, new: Option<&FieldValue>) -> bool {
    old.map_or(true, FieldValue::is_numeric) && new.map_or(true, FieldValue::is_numeric)
}

/// Compute the raw change list for two snapshots.
pub fn diff_snapshots(
    old: &Snapshot,
    new: &Snapshot,
    config: &ComparisonConfig,
) -> Result<Vec<ChangeRecord>> {
    Ok(DiffEngine::new(config.clone())?.diff(old, new))
}
