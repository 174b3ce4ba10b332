//! Ordering and display filtering of change records.

use super::{ChangeRecord, ChangeType};
use crate::config::{ComparisonConfig, SortKey};
use std::cmp::Ordering;

/// Apply unchanged-suppression, ordering and the size cap, in that order.
///
/// The sort is stable, so records comparing equal keep discovery order.
#[must_use]
pub fn order_and_filter(
    mut records: Vec<ChangeRecord>,
    config: &ComparisonConfig,
) -> Vec<ChangeRecord> {
    if !config.show_unchanged {
        records.retain(|r| r.change_type() != ChangeType::Unchanged);
    }

    records.sort_by(|a, b| compare_by(config.sort_by, a, b));

    if config.max_changes > 0 {
        records.truncate(config.max_changes);
    }
    records
}

fn compare_by(key: SortKey, a: &ChangeRecord, b: &ChangeRecord) -> Ordering {
    match key {
        SortKey::MetricName => a
            .metric_name()
            .cmp(b.metric_name())
            .then_with(|| a.field_name().cmp(b.field_name())),
        SortKey::FieldName => a
            .field_name()
            .cmp(b.field_name())
            .then_with(|| a.metric_name().cmp(b.metric_name())),
        SortKey::ChangeType => a
            .change_type()
            .label()
            .cmp(b.change_type().label())
            .then_with(|| a.metric_name().cmp(b.metric_name())),
        SortKey::Percentage => b
            .abs_percentage()
            .total_cmp(&a.abs_percentage())
            .then_with(|| a.metric_name().cmp(b.metric_name())),
    }
}
