//! Diff result structures.

use super::classifier::{classify, percentage_change};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Type of change
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    Increased,
    Decreased,
    Unchanged,
    New,
    Removed,
}

impl ChangeType {
    /// Every change type, in display order.
    pub const ALL: [Self; 5] = [
        Self::Increased,
        Self::Decreased,
        Self::Unchanged,
        Self::New,
        Self::Removed,
    ];

    /// Canonical lowercase label, used for sorting and config keys
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Increased => "increased",
            Self::Decreased => "decreased",
            Self::Unchanged => "unchanged",
            Self::New => "new",
            Self::Removed => "removed",
        }
    }

    /// Title-case label for display
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Increased => "Increased",
            Self::Decreased => "Decreased",
            Self::Unchanged => "Unchanged",
            Self::New => "New",
            Self::Removed => "Removed",
        }
    }
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The classified change of a single `(metric, field)` pair.
///
/// Records can only be built through [`ChangeRecord::classify`], which
/// derives the change type and percentage from the two values. At least one
/// side is always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeRecord {
    metric_name: String,
    field_name: String,
    old_value: Option<f64>,
    new_value: Option<f64>,
    change_type: ChangeType,
    percentage_change: Option<f64>,
}

impl ChangeRecord {
    /// Classify a pair of values. Returns `None` when both sides are absent.
    #[must_use]
    pub fn classify(
        metric_name: impl Into<String>,
        field_name: impl Into<String>,
        old_value: Option<f64>,
        new_value: Option<f64>,
        float_precision: f64,
    ) -> Option<Self> {
        let change_type = classify(old_value, new_value, float_precision)?;
        Some(Self {
            metric_name: metric_name.into(),
            field_name: field_name.into(),
            old_value,
            new_value,
            change_type,
            percentage_change: percentage_change(old_value, new_value),
        })
    }

    #[must_use]
    pub fn metric_name(&self) -> &str {
        &self.metric_name
    }

    #[must_use]
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    #[must_use]
    pub const fn old_value(&self) -> Option<f64> {
        self.old_value
    }

    #[must_use]
    pub const fn new_value(&self) -> Option<f64> {
        self.new_value
    }

    #[must_use]
    pub const fn change_type(&self) -> ChangeType {
        self.change_type
    }

    /// `(new - old) / old * 100`, present only when both sides are and old is non-zero
    #[must_use]
    pub const fn percentage_change(&self) -> Option<f64> {
        self.percentage_change
    }

    /// Magnitude used for percentage ordering (absent counts as zero)
    #[must_use]
    pub fn abs_percentage(&self) -> f64 {
        self.percentage_change.map_or(0.0, f64::abs)
    }
}

/// Per-category totals over a raw change list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub increased: usize,
    pub decreased: usize,
    pub unchanged: usize,
    pub new: usize,
    pub removed: usize,
    /// Number of `(metric, field)` pairs compared
    pub total_compared: usize,
}

impl DiffSummary {
    /// Tally a change list.
    #[must_use]
    pub fn from_records(records: &[ChangeRecord]) -> Self {
        let mut summary = Self::default();
        for record in records {
            *summary.count_mut(record.change_type()) += 1;
        }
        summary.total_compared = records.len();
        summary
    }

    /// Number of records of one change type
    #[must_use]
    pub const fn count(&self, change_type: ChangeType) -> usize {
        match change_type {
            ChangeType::Increased => self.increased,
            ChangeType::Decreased => self.decreased,
            ChangeType::Unchanged => self.unchanged,
            ChangeType::New => self.new,
            ChangeType::Removed => self.removed,
        }
    }

    fn count_mut(&mut self, change_type: ChangeType) -> &mut usize {
        match change_type {
            ChangeType::Increased => &mut self.increased,
            ChangeType::Decreased => &mut self.decreased,
            ChangeType::Unchanged => &mut self.unchanged,
            ChangeType::New => &mut self.new,
            ChangeType::Removed => &mut self.removed,
        }
    }

    /// Records that are anything other than `Unchanged`
    #[must_use]
    pub const fn total_changes(&self) -> usize {
        self.increased + self.decreased + self.new + self.removed
    }

    /// Check if there are any changes
    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.total_changes() > 0
    }
}

/// Complete result of a snapshot comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[must_use]
pub struct DiffResult {
    /// Totals over every compared pair, before filtering
    pub summary: DiffSummary,
    /// Ordered, filtered change records
    pub changes: Vec<ChangeRecord>,
}

impl DiffResult {
    /// Check if there are any changes
    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.summary.has_changes()
    }

    /// Records in the final list of a given type
    pub fn changes_of(&self, change_type: ChangeType) -> impl Iterator<Item = &ChangeRecord> {
        self.changes
            .iter()
            .filter(move |c| c.change_type() == change_type)
    }

    /// Whether `max_changes` or unchanged-suppression dropped any records
    #[must_use]
    pub const fn is_filtered(&self) -> bool {
        self.changes.len() < self.summary.total_compared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(old: Option<f64>, new: Option<f64>) -> ChangeRecord {
        ChangeRecord::classify("m", "f", old, new, 1e-10).expect("at least one side")
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = ChangeType::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec!["increased", "decreased", "unchanged", "new", "removed"]
        );
        assert_eq!(ChangeType::New.title(), "New");
        assert_eq!(ChangeType::Removed.to_string(), "removed");
    }

    #[test]
    fn test_record_accessors() {
        let r = record(Some(10.0), Some(12.0));
        assert_eq!(r.metric_name(), "m");
        assert_eq!(r.field_name(), "f");
        assert_eq!(r.change_type(), ChangeType::Increased);
        assert_eq!(r.old_value(), Some(10.0));
        assert_eq!(r.new_value(), Some(12.0));
        let pct = r.percentage_change().expect("percentage");
        assert!((pct - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_both_absent_is_rejected() {
        assert!(ChangeRecord::classify("m", "f", None, None, 1e-10).is_none());
    }

    #[test]
    fn test_record_serialization() {
        let json = serde_json::to_value(record(None, Some(3.0))).expect("serialize");
        assert_eq!(json["metric_name"], "m");
        assert_eq!(json["change_type"], "new");
        assert!(json["old_value"].is_null());
        assert!(json["percentage_change"].is_null());
        assert_eq!(json["new_value"], 3.0);
    }

    #[test]
    fn test_summary_counts() {
        let records = vec![
            record(Some(1.0), Some(2.0)),
            record(Some(2.0), Some(1.0)),
            record(Some(1.0), Some(1.0)),
            record(None, Some(1.0)),
            record(Some(1.0), None),
            record(Some(5.0), Some(9.0)),
        ];
        let summary = DiffSummary::from_records(&records);
        assert_eq!(summary.count(ChangeType::Increased), 2);
        assert_eq!(summary.decreased, 1);
        assert_eq!(summary.unchanged, 1);
        assert_eq!(summary.new, 1);
        assert_eq!(summary.removed, 1);
        assert_eq!(summary.total_compared, 6);
        assert_eq!(summary.total_changes(), 5);
        assert!(summary.has_changes());
    }

    #[test]
    fn test_unchanged_only_has_no_changes() {
        let summary = DiffSummary::from_records(&[record(Some(1.0), Some(1.0))]);
        assert!(!summary.has_changes());
        assert!(!DiffResult::default().has_changes());
    }
}
