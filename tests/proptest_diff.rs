//! Property-based tests for the diff engine.
//!
//! Checks the classification, exclusion, filtering and cap invariants over
//! randomly generated snapshots.

use metrics_diff::config::ComparisonConfig;
use metrics_diff::diff::{classify, diff_snapshots, order_and_filter, ChangeType, DiffEngine};
use metrics_diff::model::Snapshot;
use proptest::prelude::*;
use std::collections::BTreeMap;

type Fields = BTreeMap<String, f64>;

fn value() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        Just(1.0),
        -1000.0f64..1000.0,
        (-10i32..10).prop_map(f64::from),
    ]
}

fn metrics() -> impl Strategy<Value = BTreeMap<String, Fields>> {
    prop::collection::btree_map(
        "m[a-c]",
        prop::collection::btree_map("f[a-d]", value(), 0..4),
        0..4,
    )
}

fn snapshot(metrics: &BTreeMap<String, Fields>) -> Snapshot {
    let mut snapshot = Snapshot::new();
    for (name, fields) in metrics {
        snapshot.insert_metric(name.as_str(), fields.iter().map(|(k, v)| (k.as_str(), *v)));
    }
    snapshot
}

fn precision() -> impl Strategy<Value = f64> {
    prop_oneof![Just(1e-10), 0.0f64..5.0]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn presence_determines_new_and_removed(v in value(), p in precision()) {
        prop_assert_eq!(classify(None, Some(v), p), Some(ChangeType::New));
        prop_assert_eq!(classify(Some(v), None, p), Some(ChangeType::Removed));
    }

    #[test]
    fn values_within_precision_are_unchanged(old in value(), delta in 0.0f64..0.5) {
        let new = old + delta;
        let precision = delta + 0.5;
        prop_assert_eq!(classify(Some(old), Some(new), precision), Some(ChangeType::Unchanged));
    }

    #[test]
    fn raising_precision_only_creates_unchanged(
        old in metrics(),
        new in metrics(),
        low in 0.0f64..1.0,
        extra in 0.0f64..100.0,
    ) {
        let (old, new) = (snapshot(&old), snapshot(&new));
        let loose = |precision: f64| {
            ComparisonConfig::builder().float_precision(precision).build().unwrap()
        };
        let before = diff_snapshots(&old, &new, &loose(low)).unwrap();
        let after = diff_snapshots(&old, &new, &loose(low + extra)).unwrap();

        prop_assert_eq!(before.len(), after.len());
        for (b, a) in before.iter().zip(&after) {
            prop_assert_eq!(b.metric_name(), a.metric_name());
            prop_assert_eq!(b.field_name(), a.field_name());
            match b.change_type() {
                ChangeType::New | ChangeType::Removed | ChangeType::Unchanged => {
                    prop_assert_eq!(b.change_type(), a.change_type());
                }
                ChangeType::Increased | ChangeType::Decreased => {
                    prop_assert!(a.change_type() == b.change_type()
                        || a.change_type() == ChangeType::Unchanged);
                }
            }
        }
    }

    #[test]
    fn percentage_absent_for_zero_old(old in metrics(), new in metrics()) {
        let records = diff_snapshots(&snapshot(&old), &snapshot(&new), &ComparisonConfig::default()).unwrap();
        for record in &records {
            if record.old_value().map_or(true, |v| v == 0.0) || record.new_value().is_none() {
                prop_assert!(record.percentage_change().is_none());
            }
        }
    }

    #[test]
    fn exclusions_are_exhaustive(old in metrics(), new in metrics()) {
        let config = ComparisonConfig::builder()
            .exclude_metric("ma")
            .ignore_field("fb")
            .show_unchanged(true)
            .build()
            .unwrap();
        let records = diff_snapshots(&snapshot(&old), &snapshot(&new), &config).unwrap();
        prop_assert!(records.iter().all(|r| r.metric_name() != "ma"));
        prop_assert!(records.iter().all(|r| r.field_name() != "fb"));
    }

    #[test]
    fn unchanged_suppression_and_cap(old in metrics(), new in metrics(), cap in 0usize..6) {
        let (old, new) = (snapshot(&old), snapshot(&new));

        let hidden = ComparisonConfig::builder().max_changes(cap).build().unwrap();
        let raw = diff_snapshots(&old, &new, &hidden).unwrap();
        let changed = raw.iter().filter(|r| r.change_type() != ChangeType::Unchanged).count();
        let filtered = order_and_filter(raw.clone(), &hidden);
        prop_assert!(filtered.iter().all(|r| r.change_type() != ChangeType::Unchanged));
        let expected = if cap == 0 { changed } else { changed.min(cap) };
        prop_assert_eq!(filtered.len(), expected);

        let shown = ComparisonConfig::builder().show_unchanged(true).build().unwrap();
        prop_assert_eq!(order_and_filter(raw.clone(), &shown).len(), raw.len());
    }

    #[test]
    fn self_comparison_only_unchanged(m in metrics()) {
        let snapshot = snapshot(&m);
        let config = ComparisonConfig::builder().show_unchanged(true).build().unwrap();
        let result = DiffEngine::new(config).unwrap().compare(&snapshot, &snapshot);

        prop_assert!(result.changes.iter().all(|r| r.change_type() == ChangeType::Unchanged));
        prop_assert_eq!(result.changes.len(), snapshot.numeric_field_count());
        prop_assert!(DiffEngine::default().compare(&snapshot, &snapshot).changes.is_empty());
    }
}
