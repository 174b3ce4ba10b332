//! Classification of a single old/new value pair.

use super::ChangeType;

/// Classify a pair of optional values under an equality tolerance.
///
/// Returns `None` only when both sides are absent.
#[must_use]
pub fn classify(old: Option<f64>, new: Option<f64>, float_precision: f64) -> Option<ChangeType> {
    match (old, new) {
        (None, None) => None,
        (None, Some(_)) => Some(ChangeType::New),
        (Some(_), None) => Some(ChangeType::Removed),
        (Some(old), Some(new)) => Some(if (new - old).abs() < float_precision {
            ChangeType::Unchanged
        } else if new > old {
            ChangeType::Increased
        } else {
            ChangeType::Decreased
        }),
    }
}

/// Relative change in percent, `(new - old) / old * 100`.
///
/// Undefined when either side is absent or `old` is zero.
#[must_use]
pub fn percentage_change(old: Option<f64>, new: Option<f64>) -> Option<f64> {
    match (old, new) {
        (Some(old), Some(new)) if old != 0.0 => Some((new - old) / old * 100.0),
        _ => None,
    }
}
