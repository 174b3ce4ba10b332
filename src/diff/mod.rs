//! Diff engine for metrics snapshots.
//!
//! Comparison is split in three steps:
//!
//! - [`classify`] decides the [`ChangeType`] of one old/new value pair,
//! - [`DiffEngine::diff`] walks both snapshots and builds the raw change list,
//! - [`order_and_filter`] applies unchanged-suppression, ordering and the cap.
//!
//! # Example
//!
//! ```ignore
//! use metrics_diff::diff::DiffEngine;
//! use metrics_diff::config::ComparisonConfig;
//!
//! let engine = DiffEngine::new(ComparisonConfig::default())?;
//! let result = engine.compare(&old_snapshot, &new_snapshot);
//! for change in &result.changes {
//!     println!("{}.{}: {}", change.metric_name(), change.field_name(), change.change_type());
//! }
//! ```

mod classifier;
mod engine;
mod ordering;
mod result;

pub use classifier::{classify, percentage_change};
pub use engine::{diff_snapshots, DiffEngine};
pub use ordering::order_and_filter;
pub use result::{ChangeRecord, ChangeType, DiffResult, DiffSummary};
