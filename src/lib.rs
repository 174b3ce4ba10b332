//! **A library for comparing numeric metrics snapshots.**
//!
//! `metrics-diff` computes a structured difference between two snapshots, each a
//! mapping of metric name to a mapping of field name to value, and classifies
//! every field as increased, decreased, unchanged, new or removed. Tolerances,
//! exclusions, ordering and display limits are configurable.
//!
//! It powers both a command-line interface (CLI) for direct use and a Rust
//! library for programmatic integration, e.g. regression gates in CI.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The [`Snapshot`] data structure. JSON and YAML documents are
//!   both normalized into it.
//! - **[`parsers`]**: Loading snapshot documents from files or strings.
//! - **[`diff`]**: The [`DiffEngine`], the change classifier and the ordering
//!   and filtering step.
//! - **[`config`]**: Comparison, output and style settings, loaded from YAML
//!   files and overridden from the command line.
//! - **[`reports`]**: Summary, table, tree, JSON and HTML renderings of a
//!   [`DiffResult`].
//! - **[`pipeline`]**: The parse → diff → report stages used by the CLI.
//!
//! ## Getting Started
//!
//! ```no_run
//! use std::path::Path;
//! use metrics_diff::{parse_snapshot, ComparisonConfig, DiffEngine};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let old = parse_snapshot(Path::new("baseline.json"))?;
//!     let new = parse_snapshot(Path::new("candidate.json"))?;
//!
//!     let config = ComparisonConfig::builder()
//!         .ignore_field("timestamp")
//!         .min_percentage_change(1.0)
//!         .build()?;
//!     let result = DiffEngine::new(config)?.compare(&old, &new);
//!
//!     println!("{} fields changed", result.summary.total_changes());
//!     for change in &result.changes {
//!         println!(
//!             "{}.{}: {}",
//!             change.metric_name(),
//!             change.field_name(),
//!             change.change_type()
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Rendering a Report
//!
//! ```no_run
//! use metrics_diff::model::Snapshot;
//! use metrics_diff::reports::{create_reporter, ReportConfig, ReportFormat};
//! use metrics_diff::DiffEngine;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let old = Snapshot::new().with_metric("latency", [("p50", 10.0)]);
//!     let new = Snapshot::new().with_metric("latency", [("p50", 12.0)]);
//!     let result = DiffEngine::default().compare(&old, &new);
//!
//!     let reporter = create_reporter(ReportFormat::Tree);
//!     println!("{}", reporter.generate_diff_report(&result, &ReportConfig::default())?);
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools,
    // Variable names like `old`/`new` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{AppConfig, ComparisonConfig, ComparisonConfigBuilder, SortKey};
pub use config::{BehaviorConfig, DiffConfig, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use diff::{diff_snapshots, order_and_filter, ChangeRecord, ChangeType, DiffEngine, DiffResult};
pub use error::{ErrorContext, MetricsDiffError, Result};
pub use model::{FieldValue, Snapshot, SnapshotMetadata};
pub use parsers::{parse_snapshot, parse_snapshot_str, SnapshotFormat};
pub use reports::{ReportFormat, ReportGenerator};
