//! Configuration types for metrics-diff operations.
//!
//! [`AppConfig`] mirrors the config file layout (`comparison`, `output`,
//! `symbols`, `colors`). [`DiffConfig`] is what a single CLI run consumes.

use super::defaults::{
    DEFAULT_FLOAT_PRECISION, DEFAULT_MAX_CHANGES, DEFAULT_MIN_PERCENTAGE_CHANGE,
};
use super::validation::{ConfigError, Validatable};
use crate::diff::ChangeType;
use crate::reports::{ExportFormat, ReportFormat};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration, loadable from a YAML config file.
///
/// CLI flags are layered on top of whatever the file provides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Tolerances, exclusions, sorting and limits
    pub comparison: ComparisonConfig,
    /// Output format and destination
    pub output: OutputConfig,
    /// Display symbol per change type
    pub symbols: SymbolsConfig,
    /// Display color per change type
    pub colors: ColorsConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// Comparison Configuration
// ============================================================================

/// Ordering applied to the final change list.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// `(metric_name, field_name)` ascending
    #[default]
    #[value(name = "metric_name", alias = "metric-name")]
    MetricName,
    /// `(field_name, metric_name)` ascending
    #[value(name = "field_name", alias = "field-name")]
    FieldName,
    /// Change type label ascending, then metric name
    #[value(name = "change_type", alias = "change-type")]
    ChangeType,
    /// Absolute percentage descending, then metric name
    #[value(name = "percentage")]
    Percentage,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MetricName => write!(f, "metric_name"),
            Self::FieldName => write!(f, "field_name"),
            Self::ChangeType => write!(f, "change_type"),
            Self::Percentage => write!(f, "percentage"),
        }
    }
}

/// Options controlling how two snapshots are compared and reported.
///
/// Read-only for the lifetime of a comparison; it can be shared freely
/// between concurrent comparisons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Absolute difference below which two values are considered equal
    #[schemars(range(min = 0.0))]
    pub float_precision: f64,
    /// Percentage magnitude below which the percentage is hidden in reports
    #[schemars(range(min = 0.0))]
    pub min_percentage_change: f64,
    /// Field names skipped in every metric
    pub ignore_fields: BTreeSet<String>,
    /// Metric names skipped entirely
    pub exclude_metrics: BTreeSet<String>,
    /// Keep `Unchanged` records in the final list
    pub show_unchanged: bool,
    /// Cap on the final list size (0 = unlimited)
    pub max_changes: usize,
    /// Ordering of the final list
    pub sort_by: SortKey,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            float_precision: DEFAULT_FLOAT_PRECISION,
            min_percentage_change: DEFAULT_MIN_PERCENTAGE_CHANGE,
            ignore_fields: BTreeSet::new(),
            exclude_metrics: BTreeSet::new(),
            show_unchanged: false,
            max_changes: DEFAULT_MAX_CHANGES,
            sort_by: SortKey::default(),
        }
    }
}

impl ComparisonConfig {
    /// Start building a validated configuration.
    pub fn builder() -> ComparisonConfigBuilder {
        ComparisonConfigBuilder::default()
    }

    /// Whether a metric is excluded from comparison
    #[must_use]
    pub fn is_metric_excluded(&self, metric_name: &str) -> bool {
        self.exclude_metrics.contains(metric_name)
    }

    /// Whether a field is ignored in every metric
    #[must_use]
    pub fn is_field_ignored(&self, field_name: &str) -> bool {
        self.ignore_fields.contains(field_name)
    }
}

/// Builder for [`ComparisonConfig`].
///
/// [`build`](Self::build) rejects out-of-range tolerances, so a config
/// obtained this way is always usable.
#[derive(Debug, Default)]
#[must_use]
pub struct ComparisonConfigBuilder {
    config: ComparisonConfig,
}

impl ComparisonConfigBuilder {
    /// Set the equality tolerance.
    pub const fn float_precision(mut self, precision: f64) -> Self {
        self.config.float_precision = precision;
        self
    }

    /// Set the display threshold for percentages.
    pub const fn min_percentage_change(mut self, min: f64) -> Self {
        self.config.min_percentage_change = min;
        self
    }

    /// Ignore a field name in every metric.
    pub fn ignore_field(mut self, field: impl Into<String>) -> Self {
        self.config.ignore_fields.insert(field.into());
        self
    }

    /// Ignore several field names in every metric.
    pub fn ignore_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config
            .ignore_fields
            .extend(fields.into_iter().map(Into::into));
        self
    }

    /// Exclude a metric from comparison.
    pub fn exclude_metric(mut self, metric: impl Into<String>) -> Self {
        self.config.exclude_metrics.insert(metric.into());
        self
    }

    /// Exclude several metrics from comparison.
    pub fn exclude_metrics<I, S>(mut self, metrics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config
            .exclude_metrics
            .extend(metrics.into_iter().map(Into::into));
        self
    }

    /// Keep unchanged records in the final list.
    pub const fn show_unchanged(mut self, show: bool) -> Self {
        self.config.show_unchanged = show;
        self
    }

    /// Cap the final list size (0 = unlimited).
    pub const fn max_changes(mut self, max: usize) -> Self {
        self.config.max_changes = max;
        self
    }

    /// Set the ordering of the final list.
    pub const fn sort_by(mut self, key: SortKey) -> Self {
        self.config.sort_by = key;
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<ComparisonConfig, ConfigError> {
        match self.config.validate().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(self.config),
        }
    }
}

// ============================================================================
// Output Configuration
// ============================================================================

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Show the metadata panel when either snapshot carries metadata
    pub show_metadata: bool,
    /// Custom report title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Table,
            file: None,
            no_color: false,
            show_metadata: true,
            title: None,
        }
    }
}

// ============================================================================
// Symbols and Colors
// ============================================================================

/// Display symbol for each change type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SymbolsConfig {
    pub increased: String,
    pub decreased: String,
    pub unchanged: String,
    pub new: String,
    pub removed: String,
}

impl SymbolsConfig {
    /// Symbol configured for a change type
    #[must_use]
    pub fn get(&self, change_type: ChangeType) -> &str {
        match change_type {
            ChangeType::Increased => &self.increased,
            ChangeType::Decreased => &self.decreased,
            ChangeType::Unchanged => &self.unchanged,
            ChangeType::New => &self.new,
            ChangeType::Removed => &self.removed,
        }
    }
}

/// Display color name for each change type.
///
/// Accepted names: red, green, yellow, blue, magenta, cyan, white, dim, bold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ColorsConfig {
    pub increased: String,
    pub decreased: String,
    pub unchanged: String,
    pub new: String,
    pub removed: String,
}

impl ColorsConfig {
    /// Color configured for a change type
    #[must_use]
    pub fn get(&self, change_type: ChangeType) -> &str {
        match change_type {
            ChangeType::Increased => &self.increased,
            ChangeType::Decreased => &self.decreased,
            ChangeType::Unchanged => &self.unchanged,
            ChangeType::New => &self.new,
            ChangeType::Removed => &self.removed,
        }
    }
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// Configuration for a single diff run
#[derive(Debug, Clone)]
pub struct DiffConfig {
    /// Paths to compare
    pub paths: DiffPaths,
    /// Comparison options
    pub comparison: ComparisonConfig,
    /// Output configuration
    pub output: OutputConfig,
    /// Display symbols
    pub symbols: SymbolsConfig,
    /// Display colors
    pub colors: ColorsConfig,
    /// Optional export written alongside the main output
    pub export: Option<ExportConfig>,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl DiffConfig {
    /// Create a diff configuration for two files with an application config.
    #[must_use]
    pub fn new(paths: DiffPaths, app: AppConfig) -> Self {
        Self {
            paths,
            comparison: app.comparison,
            output: app.output,
            symbols: app.symbols,
            colors: app.colors,
            export: None,
            behavior: BehaviorConfig::default(),
        }
    }
}

/// Paths for a diff operation
#[derive(Debug, Clone)]
pub struct DiffPaths {
    /// Path to the old/baseline snapshot
    pub old: PathBuf,
    /// Path to the new snapshot
    pub new: PathBuf,
}

/// Export destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// File to write
    pub path: PathBuf,
    /// Export document format
    pub format: ExportFormat,
}

/// Behavior flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with a non-zero code when any change is reported
    pub fail_on_change: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}
