//! Report type definitions.

use super::style::ChangeStyles;
use crate::config::DEFAULT_MIN_PERCENTAGE_CHANGE;
use crate::model::SnapshotMetadata;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Summary panel plus a detailed, aligned table
    #[default]
    Table,
    /// Summary panel plus changes grouped by metric
    Tree,
    /// Summary panel only
    Summary,
    /// Structured JSON output
    Json,
    /// Standalone HTML document
    Html,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Tree => write!(f, "tree"),
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
            Self::Html => write!(f, "html"),
        }
    }
}

/// Document format of an export written alongside the main output
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Html,
    Json,
}

impl ExportFormat {
    /// The report format producing this export
    #[must_use]
    pub const fn report_format(self) -> ReportFormat {
        match self {
            Self::Html => ReportFormat::Html,
            Self::Json => ReportFormat::Json,
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.report_format().fmt(f)
    }
}

/// Configuration for report generation
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Title for the report
    pub title: Option<String>,
    /// Percentages below this magnitude are not displayed
    pub min_percentage_change: f64,
    /// Render the metadata panel when either snapshot has metadata
    pub show_metadata: bool,
    /// Symbol and color per change type
    pub styles: ChangeStyles,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: None,
            min_percentage_change: DEFAULT_MIN_PERCENTAGE_CHANGE,
            show_metadata: true,
            styles: ChangeStyles::default(),
            metadata: ReportMetadata::new(),
        }
    }
}

impl ReportConfig {
    /// Title to use, falling back to the given default
    #[must_use]
    pub fn title_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.title.as_deref().unwrap_or(default)
    }

    /// Whether the metadata panel should be rendered
    #[must_use]
    pub fn has_metadata_panel(&self) -> bool {
        self.show_metadata && self.metadata.has_snapshot_metadata()
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportMetadata {
    /// Old snapshot file path
    pub old_path: Option<String>,
    /// New snapshot file path
    pub new_path: Option<String>,
    /// Tool version
    pub tool_version: String,
    /// Metadata carried by the old snapshot
    pub old_snapshot: Option<SnapshotMetadata>,
    /// Metadata carried by the new snapshot
    pub new_snapshot: Option<SnapshotMetadata>,
}

impl ReportMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }

    /// Whether either snapshot carries non-empty metadata
    #[must_use]
    pub fn has_snapshot_metadata(&self) -> bool {
        [&self.old_snapshot, &self.new_snapshot]
            .into_iter()
            .flatten()
            .any(|m| !m.is_empty())
    }
}
