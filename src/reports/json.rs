//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{ChangeRecord, DiffResult, DiffSummary};
use crate::model::SnapshotMetadata;
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Whether to only include the summary
    summary_only: bool,
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            summary_only: false,
            pretty: true,
        }
    }

    /// Create a summary-only reporter
    #[must_use]
    pub const fn summary_only() -> Self {
        Self {
            summary_only: true,
            pretty: true,
        }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let report = JsonDiffReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo {
                    name: env!("CARGO_PKG_NAME"),
                    version: &config.metadata.tool_version,
                },
                title: config.title.as_deref(),
                generated_at: Utc::now().to_rfc3339(),
                old_snapshot: SnapshotInfo {
                    file_path: config.metadata.old_path.as_deref(),
                    metadata: config.metadata.old_snapshot.as_ref(),
                },
                new_snapshot: SnapshotInfo {
                    file_path: config.metadata.new_path.as_deref(),
                    metadata: config.metadata.new_snapshot.as_ref(),
                },
            },
            summary: JsonSummary {
                counts: &result.summary,
                total_changes: result.summary.total_changes(),
                has_changes: result.has_changes(),
            },
            changes: if self.summary_only {
                None
            } else {
                Some(&result.changes)
            },
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        json.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[derive(Serialize)]
struct JsonDiffReport<'a> {
    metadata: JsonReportMetadata<'a>,
    summary: JsonSummary<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    changes: Option<&'a Vec<ChangeRecord>>,
}

#[derive(Serialize)]
struct JsonReportMetadata<'a> {
    tool: ToolInfo<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    generated_at: String,
    old_snapshot: SnapshotInfo<'a>,
    new_snapshot: SnapshotInfo<'a>,
}

#[derive(Serialize)]
struct ToolInfo<'a> {
    name: &'static str,
    version: &'a str,
}

#[derive(Serialize)]
struct SnapshotInfo<'a> {
    file_path: Option<&'a str>,
    metadata: Option<&'a SnapshotMetadata>,
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    #[serde(flatten)]
    counts: &'a DiffSummary,
    total_changes: usize,
    has_changes: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffEngine;
    use crate::model::Snapshot;
    use serde_json::Value;

    fn result() -> DiffResult {
        let old = Snapshot::new().with_metric("latency", [("p50", 10.0)]);
        let new = Snapshot::new()
            .with_metric("latency", [("p50", 12.0)])
            .with_metric("errors", [("count", 3.0)]);
        DiffEngine::default().compare(&old, &new)
    }

    #[test]
    fn test_json_report_structure() {
        let mut config = ReportConfig::default();
        config.metadata.old_path = Some("old.json".to_string());
        let json = JsonReporter::new()
            .generate_diff_report(&result(), &config)
            .unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["metadata"]["tool"]["name"], "metrics-diff");
        assert_eq!(value["metadata"]["old_snapshot"]["file_path"], "old.json");
        assert!(value["metadata"]["new_snapshot"]["file_path"].is_null());
        assert_eq!(value["summary"]["increased"], 1);
        assert_eq!(value["summary"]["new"], 1);
        assert_eq!(value["summary"]["total_changes"], 2);
        assert_eq!(value["summary"]["has_changes"], true);

        let changes = value["changes"].as_array().unwrap();
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0]["metric_name"], "errors");
        assert_eq!(changes[0]["change_type"], "new");
        assert!(changes[0]["old_value"].is_null());
        assert_eq!(changes[1]["change_type"], "increased");
    }

    #[test]
    fn test_summary_only_and_compact() {
        let json = JsonReporter::summary_only()
            .pretty(false)
            .generate_diff_report(&result(), &ReportConfig::default())
            .unwrap();
        assert!(!json.contains('\n'));
        let value: Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("changes").is_none());
    }
}
