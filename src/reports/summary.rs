//! Summary report generator for shell output.
//!
//! Also hosts the summary and metadata panels that the table and tree
//! reporters print around their own body.

use super::escape::sanitize_terminal;
use super::style::ansi_color;
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{ChangeType, DiffResult};
use crate::model::SnapshotMetadata;

pub(super) const RULE_WIDTH: usize = 60;

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = summary_panel(result, config, self.colored);
        lines.extend(metadata_panel(config, self.colored));
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

/// Per-category totals over every compared pair.
pub(super) fn summary_panel(result: &DiffResult, config: &ReportConfig, colored: bool) -> Vec<String> {
    let styles = &config.styles;
    let summary = &result.summary;
    let entry = |ct: ChangeType| {
        format!(
            "{} {}: {}",
            styles.symbol(ct),
            ct.title(),
            ansi_color(&summary.count(ct).to_string(), styles.color(ct), colored)
        )
    };

    let mut lines = vec![
        ansi_color(
            &sanitize_terminal(config.title_or("Metrics Comparison Summary")),
            "bold",
            colored,
        ),
        ansi_color(&"═".repeat(RULE_WIDTH), "cyan", colored),
        format!(
            "{} {}",
            ansi_color("Total Metrics:", "bold", colored),
            summary.total_compared
        ),
        [ChangeType::Increased, ChangeType::Decreased, ChangeType::Unchanged]
            .map(entry)
            .join("  "),
        [ChangeType::New, ChangeType::Removed].map(entry).join("  "),
    ];

    if result.is_filtered() {
        lines.push(ansi_color(
            &format!(
                "Showing {} of {} compared fields",
                result.changes.len(),
                summary.total_compared
            ),
            "dim",
            colored,
        ));
    }
    lines
}

/// Old and new generation times and source files.
///
/// Empty when metadata display is disabled or neither snapshot has any.
pub(super) fn metadata_panel(config: &ReportConfig, colored: bool) -> Vec<String> {
    fn generated_at(m: &SnapshotMetadata) -> Option<&str> {
        m.generated_at.as_deref()
    }
    fn source_file(m: &SnapshotMetadata) -> Option<&str> {
        m.source_file.as_deref()
    }
    fn field(meta: Option<&SnapshotMetadata>, get: fn(&SnapshotMetadata) -> Option<&str>) -> String {
        meta.and_then(get)
            .map_or_else(|| "N/A".to_string(), sanitize_terminal)
    }

    if !config.has_metadata_panel() {
        return Vec::new();
    }
    let old = config.metadata.old_snapshot.as_ref();
    let new = config.metadata.new_snapshot.as_ref();

    let mut lines = vec![
        String::new(),
        ansi_color("Metadata", "bold", colored),
        ansi_color(&"─".repeat(RULE_WIDTH), "blue", colored),
        ansi_color("Generation Times:", "bold", colored),
        ansi_color(&format!("  Old: {}", field(old, generated_at)), "dim", colored),
        format!("  New: {}", field(new, generated_at)),
    ];

    if old.and_then(source_file).is_some() || new.and_then(source_file).is_some() {
        lines.push(ansi_color("Source Files:", "bold", colored));
        lines.push(ansi_color(
            &format!("  Old: {}", field(old, source_file)),
            "dim",
            colored,
        ));
        lines.push(format!("  New: {}", field(new, source_file)));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffEngine;
    use crate::model::Snapshot;

    fn result() -> DiffResult {
        let old = Snapshot::new().with_metric("latency", [("p50", 10.0), ("p99", 50.0)]);
        let new = Snapshot::new()
            .with_metric("latency", [("p50", 12.0), ("p99", 50.0)])
            .with_metric("errors", [("count", 3.0)]);
        DiffEngine::default().compare(&old, &new)
    }

    #[test]
    fn test_summary_counts() {
        let report = SummaryReporter::new()
            .no_color()
            .generate_diff_report(&result(), &ReportConfig::default())
            .unwrap();

        assert!(report.starts_with("Metrics Comparison Summary"));
        assert!(report.contains("Total Metrics: 3"));
        assert!(report.contains("📈 Increased: 1"));
        assert!(report.contains("📉 Decreased: 0"));
        assert!(report.contains("➡️ Unchanged: 1"));
        assert!(report.contains("✨ New: 1"));
        assert!(report.contains("❌ Removed: 0"));
        assert!(report.contains("Showing 2 of 3 compared fields"));
        assert!(!report.contains("\x1b["));
    }

    #[test]
    fn test_colored_counts() {
        let report = SummaryReporter::new()
            .generate_diff_report(&result(), &ReportConfig::default())
            .unwrap();
        assert!(report.contains("\x1b[32m1\x1b[0m"));
    }

    #[test]
    fn test_metadata_panel() {
        let mut config = ReportConfig::default();
        assert!(metadata_panel(&config, false).is_empty());

        config.metadata.old_snapshot = Some(SnapshotMetadata {
            generated_at: Some("2024-05-01".to_string()),
            ..SnapshotMetadata::default()
        });
        let panel = metadata_panel(&config, false).join("\n");
        assert!(panel.contains("Old: 2024-05-01"));
        assert!(panel.contains("New: N/A"));
        assert!(!panel.contains("Source Files"));

        config.metadata.new_snapshot = Some(SnapshotMetadata {
            source_file: Some("run.log".to_string()),
            ..SnapshotMetadata::default()
        });
        let panel = metadata_panel(&config, false).join("\n");
        assert!(panel.contains("Source Files:"));
        assert!(panel.contains("New: run.log"));

        config.show_metadata = false;
        assert!(metadata_panel(&config, false).is_empty());
    }
}
