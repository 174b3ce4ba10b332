//! Table reporter for terminal output with aligned columns.

use super::escape::sanitize_terminal;
use super::style::{ansi_color, format_percentage, format_value, pad, truncate, Align};
use super::summary::{metadata_panel, summary_panel};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::DiffResult;
use unicode_width::UnicodeWidthStr;

/// Widest a metric or field name column may grow before truncation.
const MAX_NAME_WIDTH: usize = 40;

const HEADERS: [&str; 6] = ["Metric", "Field", "Status", "Old Value", "New Value", "Change"];
const ALIGNS: [Align; 6] = [
    Align::Left,
    Align::Left,
    Align::Left,
    Align::Right,
    Align::Right,
    Align::Right,
];

/// Table reporter: summary panel, detailed change table, metadata panel
pub struct TableReporter {
    /// Use colored output
    colored: bool,
}

impl TableReporter {
    /// Create a new table reporter
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

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for TableReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TableReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = summary_panel(result, config, self.colored);
        lines.push(String::new());
        lines.push(self.color("Detailed Metrics Comparison", "bold"));

        if result.changes.is_empty() {
            lines.push(self.color("No changes detected", "dim"));
        } else {
            let rows: Vec<[String; 6]> = result
                .changes
                .iter()
                .map(|change| {
                    [
                        truncate(&sanitize_terminal(change.metric_name()), MAX_NAME_WIDTH),
                        truncate(&sanitize_terminal(change.field_name()), MAX_NAME_WIDTH),
                        config.styles.status_label(change.change_type()),
                        format_value(change.old_value()),
                        format_value(change.new_value()),
                        format_percentage(change.percentage_change(), config.min_percentage_change)
                            .trim_start()
                            .to_string(),
                    ]
                })
                .collect();

            let mut widths = HEADERS.map(|h| h.width());
            for row in &rows {
                for (width, cell) in widths.iter_mut().zip(row) {
                    *width = (*width).max(cell.width());
                }
            }

            let header = HEADERS
                .iter()
                .zip(widths.iter().zip(ALIGNS))
                .map(|(h, (w, a))| pad(h, *w, a))
                .collect::<Vec<_>>()
                .join("  ");
            lines.push(self.color(&header, "magenta"));
            lines.push(self.color(&"─".repeat(widths.iter().sum::<usize>() + 2 * 5), "dim"));

            for (row, change) in rows.iter().zip(&result.changes) {
                let color = config.styles.color(change.change_type());
                let cells: Vec<String> = row
                    .iter()
                    .zip(widths.iter().zip(ALIGNS))
                    .enumerate()
                    .map(|(i, (cell, (w, a)))| {
                        let padded = pad(cell, *w, a);
                        match i {
                            0 => self.color(&padded, "cyan"),
                            1 => self.color(&padded, "yellow"),
                            2 | 5 => self.color(&padded, color),
                            3 => self.color(&padded, "dim"),
                            _ => padded,
                        }
                    })
                    .collect();
                lines.push(cells.join("  ").trim_end().to_string());
            }
        }

        lines.extend(metadata_panel(config, self.colored));
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Table
    }
}
