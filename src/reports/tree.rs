//! Tree reporter: changes grouped by metric.

use super::escape::sanitize_terminal;
use super::style::{ansi_color, format_percentage, format_value};
use super::summary::{metadata_panel, summary_panel};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{ChangeRecord, ChangeType, DiffResult};
use std::collections::BTreeMap;

/// Change types annotated on a metric node, in display order.
const NODE_COUNTS: [ChangeType; 4] = [
    ChangeType::Increased,
    ChangeType::Decreased,
    ChangeType::New,
    ChangeType::Removed,
];

/// Tree reporter for terminal output
pub struct TreeReporter {
    /// Use colored output
    colored: bool,
}

impl TreeReporter {
    /// Create a new tree reporter
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

    fn metric_node(&self, name: &str, changes: &[&ChangeRecord], config: &ReportConfig) -> String {
        let mut node = self.color(&sanitize_terminal(name), "bold");
        for change_type in NODE_COUNTS {
            let count = changes
                .iter()
                .filter(|c| c.change_type() == change_type)
                .count();
            if count > 0 {
                node.push(' ');
                node.push_str(&self.color(
                    &format!("{}{count}", config.styles.symbol(change_type)),
                    config.styles.color(change_type),
                ));
            }
        }
        node
    }

    fn field_leaf(&self, change: &ChangeRecord, config: &ReportConfig) -> String {
        let change_type = change.change_type();
        let text = format!(
            "{} {}: {} → {}",
            config.styles.symbol(change_type),
            sanitize_terminal(change.field_name()),
            format_value(change.old_value()),
            format_value(change.new_value()),
        );
        let pct = format_percentage(change.percentage_change(), config.min_percentage_change);
        format!(
            "{}{}",
            self.color(&text, config.styles.color(change_type)),
            self.color(&pct, "dim")
        )
    }
}

impl Default for TreeReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TreeReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = summary_panel(result, config, self.colored);
        lines.push(String::new());
        lines.push(self.color("Metrics Overview", "cyan"));

        let mut by_metric: BTreeMap<&str, Vec<&ChangeRecord>> = BTreeMap::new();
        for change in &result.changes {
            by_metric.entry(change.metric_name()).or_default().push(change);
        }

        let metric_count = by_metric.len();
        for (i, (metric, mut changes)) in by_metric.into_iter().enumerate() {
            let last_metric = i + 1 == metric_count;
            let (branch, indent) = if last_metric {
                ("└── ", "    ")
            } else {
                ("├── ", "│   ")
            };
            lines.push(format!("{branch}{}", self.metric_node(metric, &changes, config)));

            changes.sort_by(|a, b| a.field_name().cmp(b.field_name()));
            let leaves: Vec<_> = changes
                .into_iter()
                .filter(|c| c.change_type() != ChangeType::Unchanged)
                .collect();
            for (j, change) in leaves.iter().enumerate() {
                let leaf_branch = if j + 1 == leaves.len() {
                    "└── "
                } else {
                    "├── "
                };
                lines.push(format!(
                    "{indent}{leaf_branch}{}",
                    self.field_leaf(change, config)
                ));
            }
        }

        lines.extend(metadata_panel(config, self.colored));
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ComparisonConfig;
    use crate::diff::DiffEngine;
    use crate::model::Snapshot;

    fn render(result: &DiffResult) -> String {
        TreeReporter::new()
            .no_color()
            .generate_diff_report(result, &ReportConfig::default())
            .unwrap()
    }

    #[test]
    fn test_tree_groups_by_metric() {
        let old = Snapshot::new()
            .with_metric("latency", [("p99", 50.0), ("p50", 10.0)])
            .with_metric("cpu", [("user", 4.0)]);
        let new = Snapshot::new()
            .with_metric("latency", [("p99", 45.0), ("p50", 12.0)])
            .with_metric("errors", [("count", 3.0)]);
        let report = render(&DiffEngine::default().compare(&old, &new));
        let tree: Vec<&str> = report
            .lines()
            .skip_while(|l| *l != "Metrics Overview")
            .skip(1)
            .collect();

        assert_eq!(
            tree,
            vec![
                "├── cpu ❌1",
                "│   └── ❌ user: 4 → N/A",
                "├── errors ✨1",
                "│   └── ✨ count: N/A → 3",
                "└── latency 📈1 📉1",
                "    ├── 📈 p50: 10 → 12 (+20.00%)",
                "    └── 📉 p99: 50 → 45 (-10.00%)",
            ]
        );
    }

    #[test]
    fn test_tree_hides_unchanged_leaves() {
        let old = Snapshot::new().with_metric("m", [("same", 1.0), ("up", 1.0)]);
        let new = Snapshot::new().with_metric("m", [("same", 1.0), ("up", 2.0)]);
        let config = ComparisonConfig::builder()
            .show_unchanged(true)
            .build()
            .unwrap();
        let report = render(&DiffEngine::new(config).unwrap().compare(&old, &new));

        assert!(report.contains("└── 📈 up: 1 → 2 (+100.00%)"));
        assert!(!report.contains("same:"));
    }
}
