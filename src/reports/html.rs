//! HTML report generator.

use super::escape::{escape_html, escape_html_opt};
use super::style::{format_percentage, format_value};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{ChangeType, DiffResult};
use crate::model::SnapshotMetadata;
use std::fmt::Write;

const DEFAULT_TITLE: &str = "Metrics Comparison Report";

/// HTML report generator
pub struct HtmlReporter {
    /// Include inline CSS
    include_styles: bool,
}

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_styles: true,
        }
    }

    /// Omit the inline stylesheet
    #[must_use]
    pub const fn without_styles(mut self) -> Self {
        self.include_styles = false;
        self
    }

    const fn get_styles() -> &'static str {
        r"
        <style>
            :root {
                --bg-color: #1e1e1e;
                --panel-bg: #252526;
                --text-color: #d4d4d4;
                --accent-color: #4fc3f7;
                --border-color: #30363d;
                --muted-color: #888;
            }

            body {
                font-family: 'Monaco', 'Menlo', 'Ubuntu Mono', monospace;
                background-color: var(--bg-color);
                color: var(--text-color);
                margin: 20px;
                line-height: 1.4;
            }

            .container {
                max-width: 1200px;
                margin: 0 auto;
                background: var(--panel-bg);
                padding: 20px;
                border-radius: 8px;
                box-shadow: 0 4px 6px rgba(0, 0, 0, 0.3);
            }

            h1 {
                color: var(--accent-color);
                text-align: center;
                font-size: 24px;
            }

            h2 {
                color: var(--accent-color);
            }

            .timestamp {
                text-align: center;
                color: var(--muted-color);
                margin-bottom: 20px;
            }

            .summary-cards {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
                gap: 16px;
                margin-bottom: 30px;
            }

            .card {
                background-color: #0d1117;
                border: 1px solid var(--border-color);
                border-radius: 6px;
                padding: 16px;
                text-align: center;
            }

            .card-title {
                font-size: 0.9em;
                color: var(--muted-color);
            }

            .card-value {
                font-size: 2em;
                font-weight: bold;
            }

            table {
                width: 100%;
                border-collapse: collapse;
                margin-bottom: 30px;
                background-color: #0d1117;
            }

            th, td {
                padding: 8px 12px;
                border-bottom: 1px solid var(--border-color);
                text-align: left;
            }

            td.num {
                text-align: right;
            }

            th {
                color: #c586c0;
            }

            .increased { color: #4ade80; }
            .decreased { color: #f87171; }
            .unchanged { color: #60a5fa; }
            .new { color: #fbbf24; }
            .removed { color: #f87171; }

            .footer {
                margin-top: 30px;
                font-size: 0.9em;
                color: var(--muted-color);
                text-align: center;
            }
        </style>
        "
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut html = String::new();
        let title = escape_html(config.title_or(DEFAULT_TITLE));
        let styles = &config.styles;

        writeln!(html, "<!DOCTYPE html>")?;
        writeln!(html, "<html lang=\"en\">")?;
        writeln!(html, "<head>")?;
        writeln!(html, "    <meta charset=\"UTF-8\">")?;
        writeln!(
            html,
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(html, "    <title>{title}</title>")?;
        if self.include_styles {
            writeln!(html, "{}", Self::get_styles())?;
        }
        writeln!(html, "</head>")?;
        writeln!(html, "<body>")?;
        writeln!(html, "<div class=\"container\">")?;

        // Header
        writeln!(html, "<h1>📊 {title}</h1>")?;
        writeln!(
            html,
            "<div class=\"timestamp\">Generated on {}</div>",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;

        // Summary cards
        writeln!(html, "<div class=\"summary-cards\">")?;
        writeln!(html, "    <div class=\"card\">")?;
        writeln!(html, "        <div class=\"card-title\">Total Metrics</div>")?;
        writeln!(
            html,
            "        <div class=\"card-value\">{}</div>",
            result.summary.total_compared
        )?;
        writeln!(html, "    </div>")?;
        for change_type in ChangeType::ALL {
            writeln!(html, "    <div class=\"card\">")?;
            writeln!(
                html,
                "        <div class=\"card-title\">{} {}</div>",
                escape_html(styles.symbol(change_type)),
                change_type.title()
            )?;
            writeln!(
                html,
                "        <div class=\"card-value {}\">{}</div>",
                change_type.label(),
                result.summary.count(change_type)
            )?;
            writeln!(html, "    </div>")?;
        }
        writeln!(html, "</div>")?;

        // Changes table
        writeln!(html, "<div class=\"section\">")?;
        writeln!(html, "    <h2>Detailed Metrics Comparison</h2>")?;
        if result.changes.is_empty() {
            writeln!(html, "    <p>No changes detected.</p>")?;
        } else {
            writeln!(html, "    <table>")?;
            writeln!(html, "        <thead>")?;
            writeln!(html, "            <tr>")?;
            for column in ["Metric", "Field", "Status", "Old Value", "New Value", "Change"] {
                writeln!(html, "                <th>{column}</th>")?;
            }
            writeln!(html, "            </tr>")?;
            writeln!(html, "        </thead>")?;
            writeln!(html, "        <tbody>")?;
            for change in &result.changes {
                let change_type = change.change_type();
                writeln!(html, "            <tr class=\"{}\">", change_type.label())?;
                writeln!(html, "                <td>{}</td>", escape_html(change.metric_name()))?;
                writeln!(html, "                <td>{}</td>", escape_html(change.field_name()))?;
                writeln!(
                    html,
                    "                <td>{} {}</td>",
                    escape_html(styles.symbol(change_type)),
                    change_type.title()
                )?;
                writeln!(
                    html,
                    "                <td class=\"num\">{}</td>",
                    format_value(change.old_value())
                )?;
                writeln!(
                    html,
                    "                <td class=\"num\">{}</td>",
                    format_value(change.new_value())
                )?;
                writeln!(
                    html,
                    "                <td class=\"num\">{}</td>",
                    format_percentage(change.percentage_change(), config.min_percentage_change)
                        .trim_start()
                )?;
                writeln!(html, "            </tr>")?;
            }
            writeln!(html, "        </tbody>")?;
            writeln!(html, "    </table>")?;
        }
        writeln!(html, "</div>")?;

        // Metadata
        if config.has_metadata_panel() {
            let old = config.metadata.old_snapshot.as_ref();
            let new = config.metadata.new_snapshot.as_ref();
            writeln!(html, "<div class=\"section\">")?;
            writeln!(html, "    <h2>Metadata</h2>")?;
            writeln!(html, "    <table>")?;
            writeln!(
                html,
                "        <thead><tr><th></th><th>Old</th><th>New</th></tr></thead>"
            )?;
            writeln!(html, "        <tbody>")?;
            write_metadata_row(&mut html, "Generated At", old, new, |m| {
                m.generated_at.as_deref()
            })?;
            write_metadata_row(&mut html, "Source File", old, new, |m| {
                m.source_file.as_deref()
            })?;
            writeln!(html, "        </tbody>")?;
            writeln!(html, "    </table>")?;
            writeln!(html, "</div>")?;
        }

        // Footer
        writeln!(html, "<div class=\"footer\">")?;
        writeln!(
            html,
            "    <p>Generated by {} v{}</p>",
            env!("CARGO_PKG_NAME"),
            escape_html(&config.metadata.tool_version)
        )?;
        writeln!(html, "</div>")?;

        writeln!(html, "</div>")?;
        writeln!(html, "</body>")?;
        writeln!(html, "</html>")?;

        Ok(html)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Html
    }
}

fn write_metadata_row(
    html: &mut String,
    label: &str,
    old: Option<&SnapshotMetadata>,
    new: Option<&SnapshotMetadata>,
    get: fn(&SnapshotMetadata) -> Option<&str>,
) -> std::fmt::Result {
    writeln!(
        html,
        "            <tr><td>{label}</td><td>{}</td><td>{}</td></tr>",
        escape_html_opt(old.and_then(get)),
        escape_html_opt(new.and_then(get))
    )
}
