//! Report generation for diff results.
//!
//! This module provides multiple output formats for snapshot comparisons:
//! - Summary: per-category totals
//! - Table: summary plus an aligned, colored change table
//! - Tree: summary plus changes grouped by metric
//! - JSON: structured data for programmatic integration
//! - HTML: standalone document for sharing
//!
//! # Security
//!
//! The `escape` module provides utilities for safe output generation.
//! Metric and field names come from the input documents and are escaped
//! before being embedded in HTML or written to a terminal.

pub mod escape;
mod html;
mod json;
mod style;
mod summary;
mod table;
mod tree;
mod types;

pub use html::HtmlReporter;
pub use json::JsonReporter;
pub use style::{ansi_color, format_percentage, format_value, ChangeStyle, ChangeStyles};
pub use summary::SummaryReporter;
pub use table::TableReporter;
pub use tree::TreeReporter;
pub use types::{ExportFormat, ReportConfig, ReportFormat, ReportMetadata};

use crate::diff::DiffResult;
use crate::error::{MetricsDiffError, ReportErrorKind};
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<ReportError> for MetricsDiffError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::IoError(source) => source.into(),
            ReportError::SerializationError(msg) => Self::report(
                "generating report",
                ReportErrorKind::JsonSerializationError(msg),
            ),
            ReportError::FormatError(e) => {
                Self::report("generating report", ReportErrorKind::RenderError(e.to_string()))
            }
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report from diff results
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_diff_report(result, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Table => {
            if use_color {
                Box::new(TableReporter::new())
            } else {
                Box::new(TableReporter::new().no_color())
            }
        }
        ReportFormat::Tree => {
            if use_color {
                Box::new(TreeReporter::new())
            } else {
                Box::new(TreeReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_formats() {
        for format in [
            ReportFormat::Summary,
            ReportFormat::Table,
            ReportFormat::Tree,
            ReportFormat::Json,
            ReportFormat::Html,
        ] {
            assert_eq!(create_reporter_with_options(format, false).format(), format);
        }
    }

    #[test]
    fn test_write_diff_report() {
        let mut buf = Vec::new();
        create_reporter(ReportFormat::Json)
            .write_diff_report(&DiffResult::default(), &ReportConfig::default(), &mut buf)
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["summary"]["has_changes"], false);
    }

    #[test]
    fn test_report_error_conversion() {
        let err: MetricsDiffError = ReportError::SerializationError("boom".to_string()).into();
        assert!(matches!(
            err,
            MetricsDiffError::Report {
                source: ReportErrorKind::JsonSerializationError(_),
                ..
            }
        ));
    }
}
