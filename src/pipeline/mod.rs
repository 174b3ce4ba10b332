//! Pipeline orchestration for snapshot comparisons.
//!
//! This module provides the parse → diff → report stages the CLI runs, plus
//! output targets and exit codes.

mod diff_stage;
mod output;
mod parse;
mod report_stage;

pub use diff_stage::compute_diff;
pub use output::{should_use_color, write_output, OutputTarget};
pub use parse::{parse_snapshot_with_context, ParsedSnapshot};
pub use report_stage::{build_report_config, output_export, output_report};

use crate::error::MetricsDiffError;
use crate::reports::ReportError;

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or parse a snapshot file
    #[error("Parse failed for {path}: {source}")]
    ParseFailed {
        path: String,
        #[source]
        source: MetricsDiffError,
    },

    /// The diff engine rejected the comparison settings
    #[error("Diff failed: {source}")]
    DiffFailed {
        #[source]
        source: MetricsDiffError,
    },

    /// Report generation failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: ReportError,
    },

    /// Writing the report or export failed
    #[error("Failed to write {target}: {source}")]
    WriteFailed {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - comparison completed (changes only matter with --fail-on-change)
    pub const SUCCESS: i32 = 0;
    /// An error occurred: missing input, invalid document or configuration
    pub const ERROR: i32 = 1;
    /// Changes were detected and --fail-on-change was given
    pub const CHANGES_DETECTED: i32 = 2;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::ERROR, 1);
        assert_eq!(exit_codes::CHANGES_DETECTED, 2);
    }

    #[test]
    fn test_parse_failed_display() {
        let err = PipelineError::ParseFailed {
            path: "old.json".to_string(),
            source: MetricsDiffError::invalid_shape("old.json", "not an object"),
        };
        let display = err.to_string();
        assert!(display.starts_with("Parse failed for old.json"));
    }
}
