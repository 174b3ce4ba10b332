//! Diff command handler.
//!
//! Implements the default command: compare two snapshot files.

use crate::config::{AppConfig, DiffConfig, SortKey, Validatable};
use crate::diff::DiffResult;
use crate::pipeline::{
    build_report_config, compute_diff, exit_codes, output_export, output_report,
    parse_snapshot_with_context,
};
use crate::reports::ReportFormat;
use anyhow::{bail, Result};
use std::path::PathBuf;

/// Command-line values that take precedence over the configuration file.
///
/// `None` and empty lists leave the file value in place; list options extend
/// the configured sets.
#[derive(Debug, Clone, Default)]
pub struct DiffOverrides {
    pub show_unchanged: bool,
    pub format: Option<ReportFormat>,
    pub output_file: Option<PathBuf>,
    pub sort_by: Option<SortKey>,
    pub max_changes: Option<usize>,
    pub ignore_fields: Vec<String>,
    pub exclude_metrics: Vec<String>,
    pub float_precision: Option<f64>,
    pub min_percentage_change: Option<f64>,
    pub no_color: bool,
    pub title: Option<String>,
}

impl DiffOverrides {
    /// Apply the overrides on top of a loaded configuration.
    pub fn apply(self, config: &mut AppConfig) {
        let comparison = &mut config.comparison;
        if self.show_unchanged {
            comparison.show_unchanged = true;
        }
        if let Some(sort_by) = self.sort_by {
            comparison.sort_by = sort_by;
        }
        if let Some(max_changes) = self.max_changes {
            comparison.max_changes = max_changes;
        }
        if let Some(precision) = self.float_precision {
            comparison.float_precision = precision;
        }
        if let Some(min) = self.min_percentage_change {
            comparison.min_percentage_change = min;
        }
        comparison.ignore_fields.extend(self.ignore_fields);
        comparison.exclude_metrics.extend(self.exclude_metrics);

        let output = &mut config.output;
        if let Some(format) = self.format {
            output.format = format;
        }
        if self.output_file.is_some() {
            output.file = self.output_file;
        }
        if self.no_color {
            output.no_color = true;
        }
        if self.title.is_some() {
            output.title = self.title;
        }
    }
}

/// Run the diff command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_diff(config: DiffConfig) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("Invalid configuration:\n  {}", details.join("\n  "));
    }

    let quiet = config.behavior.quiet;

    let old_parsed = parse_snapshot_with_context(&config.paths.old, quiet)?;
    let new_parsed = parse_snapshot_with_context(&config.paths.new, quiet)?;

    let result = compute_diff(&config, old_parsed.snapshot(), new_parsed.snapshot())?;
    let exit_code = determine_exit_code(&config, &result);

    let report_config = build_report_config(&config, &old_parsed, &new_parsed);
    output_report(&config, &result, &report_config)?;
    output_export(&config, &result, &report_config)?;

    Ok(exit_code)
}

/// Determine the exit code based on diff results and config flags.
const fn determine_exit_code(config: &DiffConfig, result: &DiffResult) -> i32 {
    if config.behavior.fail_on_change && result.has_changes() {
        return exit_codes::CHANGES_DETECTED;
    }
    exit_codes::SUCCESS
}
