//! Report output stage.
//!
//! Handles generating the main report and the optional export document.

use super::{should_use_color, write_output, OutputTarget, ParsedSnapshot, PipelineError};
use crate::config::{DiffConfig, ExportConfig};
use crate::diff::DiffResult;
use crate::reports::{create_reporter_with_options, ChangeStyles, ReportConfig, ReportMetadata};

/// Build the report configuration shared by the main report and the export.
#[must_use]
pub fn build_report_config(
    config: &DiffConfig,
    old: &ParsedSnapshot,
    new: &ParsedSnapshot,
) -> ReportConfig {
    ReportConfig {
        title: config.output.title.clone(),
        min_percentage_change: config.comparison.min_percentage_change,
        show_metadata: config.output.show_metadata,
        styles: ChangeStyles::from_config(&config.symbols, &config.colors),
        metadata: ReportMetadata {
            old_path: Some(old.display_path()),
            new_path: Some(new.display_path()),
            old_snapshot: old.snapshot.metadata.clone(),
            new_snapshot: new.snapshot.metadata.clone(),
            ..ReportMetadata::new()
        },
    }
}

/// Output a diff report to the configured destination.
///
/// Color is used only when writing to a terminal and neither `--no-color`
/// nor `NO_COLOR` is set.
pub fn output_report(
    config: &DiffConfig,
    result: &DiffResult,
    report_config: &ReportConfig,
) -> Result<(), PipelineError> {
    let target = OutputTarget::from_option(config.output.file.clone());
    let use_color = should_use_color(config.output.no_color) && target.is_terminal();

    let reporter = create_reporter_with_options(config.output.format, use_color);
    let report = reporter
        .generate_diff_report(result, report_config)
        .map_err(|source| PipelineError::ReportFailed { source })?;

    write_output(&report, &target, config.behavior.quiet)
}

/// Write the export document, if one was requested.
pub fn output_export(
    config: &DiffConfig,
    result: &DiffResult,
    report_config: &ReportConfig,
) -> Result<(), PipelineError> {
    let Some(ExportConfig { path, format }) = &config.export else {
        return Ok(());
    };

    if !config.behavior.quiet {
        tracing::info!("Exporting {} report", format);
    }

    let reporter = create_reporter_with_options(format.report_format(), false);
    let document = reporter
        .generate_diff_report(result, report_config)
        .map_err(|source| PipelineError::ReportFailed { source })?;

    write_output(
        &document,
        &OutputTarget::File(path.clone()),
        config.behavior.quiet,
    )
}
