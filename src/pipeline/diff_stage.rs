//! Diff computation stage.
//!
//! Builds the engine from the comparison settings, runs it, and logs what
//! was found.

use super::PipelineError;
use crate::config::DiffConfig;
use crate::diff::{DiffEngine, DiffResult};
use crate::model::Snapshot;

/// Run the diff between two snapshots with the configured comparison options.
///
/// The returned result holds the ordered, filtered change list; its summary
/// counts every compared field.
pub fn compute_diff(
    config: &DiffConfig,
    old: &Snapshot,
    new: &Snapshot,
) -> Result<DiffResult, PipelineError> {
    let quiet = config.behavior.quiet;

    if !quiet {
        tracing::info!("Computing metrics diff...");
    }

    let engine = DiffEngine::new(config.comparison.clone())
        .map_err(|source| PipelineError::DiffFailed { source })?;
    let result = engine.compare(old, new);

    if !quiet {
        tracing::info!(
            "Diff complete: {} changes across {} compared fields ({} shown)",
            result.summary.total_changes(),
            result.summary.total_compared,
            result.changes.len()
        );
    }

    Ok(result)
}
