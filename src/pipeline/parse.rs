//! Snapshot parsing stage.

use super::PipelineError;
use crate::model::Snapshot;
use crate::parsers::parse_snapshot;
use std::path::{Path, PathBuf};

/// A parsed snapshot together with the file it came from
#[derive(Debug, Clone)]
pub struct ParsedSnapshot {
    /// The snapshot
    pub snapshot: Snapshot,
    /// Source file
    pub path: PathBuf,
}

impl ParsedSnapshot {
    #[must_use]
    pub const fn new(snapshot: Snapshot, path: PathBuf) -> Self {
        Self { snapshot, path }
    }

    /// Get a reference to the snapshot
    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Source path as displayed in reports
    #[must_use]
    pub fn display_path(&self) -> String {
        self.path.to_string_lossy().to_string()
    }

    /// Consume and return the inner snapshot
    #[must_use]
    pub fn into_snapshot(self) -> Snapshot {
        self.snapshot
    }
}

/// Parse a snapshot file, attaching the path to any failure
pub fn parse_snapshot_with_context(
    path: &Path,
    quiet: bool,
) -> std::result::Result<ParsedSnapshot, PipelineError> {
    if !quiet {
        tracing::info!("Parsing snapshot: {:?}", path);
    }

    let snapshot = parse_snapshot(path).map_err(|source| PipelineError::ParseFailed {
        path: path.display().to_string(),
        source,
    })?;

    if !quiet {
        tracing::info!(
            "Parsed {} metrics ({} numeric fields)",
            snapshot.metric_count(),
            snapshot.numeric_field_count()
        );
    }

    Ok(ParsedSnapshot::new(snapshot, path.to_path_buf()))
}
