//! Snapshot document format detection.

use std::path::Path;

/// Document format of a snapshot file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    /// Get the human-readable name for this format.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }

    /// Format implied by a file extension, if it is a known one.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Guess the format from content: a leading `{` means JSON.
    #[must_use]
    pub fn sniff(content: &str) -> Self {
        let trimmed = content.trim_start_matches('\u{feff}').trim_start();
        if trimmed.starts_with('{') {
            Self::Json
        } else {
            Self::Yaml
        }
    }

    /// Detect the format of a file, by extension first and content second.
    #[must_use]
    pub fn detect(path: &Path, content: &str) -> Self {
        Self::from_path(path).unwrap_or_else(|| Self::sniff(content))
    }
}

impl std::fmt::Display for SnapshotFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(
            SnapshotFormat::from_path(Path::new("run.json")),
            Some(SnapshotFormat::Json)
        );
        assert_eq!(
            SnapshotFormat::from_path(Path::new("run.YML")),
            Some(SnapshotFormat::Yaml)
        );
        assert_eq!(
            SnapshotFormat::from_path(Path::new("run.yaml")),
            Some(SnapshotFormat::Yaml)
        );
        assert_eq!(SnapshotFormat::from_path(Path::new("run.txt")), None);
        assert_eq!(SnapshotFormat::from_path(Path::new("metrics")), None);
    }

    #[test]
    fn test_sniff() {
        assert_eq!(SnapshotFormat::sniff("  \n{\"a\": 1}"), SnapshotFormat::Json);
        assert_eq!(SnapshotFormat::sniff("aggregate_metrics: {}"), SnapshotFormat::Yaml);
    }

    #[test]
    fn test_extension_wins_over_content() {
        let format = SnapshotFormat::detect(Path::new("odd.yaml"), "{\"a\": 1}");
        assert_eq!(format, SnapshotFormat::Yaml);
        let format = SnapshotFormat::detect(Path::new("odd.out"), "{\"a\": 1}");
        assert_eq!(format, SnapshotFormat::Json);
    }
}
