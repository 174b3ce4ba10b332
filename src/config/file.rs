//! Configuration file loading and discovery.
//!
//! Config files are YAML documents shaped like [`AppConfig`]; every
//! section and key is optional.

use super::types::AppConfig;
use super::validation::{ConfigError, Validatable};
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".metrics-diff.yaml",
    ".metrics-diff.yml",
    "metrics-diff.yaml",
    "metrics-diff.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/metrics-diff/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    let cwd = std::env::current_dir().ok();
    if let Some(path) = cwd.as_deref().and_then(find_config_in_dir) {
        return Some(path);
    }

    if let Some(path) = find_git_root().as_deref().and_then(find_config_in_dir) {
        return Some(path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        if let Some(path) = find_config_in_dir(&config_dir.join("metrics-diff")) {
            return Some(path);
        }
    }

    dirs::home_dir().as_deref().and_then(find_config_in_dir)
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// File not found
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// IO error reading file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// Parsed but out-of-range values
    #[error("Invalid config file: {}", join_errors(.0))]
    Invalid(Vec<ConfigError>),
}

fn join_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Load and validate an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = if content.trim().is_empty() {
        AppConfig::default()
    } else {
        serde_yaml::from_str(&content)?
    };

    let errors = config.validate();
    if errors.is_empty() {
        Ok(config)
    } else {
        Err(ConfigFileError::Invalid(errors))
    }
}

/// Load config from discovered file, or return default.
///
/// A discovered file that fails to load is reported and ignored.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# metrics-diff configuration file
# ================================
#
# Place it at:
#   - .metrics-diff.yaml in your project root
#   - ~/.config/metrics-diff/metrics-diff.yaml for global config
#
# CLI arguments always override file settings.

comparison:
  # Absolute difference below which two values are equal
  float_precision: 1.0e-10
  # Percentages below this magnitude are not displayed
  min_percentage_change: 0.01
  # Field names skipped in every metric
  ignore_fields: []
  # Metric names skipped entirely
  exclude_metrics: []
  # Keep unchanged fields in the report
  show_unchanged: false
  # Maximum number of reported changes (0 = unlimited)
  max_changes: 0
  # Ordering: metric_name, field_name, change_type, percentage
  sort_by: metric_name

output:
  # Format: table, tree, summary, json, html
  format: table
  # Output file path (omit for stdout)
  # file: report.txt
  no_color: false
  # Show snapshot metadata when present
  show_metadata: true
  # title: Nightly benchmark comparison

symbols:
  increased: 📈
  decreased: 📉
  unchanged: ➡️
  new: ✨
  removed: ❌

# Colors: red, green, yellow, blue, magenta, cyan, white, dim, bold
colors:
  increased: green
  decreased: red
  unchanged: blue
  new: yellow
  removed: red
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SortKey;
    use crate::reports::ReportFormat;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".metrics-diff.yaml");
        std::fs::write(&config_path, "comparison:\n  show_unchanged: true\n").unwrap();

        assert_eq!(find_config_in_dir(tmp.path()), Some(config_path));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_config_in_dir(tmp.path()), None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");

        let yaml = r"
comparison:
  float_precision: 0.001
  ignore_fields: [timestamp]
  sort_by: percentage
output:
  format: tree
colors:
  new: cyan
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert!((config.comparison.float_precision - 0.001).abs() < f64::EPSILON);
        assert!(config.comparison.is_field_ignored("timestamp"));
        assert_eq!(config.comparison.sort_by, SortKey::Percentage);
        assert_eq!(config.output.format, ReportFormat::Tree);
        assert_eq!(config.colors.new, "cyan");
        assert_eq!(config.colors.increased, "green");
    }

    #[test]
    fn test_empty_config_file_is_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("empty.yaml");
        std::fs::write(&config_path, "").unwrap();

        assert_eq!(load_config_file(&config_path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_config_file_invalid_values() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("bad.yaml");
        std::fs::write(&config_path, "comparison:\n  float_precision: -1\n").unwrap();

        let err = load_config_file(&config_path).unwrap_err();
        assert!(matches!(err, ConfigFileError::Invalid(_)));
        assert!(err.to_string().contains("comparison.float_precision"));
    }

    #[test]
    fn test_load_config_file_parse_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("broken.yaml");
        std::fs::write(&config_path, "comparison: [not, a, mapping").unwrap();

        assert!(matches!(
            load_config_file(&config_path),
            Err(ConfigFileError::Parse(_))
        ));
    }

    #[test]
    fn test_generated_config_parses() {
        let full: AppConfig = serde_yaml::from_str(&generate_full_example_config()).unwrap();
        assert!(full.is_valid());
        assert_eq!(full.comparison, AppConfig::default().comparison);
        assert_eq!(full.symbols.increased, "📈");
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom-config.yaml");
        std::fs::write(&config_path, "output:\n  no_color: true\n").unwrap();

        assert_eq!(discover_config_file(Some(&config_path)), Some(config_path));
    }
}
