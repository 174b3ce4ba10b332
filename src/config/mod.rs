//! Configuration module for metrics-diff.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use metrics_diff::config::{ComparisonConfig, SortKey};
//!
//! // Use defaults
//! let config = ComparisonConfig::default();
//!
//! // Use the validating builder
//! let config = ComparisonConfig::builder()
//!     .float_precision(0.001)
//!     .ignore_field("timestamp")
//!     .sort_by(SortKey::Percentage)
//!     .build()?;
//!
//! // Load from file
//! use metrics_diff::config::load_or_default;
//! let (app_config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.metrics-diff.yaml` file in your project root or
//! `~/.config/metrics-diff/`:
//!
//! ```yaml
//! comparison:
//!   float_precision: 0.001
//!   exclude_metrics: [debug_counters]
//! output:
//!   format: tree
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    DEFAULT_FLOAT_PRECISION, DEFAULT_MAX_CHANGES, DEFAULT_MIN_PERCENTAGE_CHANGE, VALID_COLORS,
};
pub use types::{
    AppConfig, BehaviorConfig, ColorsConfig, ComparisonConfig, ComparisonConfigBuilder,
    DiffConfig, DiffPaths, ExportConfig, OutputConfig, SortKey, SymbolsConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_full_example_config, load_config_file, load_or_default,
    ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Documents every option accepted in `.metrics-diff.yaml`, for editor
/// validation and autocompletion.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_lists_sections() {
        let schema = generate_json_schema().expect("schema");
        for section in ["comparison", "output", "symbols", "colors", "float_precision"] {
            assert!(schema.contains(section), "schema missing {section}");
        }
    }
}
