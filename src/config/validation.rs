//! Configuration validation for metrics-diff.

use super::defaults::VALID_COLORS;
use super::types::{
    AppConfig, BehaviorConfig, ColorsConfig, ComparisonConfig, DiffConfig, OutputConfig,
    SymbolsConfig,
};
use crate::diff::ChangeType;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    pub(crate) fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn non_negative(field: &str, value: f64) -> Self {
        Self::new(
            field,
            format!("Value must be a finite number >= 0, got {value}"),
        )
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.comparison.validate());
        errors.extend(self.output.validate());
        errors.extend(self.symbols.validate());
        errors.extend(self.colors.validate());
        errors
    }
}

impl Validatable for ComparisonConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !self.float_precision.is_finite() || self.float_precision < 0.0 {
            errors.push(ConfigError::non_negative(
                "comparison.float_precision",
                self.float_precision,
            ));
        }
        if !self.min_percentage_change.is_finite() || self.min_percentage_change < 0.0 {
            errors.push(ConfigError::non_negative(
                "comparison.min_percentage_change",
                self.min_percentage_change,
            ));
        }

        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError::new(
                        "output.file",
                        format!("Parent directory does not exist: {}", parent.display()),
                    ));
                }
            }
        }

        errors
    }
}

impl Validatable for SymbolsConfig {
    fn validate(&self) -> Vec<ConfigError> {
        ChangeType::ALL
            .into_iter()
            .filter(|ct| self.get(*ct).is_empty())
            .map(|ct| ConfigError::new(format!("symbols.{}", ct.label()), "Symbol must not be empty"))
            .collect()
    }
}

impl Validatable for ColorsConfig {
    fn validate(&self) -> Vec<ConfigError> {
        ChangeType::ALL
            .into_iter()
            .filter(|ct| !VALID_COLORS.contains(&self.get(*ct)))
            .map(|ct| {
                ConfigError::new(
                    format!("colors.{}", ct.label()),
                    format!(
                        "Invalid color '{}'. Valid options: {}",
                        self.get(ct),
                        VALID_COLORS.join(", ")
                    ),
                )
            })
            .collect()
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        Vec::new()
    }
}

impl Validatable for DiffConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !self.paths.old.exists() {
            errors.push(ConfigError::new(
                "paths.old",
                format!("File not found: {}", self.paths.old.display()),
            ));
        }
        if !self.paths.new.exists() {
            errors.push(ConfigError::new(
                "paths.new",
                format!("File not found: {}", self.paths.new.display()),
            ));
        }

        errors.extend(self.comparison.validate());
        errors.extend(self.output.validate());
        errors.extend(self.symbols.validate());
        errors.extend(self.colors.validate());
        errors.extend(self.behavior.validate());

        if let Some(ref export) = self.export {
            if let Some(parent) = export.path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError::new(
                        "export.path",
                        format!("Parent directory does not exist: {}", parent.display()),
                    ));
                }
            }
        }

        errors
    }
}

// ============================================================================
// Tests
// ============================================================================
