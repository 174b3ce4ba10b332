//! Default values for metrics-diff configuration.

use super::types::{ColorsConfig, SymbolsConfig};

/// Absolute difference below which two values compare equal.
pub const DEFAULT_FLOAT_PRECISION: f64 = 1e-10;

/// Percentages smaller than this are not displayed.
pub const DEFAULT_MIN_PERCENTAGE_CHANGE: f64 = 0.01;

/// Maximum number of reported changes (0 = unlimited).
pub const DEFAULT_MAX_CHANGES: usize = 0;

/// Color names understood by the terminal reporters.
pub const VALID_COLORS: &[&str] = &[
    "red", "green", "yellow", "blue", "magenta", "cyan", "white", "dim", "bold",
];

impl Default for SymbolsConfig {
    fn default() -> Self {
        Self {
            increased: "📈".to_string(),
            decreased: "📉".to_string(),
            unchanged: "➡️".to_string(),
            new: "✨".to_string(),
            removed: "❌".to_string(),
        }
    }
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            increased: "green".to_string(),
            decreased: "red".to_string(),
            unchanged: "blue".to_string(),
            new: "yellow".to_string(),
            removed: "red".to_string(),
        }
    }
}
