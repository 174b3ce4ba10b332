//! Unified error types for metrics-diff.
//!
//! Library code returns [`MetricsDiffError`]; the binary wraps it in
//! `anyhow` at the top level.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for metrics-diff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MetricsDiffError {
    /// Errors while loading a snapshot document
    #[error("Failed to load snapshot: {context}")]
    Load {
        context: String,
        #[source]
        source: LoadErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific snapshot load error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoadErrorKind {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML: {0}")]
    InvalidYaml(String),

    #[error("Invalid document shape: {0}")]
    InvalidShape(String),
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("Failed to render report: {0}")]
    RenderError(String),
}

/// Convenient Result type for metrics-diff operations
pub type Result<T> = std::result::Result<T, MetricsDiffError>;

impl MetricsDiffError {
    /// Create a load error with context
    pub fn load(context: impl Into<String>, source: LoadErrorKind) -> Self {
        Self::Load {
            context: context.into(),
            source,
        }
    }

    /// Create a load error for a document that does not have the expected shape
    pub fn invalid_shape(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::load(context, LoadErrorKind::InvalidShape(message.into()))
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }
}

impl From<std::io::Error> for MetricsDiffError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for MetricsDiffError {
    fn from(err: serde_json::Error) -> Self {
        Self::load(
            "JSON deserialization",
            LoadErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<serde_yaml::Error> for MetricsDiffError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::load(
            "YAML deserialization",
            LoadErrorKind::InvalidYaml(err.to_string()),
        )
    }
}

impl From<crate::config::ConfigError> for MetricsDiffError {
    fn from(err: crate::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are prepended to the error's existing context, so a chain
/// of calls reads outermost first:
///
/// ```ignore
/// use metrics_diff::error::ErrorContext;
///
/// let snapshot = parse_snapshot_str(&content, format)
///     .with_context(|| path.display().to_string())?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<MetricsDiffError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: MetricsDiffError, new_ctx: &str) -> MetricsDiffError {
    match err {
        MetricsDiffError::Load {
            context: existing,
            source,
        } => MetricsDiffError::Load {
            context: chain_context(new_ctx, &existing),
            source,
        },
        MetricsDiffError::Report {
            context: existing,
            source,
        } => MetricsDiffError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        MetricsDiffError::Io {
            path,
            message,
            source,
        } => MetricsDiffError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        MetricsDiffError::Config(msg) => MetricsDiffError::Config(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together as "`new`: `existing`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
