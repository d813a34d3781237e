//! Error types and exit codes for marginalia
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (IO, serialization)
//! - 2: Usage error (bad flags/args, rejected input)
//! - 3: Data/store error (missing draft, invalid frontmatter, etc.)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the marginalia CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args or rejected input (2)
    Usage = 2,
    /// Data/store error - missing draft, invalid frontmatter (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during marginalia operations
#[derive(Error, Debug)]
pub enum MarginaliaError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    /// Input rejected by presence checks (missing source URL, no highlights)
    #[error("{0}")]
    Validation(String),

    // Data/store errors (exit code 3)
    #[error("draft not found: {filename}")]
    DraftNotFound { filename: String },

    #[error("invalid draft filename: {filename}")]
    InvalidFilename { filename: String },

    #[error("invalid frontmatter in {path:?}: {reason}")]
    InvalidFrontmatter { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl MarginaliaError {
    /// Create a validation error with a user-facing message
    pub fn validation(message: impl Into<String>) -> Self {
        MarginaliaError::Validation(message.into())
    }

    /// Create an error for a draft that does not exist
    pub fn draft_not_found(filename: impl Into<String>) -> Self {
        MarginaliaError::DraftNotFound {
            filename: filename.into(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        MarginaliaError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            MarginaliaError::UsageError(_)
            | MarginaliaError::Validation(_) => ExitCode::Usage,

            MarginaliaError::DraftNotFound { .. }
            | MarginaliaError::InvalidFilename { .. }
            | MarginaliaError::InvalidFrontmatter { .. } => ExitCode::Data,

            MarginaliaError::Io(_)
            | MarginaliaError::Yaml(_)
            | MarginaliaError::Json(_)
            | MarginaliaError::Toml(_)
            | MarginaliaError::FailedOperationWithTarget { .. }
            | MarginaliaError::Other(_) => ExitCode::Failure,
        }
    }

    /// Stable error type identifier used in JSON output
    pub fn error_type(&self) -> &'static str {
        match self {
            MarginaliaError::UsageError(_) => "usage_error",
            MarginaliaError::Validation(_) => "validation",
            MarginaliaError::DraftNotFound { .. } => "not_found",
            MarginaliaError::InvalidFilename { .. } => "invalid_filename",
            MarginaliaError::InvalidFrontmatter { .. } => "invalid_frontmatter",
            MarginaliaError::Io(_) => "io_error",
            MarginaliaError::Yaml(_) => "yaml_error",
            MarginaliaError::Json(_) => "json_error",
            MarginaliaError::Toml(_) => "toml_error",
            MarginaliaError::FailedOperationWithTarget { .. } => "failed_operation",
            MarginaliaError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for marginalia operations
pub type Result<T> = std::result::Result<T, MarginaliaError>;
