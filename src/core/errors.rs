//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ckmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// A source unit that could not be structurally parsed
    #[error("Parse error in {file}: {message}")]
    Parse { file: PathBuf, message: String },

    /// Path is neither a Python file nor a directory
    #[error("Path {0} is not a Python file or directory")]
    InvalidPath(PathBuf),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Pattern errors
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),
}
