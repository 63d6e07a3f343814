//! Error handling module for the dcst CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use dotcss_util::SourceFileError;
use thiserror::Error;

/// Main error type for the dcst CLI application.
#[derive(Error, Debug)]
pub enum DcstError {
    /// Error when the configuration cannot be found or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be read.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when a token span does not fit the source.
    #[error("Source error: {0}")]
    Source(#[from] SourceFileError),

    /// Error when the logging subscriber cannot be installed.
    #[error("Logging error: {0}")]
    Logging(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using DcstError.
pub type Result<T> = std::result::Result<T, DcstError>;
