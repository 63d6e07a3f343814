//! Core error types for dotcss-util crate

use thiserror::Error;

/// Error type for source file operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceFileError {
    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan {
        /// Start byte offset
        start: usize,
        /// End byte offset
        end: usize,
    },

    /// Span out of bounds for file
    #[error("Span out of bounds: file has {file_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        /// Length of the file content in bytes
        file_len: usize,
        /// Requested start offset
        span_start: usize,
        /// Requested end offset
        span_end: usize,
    },

    /// Span does not fall on UTF-8 character boundaries
    #[error("Span {start}..{end} is not on character boundaries")]
    NotCharBoundary {
        /// Start byte offset
        start: usize,
        /// End byte offset
        end: usize,
    },
}

/// Result type alias for source file operations
pub type SourceFileResult<T> = std::result::Result<T, SourceFileError>;
