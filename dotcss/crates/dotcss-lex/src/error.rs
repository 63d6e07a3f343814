//! Error types for dotcss-lex.
//!
//! Malformed stylesheet text is never an error: the scanner degrades to
//! single-character `Delim` tokens instead. The only failures are
//! precondition violations by callers of the helper entry points.

use thiserror::Error;

/// Error type for scanner operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// `scan_unquoted_string` was called where no unquoted character follows
    #[error("expected unquoted string content at offset {offset}")]
    EmptyUnquotedString {
        /// Byte offset the scan was attempted at
        offset: usize,
    },
}

/// Result type alias for scanner operations
pub type ScanResult<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_unquoted_string_display() {
        let err = ScanError::EmptyUnquotedString { offset: 4 };
        assert_eq!(
            err.to_string(),
            "expected unquoted string content at offset 4"
        );
    }
}
