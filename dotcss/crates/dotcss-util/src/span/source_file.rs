//! Source files and offset-to-position mapping.
//!
//! CSS recognises `\n`, `\r\n`, `\r` and `\f` as line terminators, so the
//! line index here does too.

use std::sync::Arc;

use crate::error::{SourceFileError, SourceFileResult};

/// A source file with its content and a precomputed line index
///
/// # Examples
///
/// ```
/// use dotcss_util::span::SourceFile;
///
/// let file = SourceFile::new("style.css", "a{}\nb{}");
/// assert_eq!(file.name(), "style.css");
/// assert_eq!(file.line_count(), 2);
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Byte offsets where each line starts
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        let bytes = content.as_bytes();
        let mut line_starts = vec![0];

        for (i, &b) in bytes.iter().enumerate() {
            match b {
                b'\n' | b'\x0C' => line_starts.push(i + 1),
                // \r\n is a single terminator; the \n records the line start.
                b'\r' if bytes.get(i + 1) != Some(&b'\n') => line_starts.push(i + 1),
                _ => {},
            }
        }

        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (0-indexed line number)
    ///
    /// ```
    /// use dotcss_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.css", "a\r\nb\x0Cc");
    /// assert_eq!(file.line_start(1), Some(3));
    /// assert_eq!(file.line_start(2), Some(5));
    /// assert_eq!(file.line_start(3), None);
    /// ```
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Convert a byte offset to 1-based `(line, column)` coordinates
    ///
    /// The column counts characters, not bytes, from the start of the line.
    /// Offsets past the end of the file are clamped to the end.
    ///
    /// ```
    /// use dotcss_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.css", "über {}\nx");
    /// assert_eq!(file.offset_to_line_col(0), (1, 1));
    /// assert_eq!(file.offset_to_line_col(6), (1, 6));
    /// assert_eq!(file.offset_to_line_col(9), (2, 1));
    /// ```
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.content.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(insert_point) => insert_point.saturating_sub(1),
        };
        let line_start = self.line_starts.get(line).copied().unwrap_or(0);
        let column = self
            .content
            .get(line_start..offset)
            .map_or(offset - line_start, |text| text.chars().count());
        (line + 1, column + 1)
    }

    /// Get a specific source line (1-indexed), without its terminator
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.content.len());
        let text = self.content.get(start..end)?;
        Some(text.trim_end_matches(['\n', '\r', '\x0C']))
    }

    /// Extract a substring from the file content with bounds checking
    ///
    /// ```
    /// use dotcss_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.css", "#fff");
    /// assert_eq!(file.extract_range(1, 4).unwrap(), "fff");
    /// assert!(file.extract_range(1, 9).is_err());
    /// ```
    pub fn extract_range(&self, start: usize, end: usize) -> SourceFileResult<&str> {
        if start > end {
            return Err(SourceFileError::InvalidSpan { start, end });
        }
        if end > self.content.len() {
            return Err(SourceFileError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }
        self.content
            .get(start..end)
            .ok_or(SourceFileError::NotCharBoundary { start, end })
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        let file = SourceFile::new("a.css", "color: red");
        assert_eq!(file.line_count(), 1);
        assert_eq!(file.offset_to_line_col(7), (1, 8));
    }

    #[test]
    fn test_crlf_counts_once() {
        let file = SourceFile::new("a.css", "a\r\nb\rc\nd");
        assert_eq!(file.line_count(), 4);
        assert_eq!(file.offset_to_line_col(3), (2, 1));
        assert_eq!(file.offset_to_line_col(5), (3, 1));
        assert_eq!(file.offset_to_line_col(7), (4, 1));
    }

    #[test]
    fn test_form_feed_is_line_break() {
        let file = SourceFile::new("a.css", "a\x0Cb");
        assert_eq!(file.offset_to_line_col(2), (2, 1));
    }

    #[test]
    fn test_offset_past_end_is_clamped() {
        let file = SourceFile::new("a.css", "ab\ncd");
        assert_eq!(file.offset_to_line_col(100), (2, 3));
    }

    #[test]
    fn test_line_at_trims_terminators() {
        let file = SourceFile::new("a.css", "one\r\ntwo\nthree");
        assert_eq!(file.line_at(1), Some("one"));
        assert_eq!(file.line_at(2), Some("two"));
        assert_eq!(file.line_at(3), Some("three"));
        assert_eq!(file.line_at(0), None);
        assert_eq!(file.line_at(4), None);
    }

    #[test]
    fn test_extract_range_errors() {
        let file = SourceFile::new("a.css", "é");
        assert_eq!(
            file.extract_range(2, 1),
            Err(SourceFileError::InvalidSpan { start: 2, end: 1 })
        );
        assert_eq!(
            file.extract_range(0, 1),
            Err(SourceFileError::NotCharBoundary { start: 0, end: 1 })
        );
        assert_eq!(file.extract_range(0, 2), Ok("é"));
    }

    #[test]
    fn test_empty_file() {
        let file = SourceFile::new("empty.css", "");
        assert_eq!(file.line_count(), 1);
        assert_eq!(file.offset_to_line_col(0), (1, 1));
        assert_eq!(file.line_at(1), Some(""));
    }
}
