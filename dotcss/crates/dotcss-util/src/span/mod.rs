//! Span module - Source location tracking.
//!
//! A [`Span`] is a half-open `[start, end)` range of byte offsets into the
//! buffer a token was scanned from, so the lexeme is always recoverable as
//! `&source[span.start..span.end]`.
//!
//! # Examples
//!
//! ```
//! use dotcss_util::span::Span;
//!
//! let span = Span::new(3, 6);
//! assert_eq!(&"red-->"[span.range()], "-->");
//! ```

mod source_file;

pub use source_file::SourceFile;

use std::ops::Range;

/// Source location span
///
/// Byte offsets into a single source buffer. `start <= end` always holds for
/// spans produced by the scanner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source (inclusive)
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    ///
    /// # Examples
    ///
    /// ```
    /// use dotcss_util::span::Span;
    ///
    /// let span = Span::new(10, 20);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Create a zero-width span at a single offset
    ///
    /// # Examples
    ///
    /// ```
    /// use dotcss_util::span::Span;
    ///
    /// let point = Span::point(7);
    /// assert!(point.is_empty());
    /// assert_eq!(point.start, 7);
    /// ```
    #[inline]
    pub const fn point(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Check if the span is empty (zero length)
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    ///
    /// # Examples
    ///
    /// ```
    /// use dotcss_util::span::Span;
    ///
    /// assert_eq!(Span::new(10, 20).len(), 10);
    /// ```
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this span contains a byte offset
    #[inline]
    pub const fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Merge two spans into a single span covering both
    ///
    /// # Examples
    ///
    /// ```
    /// use dotcss_util::span::Span;
    ///
    /// let merged = Span::new(10, 20).merge(Span::new(25, 35));
    /// assert_eq!(merged, Span::new(10, 35));
    /// ```
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// The span as a `Range`, for slicing the source buffer
    #[inline]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}
