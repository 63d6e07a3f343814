//! dotcss-util - Foundation types shared by the dotcss crates
//!
//! This crate holds the small set of types every other crate in the
//! workspace agrees on:
//!
//! - [`Span`] - a half-open byte range into a source buffer
//! - [`SourceFile`] - a source buffer with a precomputed line index, used to
//!   turn span offsets into human-readable `line:column` positions
//! - [`error`] - `thiserror` error types for the operations above
//!
//! Tokens produced by the scanner carry only offsets. Line and column
//! information is derived on demand through [`SourceFile`], so the hot
//! scanning path never has to count lines.
//!
//! # Example
//!
//! ```
//! use dotcss_util::{SourceFile, Span};
//!
//! let file = SourceFile::new("style.css", "a {\n  color: red;\n}");
//! let span = Span::new(6, 11);
//!
//! assert_eq!(file.extract_range(span.start, span.end).unwrap(), "color");
//! assert_eq!(file.offset_to_line_col(span.start), (2, 3));
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod span;

pub use error::{SourceFileError, SourceFileResult};
pub use span::{SourceFile, Span};
