//! Tokens command implementation.
//!
//! Scans a stylesheet and prints its token stream, either as tab-separated
//! text or as a JSON array.

use std::io::Write;
use std::path::PathBuf;

use dotcss_lex::{tokenize, ScannerOptions, Token};
use dotcss_util::SourceFile;
use serde::Serialize;
use tracing::debug;

use crate::config::OutputFormat;
use crate::error::{DcstError, Result};

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Stylesheet to scan.
    pub file: PathBuf,
    /// Listing format.
    pub format: OutputFormat,
    /// Prefix text lines with `line:column`.
    pub positions: bool,
    /// Trivia filtering.
    pub options: ScannerOptions,
}

/// One token as it appears in JSON output.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct TokenRecord<'a> {
    kind: &'static str,
    start: usize,
    end: usize,
    line: usize,
    column: usize,
    lexeme: &'a str,
    value: Option<&'a str>,
}

impl<'a> TokenRecord<'a> {
    fn new(file: &'a SourceFile, token: &Token<'a>) -> Result<Self> {
        let (line, column) = file.offset_to_line_col(token.span.start);
        Ok(Self {
            kind: token.kind.name(),
            start: token.span.start,
            end: token.span.end,
            line,
            column,
            lexeme: file.extract_range(token.span.start, token.span.end)?,
            value: token.value,
        })
    }
}

/// Run the tokens command, writing the listing to stdout.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    debug!("Scanning {}", args.file.display());

    let content = std::fs::read_to_string(&args.file).map_err(|e| {
        DcstError::FileOperation(format!("Failed to read {}: {}", args.file.display(), e))
    })?;
    let file = SourceFile::new(args.file.display().to_string(), content);

    let listing = render_tokens(&file, &args)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(listing.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Scan `file` and render the listing described by `args`.
fn render_tokens(file: &SourceFile, args: &TokensArgs) -> Result<String> {
    let tokens = tokenize(file.content(), args.options);
    debug!(count = tokens.len(), format = ?args.format, "rendering tokens");

    let records = tokens
        .iter()
        .map(|token| TokenRecord::new(file, token))
        .collect::<Result<Vec<_>>>()?;

    match args.format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&records)?;
            json.push('\n');
            Ok(json)
        },
        OutputFormat::Text => Ok(render_text(&records, args.positions)),
    }
}

fn render_text(records: &[TokenRecord<'_>], positions: bool) -> String {
    let mut out = String::new();
    for record in records {
        if positions {
            out.push_str(&format!("{}:{}\t", record.line, record.column));
        }
        out.push_str(record.kind);
        out.push('\t');
        push_escaped(&mut out, record.lexeme);
        out.push('\n');
    }
    out
}

/// Appends `lexeme` with control characters escaped, so line breaks and tabs
/// inside whitespace and comments keep one token per line.
fn push_escaped(out: &mut String, lexeme: &str) {
    for c in lexeme.chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
}
