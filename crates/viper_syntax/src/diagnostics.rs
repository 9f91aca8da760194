//! Diagnostics for the Viper syntax front end.
//!
//! Both stages fail fast: the lexer stops at the first malformed character and the parser at the first hard stop.
//! Each failure is a single structured error carrying a message and the 0-based `(row, column)` at which it was
//! detected, in the same convention tokens use.
//!
//! ## Notes
//! - `column` may be `-1` (the position just after a line break), exactly like a NEWLINE token's column.
//! - Rendering for humans ([`format_error`]) is **1-based**: `line = row + 1`, `column = max(column, 0) + 1`.

use miette::Diagnostic;
use thiserror::Error;

/// A character-level failure raised by the lexer.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{message} (line {line}, column {col})", line = .row + 1, col = display_column(.column))]
#[diagnostic(code(viper::lex))]
pub struct LexError {
    pub message: String,
    pub row: usize,
    pub column: isize,
}

impl LexError {
    #[must_use]
    pub fn new(message: impl Into<String>, row: usize, column: isize) -> Self {
        Self {
            message: message.into(),
            row,
            column,
        }
    }
}

/// A hard stop raised by the parser.
///
/// Ordinary grammar mismatches are not errors; rules report them as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{message} (line {line}, column {col})", line = .row + 1, col = display_column(.column))]
#[diagnostic(code(viper::parse))]
pub struct ParseError {
    pub message: String,
    pub row: usize,
    pub column: isize,
}

impl ParseError {
    #[must_use]
    pub fn new(message: impl Into<String>, row: usize, column: isize) -> Self {
        Self {
            message: message.into(),
            row,
            column,
        }
    }
}

/// Either front-end failure, for callers that lex and parse in one step.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SyntaxError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}

impl SyntaxError {
    pub fn message(&self) -> &str {
        match self {
            SyntaxError::Lex(e) => &e.message,
            SyntaxError::Parse(e) => &e.message,
        }
    }

    /// 0-based `(row, column)`.
    pub fn position(&self) -> (usize, isize) {
        match self {
            SyntaxError::Lex(e) => (e.row, e.column),
            SyntaxError::Parse(e) => (e.row, e.column),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            SyntaxError::Lex(_) => "lexical error",
            SyntaxError::Parse(_) => "syntax error",
        }
    }
}

/// 1-based column for display; positions before the first character clamp to column 1.
fn display_column(column: &isize) -> usize {
    usize::try_from(*column).unwrap_or(0) + 1
}

/// Render an error with its source line and a caret, in the style:
///
/// ```text
/// lexical error: Encountered unexpected character: '$'
///   --> main.vp:1:5
///   |
/// 1 | x = $
///   |     ^
/// ```
pub fn format_error(file_name: &str, source: &str, error: &SyntaxError) -> String {
    let (row, column) = error.position();
    let line_num = row + 1;
    let col_num = display_column(&column);
    let line_text = line_at(source, row);
    let width = line_num.to_string().len();

    let mut out = String::new();
    out.push_str(&format!("{}: {}\n", error.label(), error.message()));
    out.push_str(&format!("{:>width$}--> {file_name}:{line_num}:{col_num}\n", ""));
    out.push_str(&format!("{:>width$} |\n", ""));
    out.push_str(&format!("{line_num:>width$} | {line_text}\n"));
    out.push_str(&format!("{:>width$} | {}^\n", "", " ".repeat(col_num - 1)));
    out
}

/// Text of the 0-based `row`, treating `\r\n`, `\r` and `\n` as line breaks like the lexer does.
fn line_at(source: &str, row: usize) -> &str {
    let mut current = 0;
    let mut start = 0;
    let mut chars = source.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c != '\n' && c != '\r' {
            continue;
        }
        if current == row {
            return &source[start..i];
        }
        if c == '\r' && chars.peek().is_some_and(|&(_, next)| next == '\n') {
            chars.next();
        }
        current += 1;
        start = chars.peek().map_or(source.len(), |&(next, _)| next);
    }
    if current == row { &source[start..] } else { "" }
}
