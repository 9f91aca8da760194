//! Token types for the Viper lexer.
//!
//! A token is the exact text the lexer produced (`data`), its [`TokenKind`], and the position of its **last**
//! character. Layout tokens (NEWLINE/INDENT/DEDENT) carry empty data.
//!
//! ## Notes
//! - `data` is normalized: numeric literals lose `_` separators and radix prefixes, strings lose their quotes and
//!   prefix letters, `.5` becomes `0.5`.
//! - `column` is `-1` for a token produced right after a line break (before any character of the new line).
//! - Use `crate::token_helpers` for registry lookups on tokens.

use std::fmt;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Names ==========
    Identifier,
    Keyword,

    // ========== Layout ==========
    Newline,
    Indent,
    Dedent,

    // ========== Numbers ==========
    DecInteger,
    DecIntegerImag,
    DecFloat,
    DecFloatImag,
    BinInteger,
    OctInteger,
    HexInteger,

    // ========== Strings ==========
    String,
    ByteString,
    PrefixedString,

    // ========== Symbols ==========
    Operator,
    Delimiter,
}

/// A token with its normalized text and end position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub data: String,
    pub kind: TokenKind,
    pub row: usize,
    pub column: isize,
}

impl Token {
    pub fn new(data: impl Into<String>, kind: TokenKind, row: usize, column: isize) -> Self {
        Self {
            data: data.into(),
            kind,
            row,
            column,
        }
    }

    /// A NEWLINE/INDENT/DEDENT token (empty data).
    pub fn layout(kind: TokenKind, row: usize, column: isize) -> Self {
        Self::new(String::new(), kind, row, column)
    }
}

/// One-line dump format: `ROW:COL KIND "data"` (data omitted for layout tokens).
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.row, self.column, self.kind.name())?;
        if !self.kind.is_layout() {
            write!(f, " {:?}", self.data)?;
        }
        Ok(())
    }
}
