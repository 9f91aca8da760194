//! String scanning: short (`'…'`, `"…"`) and long (`'''…'''`, `"""…"""`) strings, with optional prefixes.
//!
//! ## Notes
//! - Bodies are passed through literally; a backslash only keeps the next quote (or backslash) from closing the
//!   string. Escape sequences are not decoded here.
//! - Prefixes are `r u f b` and `rb br rf fr` in any letter case. Any prefix containing `b` makes a BYTE_STRING,
//!   every other prefix a PREFIXED_STRING. Token data never includes the prefix or the quotes.

use super::{LexResult, Lexer, TokenKind};
use crate::diagnostics::LexError;
use viper_core::lang::chars;

/// A string prefix recognized in front of a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct StringPrefix {
    len: usize,
    is_byte: bool,
}

fn is_quote(c: Option<char>) -> bool {
    matches!(c, Some('\'' | '"'))
}

impl Lexer {
    /// Recognize a string prefix starting at the consumed character `first`.
    pub(super) fn string_prefix(&self, first: char) -> Option<StringPrefix> {
        let a = first.to_ascii_lowercase();

        if let Some(b) = self.peek_char(1).map(|c| c.to_ascii_lowercase()) {
            if matches!((a, b), ('r', 'b') | ('b', 'r') | ('r', 'f') | ('f', 'r')) && is_quote(self.peek_char(2)) {
                return Some(StringPrefix {
                    len: 2,
                    is_byte: a == 'b' || b == 'b',
                });
            }
        }

        if matches!(a, 'r' | 'u' | 'f' | 'b') && is_quote(self.peek_char(1)) {
            return Some(StringPrefix { len: 1, is_byte: a == 'b' });
        }
        None
    }

    pub(super) fn lex_prefixed_string(&mut self, prefix: StringPrefix) -> LexResult<()> {
        for _ in 1..prefix.len {
            self.eat_char();
        }
        let Some(quote) = self.eat_char() else {
            return Err(self.error("Unexpected end of string. Closing delimiter not found"));
        };

        let kind = if prefix.is_byte { TokenKind::ByteString } else { TokenKind::PrefixedString };
        self.lex_quoted(quote, kind, prefix.is_byte)
    }

    /// Scan a string whose opening `quote` is consumed, deciding between short and long form.
    pub(super) fn lex_quoted(&mut self, quote: char, kind: TokenKind, is_byte: bool) -> LexResult<()> {
        let is_long = matches!(self.upcoming(2), [a, b] if *a == quote && *b == quote);
        if is_long {
            self.eat_char();
            self.eat_char();
        }

        let body = self.lex_string(quote, is_long, is_byte)?;
        self.push(body, kind);
        Ok(())
    }

    /// Consume a string body up to and including its closing delimiter.
    fn lex_string(&mut self, quote: char, is_long: bool, is_byte: bool) -> LexResult<String> {
        let pair = [quote, quote];
        let closing_rest = if is_long { &pair[..] } else { &pair[..0] };
        let mut body = String::new();

        loop {
            let (row, column) = (self.row, self.column);
            let start = self.pos;

            let Some(c) = self.eat_char() else {
                return Err(LexError::new(
                    "Unexpected end of string. Closing delimiter not found",
                    row,
                    column,
                ));
            };

            if is_byte && !c.is_ascii() {
                return Err(LexError::new(
                    format!("Encountered unexpected non-ASCII character: {c:?}"),
                    row,
                    column,
                ));
            }
            if !is_long && chars::is_newline(c) {
                return Err(LexError::new("Encountered unexpected newline character", row, column));
            }

            if c == quote && self.eat_token(closing_rest) {
                return Ok(body);
            }

            if c == '\\' && self.peek_char(1).is_some_and(|next| next == quote || next == '\\') {
                self.eat_char();
            }

            body.extend(&self.chars[start..self.pos]);
        }
    }
}
