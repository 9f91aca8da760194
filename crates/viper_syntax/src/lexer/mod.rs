//! Lexer for the Viper programming language
//!
//! Handles tokenization including:
//! - Keywords and identifiers (ASCII-only)
//! - Numeric literals (decimal, radix-prefixed, floats, imaginary via the `im` suffix)
//! - Short, long, byte and prefixed strings
//! - Operators and delimiters, recognized by greedy longest match against the operator registry
//! - Python-style indentation (NEWLINE/INDENT/DEDENT), suspended inside brackets except for Blocks
//! - Coefficient literals (`2x` lexes as `2 * x`)
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `strings` - String and prefixed-string scanning
//! - `numbers` - Numeric literal scanning
//! - `indent` - Indentation frames, Blocks and NEWLINE/INDENT/DEDENT emission
//!
//! ## Notes
//! - Lexing is fail-fast: the first malformed character aborts with a [`LexError`].
//! - Rows and columns are 0-based and count Unicode scalar values. A token is positioned at its last character.

mod indent;
mod numbers;
mod strings;
pub mod tokens;

pub use indent::IndentSpaceKind;
pub use tokens::{Token, TokenKind};

use crate::diagnostics::LexError;
use indent::IndentationFrame;
use viper_core::lang::chars;
use viper_core::lang::operators::{self, SymbolClass};

type LexResult<T> = Result<T, LexError>;

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// Indentation state (simplified):
//
// [top frame] ──'('──► [bracket frame: newlines ignored]
//                            │
//                           ':' + newline ──► [bracket frame + Block: indentation measured again]
//                            │
//                           ')' ──► DEDENTs for the open Block, pop frame
// ============================================================================

/// Lexer for Viper source code.
///
/// A lexer is single-use: construct it with [`Lexer::new`], call [`Lexer::lex`] once, then inspect the recorded
/// indentation style through [`Lexer::indent_factor`] and [`Lexer::indent_space_type`].
pub struct Lexer {
    chars: Vec<char>,
    /// Number of characters consumed; the last consumed character sits at `pos - 1`.
    pos: usize,
    row: usize,
    column: isize,
    top: IndentationFrame,
    brackets: Vec<IndentationFrame>,
    indent_factor: Option<usize>,
    indent_space_type: IndentSpaceKind,
    tokens: Vec<Token>,
}

impl Lexer {
    /// Create a new lexer for the given source code.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            row: 0,
            column: -1,
            top: IndentationFrame::default(),
            brackets: Vec::new(),
            indent_factor: None,
            indent_space_type: IndentSpaceKind::Unknown,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// Returns the token stream on success or the first error encountered. The stream has no end-of-file marker;
    /// it ends with the DEDENTs that close any indentation still open.
    pub fn lex(&mut self) -> Result<Vec<Token>, LexError> {
        while let Some(c) = self.eat_char() {
            self.scan(c)?;
        }
        self.close_open_indentation();
        Ok(std::mem::take(&mut self.tokens))
    }

    /// Width of one indentation level, fixed by the first indent seen.
    pub fn indent_factor(&self) -> Option<usize> {
        self.indent_factor
    }

    /// Whitespace character the indentation uses, fixed by the first indent seen.
    pub fn indent_space_type(&self) -> IndentSpaceKind {
        self.indent_space_type
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    /// Consume the next character. A CR-LF pair is consumed as a single line break.
    fn eat_char(&mut self) -> Option<char> {
        let c = *self.chars.get(self.pos)?;
        self.pos += 1;
        self.column += 1;

        if c == '\r' && self.chars.get(self.pos) == Some(&'\n') {
            self.pos += 1;
        }
        if chars::is_newline(c) {
            self.row += 1;
            self.column = -1;
        }
        Some(c)
    }

    /// Un-consume the last character. Never called across a line break.
    fn vomit_char(&mut self) {
        if self.pos > 0 {
            self.pos -= 1;
            self.column -= 1;
        }
    }

    /// Consume `expected` only if the upcoming characters match it exactly.
    fn eat_token(&mut self, expected: &[char]) -> bool {
        let end = self.pos + expected.len();
        if self.chars.get(self.pos..end) != Some(expected) {
            return false;
        }
        self.pos = end;
        self.column += expected.len() as isize;
        true
    }

    /// Character at `offset` from the cursor: `1` is the next unconsumed character.
    fn peek_char(&self, offset: usize) -> Option<char> {
        (self.pos + offset)
            .checked_sub(1)
            .and_then(|index| self.chars.get(index))
            .copied()
    }

    /// Character before the one just consumed.
    fn previous_char(&self) -> Option<char> {
        self.pos.checked_sub(2).and_then(|index| self.chars.get(index)).copied()
    }

    /// Up to `count` unconsumed characters.
    fn upcoming(&self, count: usize) -> &[char] {
        let start = self.pos.min(self.chars.len());
        let end = (start + count).min(self.chars.len());
        &self.chars[start..end]
    }

    fn error(&self, message: impl Into<String>) -> LexError {
        LexError::new(message, self.row, self.column)
    }

    /// Push a token positioned at the current (last consumed) character.
    fn push(&mut self, data: impl Into<String>, kind: TokenKind) {
        self.tokens.push(Token::new(data, kind, self.row, self.column));
    }

    fn push_layout(&mut self, kind: TokenKind) {
        self.tokens.push(Token::layout(kind, self.row, self.column));
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan(&mut self, c: char) -> LexResult<()> {
        match c {
            '\n' | '\r' => self.lex_newline(),
            '#' => {
                self.skip_comment();
                Ok(())
            }
            c if chars::is_horizontal_space(c) => {
                self.skip_horizontal_spaces();
                Ok(())
            }
            '\\' => self.lex_line_continuation(),
            '\'' | '"' => self.lex_quoted(c, TokenKind::String, false),
            '.' if self.peek_char(1).is_some_and(chars::is_dec_digit) => self.lex_leading_dot_float(),
            '0' => self.lex_zero(),
            c if chars::is_dec_digit(c) => self.lex_decimal(c),
            '!' => {
                if self.peek_char(1) != Some('=') {
                    return Err(self.error("Encountered unexpected character: '!'"));
                }
                self.push_symbol(c, TokenKind::Operator);
                Ok(())
            }
            c if chars::is_single_char_operator(c) => {
                self.push_symbol(c, TokenKind::Operator);
                Ok(())
            }
            c if chars::is_single_char_delimiter(c) => {
                self.lex_delimiter(c);
                Ok(())
            }
            c if chars::is_identifier_start(c) => self.lex_word(c),
            c => Err(self.error(format!("Encountered unexpected character: {c:?}"))),
        }
    }

    fn skip_comment(&mut self) {
        while self.peek_char(1).is_some_and(|c| !chars::is_newline(c)) {
            self.eat_char();
        }
    }

    fn skip_horizontal_spaces(&mut self) {
        while self.peek_char(1).is_some_and(chars::is_horizontal_space) {
            self.eat_char();
        }
    }

    /// A backslash joins the next line; it must be followed directly by a line break.
    fn lex_line_continuation(&mut self) -> LexResult<()> {
        match self.peek_char(1) {
            Some(c) if chars::is_newline(c) => {
                self.eat_char();
                Ok(())
            }
            next => Err(self.error(format!(
                "Unexpected character after line continuation character: {}",
                describe(next)
            ))),
        }
    }

    // ========================================================================
    // Operator and delimiter helpers
    // ========================================================================

    /// Emit the longest registered spelling starting at the consumed character `c`.
    ///
    /// The registry decides the token kind; characters with no registered spelling (`:`, `.`, ...) are emitted
    /// alone as `fallback`.
    fn push_symbol(&mut self, c: char, fallback: TokenKind) {
        let start = self.pos.saturating_sub(1);
        let end = (start + 3).min(self.chars.len());

        match operators::longest_match(&self.chars[start..end]) {
            Some(info) => {
                for _ in 1..info.spelling.chars().count() {
                    self.eat_char();
                }
                let kind = match info.class {
                    SymbolClass::Operator => TokenKind::Operator,
                    SymbolClass::Delimiter => TokenKind::Delimiter,
                };
                self.push(info.spelling, kind);
            }
            None => self.push(c.to_string(), fallback),
        }
    }

    fn lex_delimiter(&mut self, c: char) {
        self.track_bracket(c);
        if c == ':' {
            self.detect_block();
        }
        self.push_symbol(c, TokenKind::Delimiter);
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    /// Scan an identifier or keyword, or a prefixed string when the word is a string prefix followed by a quote.
    ///
    /// An identifier written directly after a number or `)` is a coefficient expression: a `*` operator is
    /// inserted before it (`2x`, `(a)b`), except that `im` turns the preceding decimal literal imaginary.
    fn lex_word(&mut self, first: char) -> LexResult<()> {
        if let Some(prefix) = self.string_prefix(first) {
            return self.lex_prefixed_string(prefix);
        }

        let previous = self.previous_char();
        let (start_row, start_column) = (self.row, self.column);
        let mut word = String::from(first);
        while let Some(c) = self.peek_char(1).filter(|&c| chars::is_identifier_continuation(c)) {
            self.eat_char();
            word.push(c);
        }

        if chars::is_keyword(&word) {
            self.push(word, TokenKind::Keyword);
            return Ok(());
        }

        if previous.is_some_and(|p| chars::is_hex_digit(p) || p == ')') {
            if let Some(last) = self.tokens.last() {
                if last.kind.is_radix_integer() {
                    return Err(self.error(format!(
                        "Encountered invalid coefficient literal: '{}{}{}'",
                        last.kind.radix_prefix(),
                        last.data,
                        word
                    )));
                }

                if word == "im" {
                    if let Some(imaginary) = last.kind.imaginary() {
                        let data = last.data.clone();
                        self.tokens.pop();
                        self.push(data, imaginary);
                        return Ok(());
                    }
                }

                self.tokens
                    .push(Token::new("*", TokenKind::Operator, start_row, start_column - 1));
            }
        }

        self.push(word, TokenKind::Identifier);
        Ok(())
    }
}

fn describe(c: Option<char>) -> String {
    match c {
        Some(c) => format!("{c:?}"),
        None => "end of input".to_string(),
    }
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).lex()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let tokens = Lexer::new(source).lex()?;
    tracing::debug!(token_count = tokens.len(), "lexed source");
    Ok(tokens)
}

// ============================================================================
// TESTS
// ============================================================================
