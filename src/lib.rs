#![forbid(unsafe_code)]
//! Viper Programming Language Front End
//!
//! This crate is the front door of the Viper front end: it re-exports the lexer, parser, AST and diagnostics from
//! `viper_syntax`, the vocabulary registries from `viper_core`, and hosts the `viper` command-line tool.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//! ```rust
//! let (tokens, program) = viper::parse_source("def f(x): return x²\n").unwrap();
//! assert_eq!(program.statements.len(), 1);
//! assert!(!tokens.is_empty());
//! ```

pub mod cli;
pub mod source;

pub use viper_core::lang;
pub use viper_syntax::ast;
pub use viper_syntax::diagnostics;
pub use viper_syntax::lexer;
pub use viper_syntax::parser;
pub use viper_syntax::token_helpers;

use viper_syntax::ast::Program;
use viper_syntax::diagnostics::SyntaxError;
use viper_syntax::lexer::Token;
use viper_syntax::parser::ParseOptions;

/// Lex and parse `source` with default [`ParseOptions`].
///
/// The token buffer is returned alongside the AST because AST nodes refer to tokens by index.
///
/// ## Errors
/// Returns the lexer's or the parser's first failure.
pub fn parse_source(source: &str) -> Result<(Vec<Token>, Program), SyntaxError> {
    parse_source_with_options(source, ParseOptions::default())
}

/// [`parse_source`] with explicit [`ParseOptions`].
pub fn parse_source_with_options(source: &str, options: ParseOptions) -> Result<(Vec<Token>, Program), SyntaxError> {
    let tokens = lexer::lex(source)?;
    let program = parser::parse_with_options(&tokens, options)?;
    Ok((tokens, program))
}
