//! Syntax front end for the Viper language: lexer, packrat parser, AST, diagnostics.
//!
//! The lexer turns UTF-8 source into a flat token sequence (with Python-style INDENT/DEDENT layout tokens), and the
//! parser builds an index-based AST over that sequence.
//!
//! ## Notes
//! - This crate is "syntax-only": it does not resolve names or check types.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `viper_core::lang` registries.
//! - AST nodes store token indices, not token copies; keep the token buffer around to inspect them.
//!
//! ## Examples
//! ```rust
//! use viper_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("x = 2y + 1\n").unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.statements.len(), 1);
//! ```
//!
//! ## See also
//! - `viper_core::lang` for the keyword/operator/punctuation registries and character classes.

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
