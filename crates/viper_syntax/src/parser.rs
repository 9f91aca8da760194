//! Packrat parser for the Viper programming language
//!
//! Converts a token stream into the index-based AST of [`crate::ast`]. Every grammar rule is a method on [`Parser`]
//! that returns `Ok(Some(node))` on a match and `Ok(None)` when the rule does not apply. A rule that does not match
//! leaves the cursor where it was, and every rule result is memoized per cursor position, so alternatives can be
//! tried freely without exponential re-work.
//!
//! ## Notes
//! - `Err(ParseError)` is reserved for hard stops: brackets and blocks nested deeper than
//!   [`ParseOptions::max_depth`], or a program whose tokens cannot all be consumed by the statement grammar.
//! - The grammar contains no left recursion; binary chains are loops over the next-tighter rule.
//!
//! ## Examples
//!
//! ```rust
//! use viper_syntax::parser::Parser;
//!
//! let mut parser = Parser::from_code("-5/-4*+3").unwrap();
//! let expr = parser.parse_mul_expr().unwrap();
//! assert!(expr.is_some());
//! assert_eq!(parser.cursor(), 7);
//! ```

use crate::ast::*;
use crate::diagnostics::{LexError, ParseError};
use crate::lexer::{self, Token, TokenKind};
use std::any::Any;
use std::borrow::Cow;
use std::collections::HashMap;
use std::rc::Rc;
use viper_core::lang::keywords::KeywordId;
use viper_core::lang::operators;

// NOTE: This module is split across multiple files using `include!` so every rule stays a method of the same
// `Parser` type (shared private helpers, one memo cache) without a single large source file.

include!("parser/core.rs");
include!("parser/combinators.rs");
include!("parser/literals.rs");
include!("parser/expr.rs");
include!("parser/lambda.rs");
include!("parser/comprehension.rs");
include!("parser/stmts.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
