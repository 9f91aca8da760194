//! Viper language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved keywords, operators, punctuation, and the
//! character classes the lexer dispatches on.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings/metadata via registry
//! tables instead of comparing raw strings all over the front end.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and token classes for shared use.
//!
//! ## Examples
//! ```rust
//! use viper_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("lambda"), Some(KeywordId::Lambda));
//! assert_eq!(keywords::as_str(KeywordId::Lambda), "lambda");
//! ```

pub mod chars;
pub mod keywords;
pub mod operators;
pub mod punctuation;
