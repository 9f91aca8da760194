//! Provide the canonical language vocabulary for the Viper compiler front end.
//!
//! This crate is intentionally small and dependency-free. It holds the reserved words, operator and delimiter
//! spellings, and the character classes that both the lexer and the parser agree on.
//!
//! ## Notes
//!
//! - This is a "vocabulary core" crate: **no IO**, no global state, and no syntax-tree types.
//! - Syntax rules (what may follow what) live in `viper_syntax`; this crate only answers "what is this spelling?"
//!   and "what class is this character?".

pub mod lang;
