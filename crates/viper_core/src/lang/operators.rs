//! Operator vocabulary.
//!
//! This module defines every multi-purpose symbol spelling the lexer can produce outside of the single-character
//! delimiters: arithmetic/bitwise/comparison operators and the assignment-like forms (`->`, `+=`, `**=`, ...).
//!
//! ## Notes
//! - Each entry records the token class the lexer emits for it ([`SymbolClass`]): comparison and arithmetic
//!   spellings are `Operator`, assignment-like spellings are `Delimiter`.
//! - [`longest_match`] implements greedy recognition: the longest registered spelling that prefixes the upcoming
//!   characters wins.
//! - Word operators (`and`, `not in`, ...) are keywords; see [`crate::lang::keywords`].
//!
//! ## Examples
//! ```rust
//! use viper_core::lang::operators::{self, OperatorId, SymbolClass};
//!
//! let upcoming: Vec<char> = "<<= 1".chars().collect();
//! let info = operators::longest_match(&upcoming).unwrap();
//! assert_eq!(info.id, OperatorId::ShlEq);
//! assert_eq!(info.class, SymbolClass::Delimiter);
//! ```

/// Token class a spelling is emitted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolClass {
    Operator,
    Delimiter,
}

/// Stable identifier for every operator spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    StarStar,
    SlashSlash,
    Square,
    Root,

    // Bitwise
    Amp,
    Pipe,
    Caret,
    Tilde,
    PipePipe,
    Shl,
    Shr,

    // Comparison
    Lt,
    Gt,
    LtEq,
    GtEq,
    EqEq,
    NotEq,

    // Assignment-like
    Arrow,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    AmpEq,
    PipeEq,
    CaretEq,
    AtEq,
    StarStarEq,
    SlashSlashEq,
    ShlEq,
    ShrEq,
    PipePipeEq,
}

/// Metadata for an operator spelling.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub class: SymbolClass,
    pub description: &'static str,
}

/// Registry of all operator spellings, in [`OperatorId`] declaration order.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    op(OperatorId::Plus, "+", "addition / unary plus"),
    op(OperatorId::Minus, "-", "subtraction / negation"),
    op(OperatorId::Star, "*", "multiplication / tuple rest"),
    op(OperatorId::Slash, "/", "division"),
    op(OperatorId::Percent, "%", "remainder"),
    op(OperatorId::StarStar, "**", "named-tuple rest"),
    op(OperatorId::SlashSlash, "//", "floor division"),
    op(OperatorId::Square, "²", "square suffix"),
    op(OperatorId::Root, "√", "square root prefix"),
    // Bitwise
    op(OperatorId::Amp, "&", "bitwise and"),
    op(OperatorId::Pipe, "|", "bitwise or"),
    op(OperatorId::Caret, "^", "exponentiation"),
    op(OperatorId::Tilde, "~", "bitwise not"),
    op(OperatorId::PipePipe, "||", "bitwise xor"),
    op(OperatorId::Shl, "<<", "left shift"),
    op(OperatorId::Shr, ">>", "right shift"),
    // Comparison
    op(OperatorId::Lt, "<", "less than"),
    op(OperatorId::Gt, ">", "greater than"),
    op(OperatorId::LtEq, "<=", "less than or equal"),
    op(OperatorId::GtEq, ">=", "greater than or equal"),
    op(OperatorId::EqEq, "==", "equality"),
    op(OperatorId::NotEq, "!=", "inequality"),
    // Assignment-like
    delim(OperatorId::Arrow, "->", "return annotation"),
    delim(OperatorId::PlusEq, "+=", "augmented addition"),
    delim(OperatorId::MinusEq, "-=", "augmented subtraction"),
    delim(OperatorId::StarEq, "*=", "augmented multiplication"),
    delim(OperatorId::SlashEq, "/=", "augmented division"),
    delim(OperatorId::PercentEq, "%=", "augmented remainder"),
    delim(OperatorId::AmpEq, "&=", "augmented bitwise and"),
    delim(OperatorId::PipeEq, "|=", "augmented bitwise or"),
    delim(OperatorId::CaretEq, "^=", "augmented exponentiation"),
    delim(OperatorId::AtEq, "@=", "augmented matrix multiplication"),
    delim(OperatorId::StarStarEq, "**=", "augmented power"),
    delim(OperatorId::SlashSlashEq, "//=", "augmented floor division"),
    delim(OperatorId::ShlEq, "<<=", "augmented left shift"),
    delim(OperatorId::ShrEq, ">>=", "augmented right shift"),
    delim(OperatorId::PipePipeEq, "||=", "augmented bitwise xor"),
];

/// Canonical spelling.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Full metadata.
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    &OPERATORS[id as usize]
}

/// Resolve an operator spelling to its identifier.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise (including single-character delimiters such as `(` or `=`).
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

/// Find the longest registered spelling at the start of `upcoming`.
///
/// ## Parameters
/// - `upcoming`: The current character followed by the lookahead characters.
///
/// ## Returns
/// - The [`OperatorInfo`] of the longest matching spelling, or `None` if no spelling matches.
pub fn longest_match(upcoming: &[char]) -> Option<&'static OperatorInfo> {
    OPERATORS
        .iter()
        .filter(|o| {
            let len = o.spelling.chars().count();
            len <= upcoming.len() && o.spelling.chars().zip(upcoming).all(|(a, &b)| a == b)
        })
        .max_by_key(|o| o.spelling.chars().count())
}

/// Whether `spelling` assigns: plain `=` or any augmented assignment (`+=`, `**=`, ...).
///
/// ## Notes
/// - `->` is assignment-like for tokenization but is not an assignment.
pub fn is_assignment(spelling: &str) -> bool {
    if spelling == "=" {
        return true;
    }
    from_str(spelling).is_some_and(|id| {
        let info = info_for(id);
        info.class == SymbolClass::Delimiter && id != OperatorId::Arrow
    })
}

// --- helpers -----------------------------------------------------------------

const fn op(id: OperatorId, spelling: &'static str, description: &'static str) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        class: SymbolClass::Operator,
        description,
    }
}

const fn delim(id: OperatorId, spelling: &'static str, description: &'static str) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        class: SymbolClass::Delimiter,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_longest_match_prefers_three_char_forms() {
        assert_eq!(longest_match(&chars("//=x")).map(|o| o.id), Some(OperatorId::SlashSlashEq));
        assert_eq!(longest_match(&chars("//x")).map(|o| o.id), Some(OperatorId::SlashSlash));
        assert_eq!(longest_match(&chars("/")).map(|o| o.id), Some(OperatorId::Slash));
    }

    #[test]
    fn test_longest_match_ignores_delimiters() {
        assert!(longest_match(&chars("(")).is_none());
        assert!(longest_match(&chars("=")).is_none());
        assert_eq!(longest_match(&chars("==")).map(|o| o.id), Some(OperatorId::EqEq));
        assert_eq!(longest_match(&chars("@=")).map(|o| o.id), Some(OperatorId::AtEq));
    }

    #[test]
    fn test_is_assignment() {
        assert!(is_assignment("="));
        assert!(is_assignment("+="));
        assert!(is_assignment("||="));
        assert!(!is_assignment("->"));
        assert!(!is_assignment("=="));
        assert!(!is_assignment("<="));
    }
}
