//! Punctuation vocabulary.
//!
//! This module defines the single-character delimiters: brackets, separators, the access dot, and the `=` / `@`
//! markers. Multi-character forms that start with a delimiter (`==`, `@=`) live in [`crate::lang::operators`].
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - This module is vocabulary only (spellings + metadata). It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use viper_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_char('('), Some(PunctuationId::LParen));
//! assert_eq!(punctuation::closing_for('['), Some(']'));
//! ```

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Opening brackets.
    Open,
    /// Closing brackets.
    Close,
    /// Separators like `,`, `:` and `;`.
    Separator,
    /// Access marker `.`.
    Access,
    /// Misc markers like `@` and `=`.
    Marker,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Colon,
    Dot,
    Semicolon,
    At,
    Eq,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: char,
    pub category: PunctuationCategory,
}

/// Registry of all punctuation tokens, in [`PunctuationId`] declaration order.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::LParen, '(', PunctuationCategory::Open),
    info(PunctuationId::RParen, ')', PunctuationCategory::Close),
    info(PunctuationId::LBracket, '[', PunctuationCategory::Open),
    info(PunctuationId::RBracket, ']', PunctuationCategory::Close),
    info(PunctuationId::LBrace, '{', PunctuationCategory::Open),
    info(PunctuationId::RBrace, '}', PunctuationCategory::Close),
    info(PunctuationId::Comma, ',', PunctuationCategory::Separator),
    info(PunctuationId::Colon, ':', PunctuationCategory::Separator),
    info(PunctuationId::Dot, '.', PunctuationCategory::Access),
    info(PunctuationId::Semicolon, ';', PunctuationCategory::Separator),
    info(PunctuationId::At, '@', PunctuationCategory::Marker),
    info(PunctuationId::Eq, '=', PunctuationCategory::Marker),
];

/// Canonical character.
pub fn as_char(id: PunctuationId) -> char {
    info_for(id).canonical
}

/// Full metadata.
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    &PUNCTUATION[id as usize]
}

/// Resolve a single character to its punctuation identifier.
pub fn from_char(c: char) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == c).map(|p| p.id)
}

/// Resolve a spelling to its punctuation identifier.
///
/// ## Returns
/// - `Some(PunctuationId)` only for one-character spellings in [`PUNCTUATION`].
pub fn from_str(s: &str) -> Option<PunctuationId> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => from_char(c),
        _ => None,
    }
}

/// Closing bracket matching an opening bracket.
///
/// ## Returns
/// - `Some(')')` for `'('`, `Some(']')` for `'['`, `Some('}')` for `'{'`; `None` for anything else.
pub fn closing_for(open: char) -> Option<char> {
    let close = match from_char(open)? {
        PunctuationId::LParen => PunctuationId::RParen,
        PunctuationId::LBracket => PunctuationId::RBracket,
        PunctuationId::LBrace => PunctuationId::RBrace,
        _ => return None,
    };
    Some(as_char(close))
}

/// Whether `c` opens a bracket nesting level.
pub fn is_open_bracket(c: char) -> bool {
    from_char(c).is_some_and(|id| info_for(id).category == PunctuationCategory::Open)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: PunctuationId, canonical: char, category: PunctuationCategory) -> PunctuationInfo {
    PunctuationInfo { id, canonical, category }
}
