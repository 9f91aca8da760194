//! Define the reserved keyword vocabulary for the Viper language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings, aliases, and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**. `true`/`false` are accepted as aliases of `True`/`False`.
//! - [`KEYWORDS`] is ordered exactly like [`KeywordId`], so [`info_for`] is a direct index.
//! - Some reserved words are also "word operators" (`and`, `or`, `not`, `in`, `is`); the parser matches them by
//!   spelling inside its precedence chain.
//!
//! ## Examples
//! ```rust
//! use viper_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("where"), Some(KeywordId::Where));
//! assert_eq!(keywords::from_str("true"), Some(KeywordId::True));
//! assert_eq!(keywords::from_str("While"), None);
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Literals
    False,
    None,
    True,

    // Word operators
    And,
    Or,
    Not,
    In,
    Is,

    // Control flow / statements
    If,
    Elif,
    Else,
    While,
    For,
    Break,
    Continue,
    Return,
    Yield,
    Pass,
    Match,
    Where,
    Del,
    Global,
    Nonlocal,
    With,

    // Exceptions
    Try,
    Except,
    Finally,
    Raise,
    Assert,

    // Definitions / declarations
    Def,
    Lambda,
    Class,
    Async,
    Await,
    Enum,
    Interface,
    Macro,
    Typealias,

    // Imports
    Import,
    From,
    As,

    // Bindings
    Const,
    Let,
    Var,
    Val,
    Ref,
    Ptr,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Literal,
    Operator,
    ControlFlow,
    Exception,
    Definition,
    Import,
    Binding,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub category: KeywordCategory,
}

/// Registry of all keywords, in [`KeywordId`] declaration order.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Literals
    info(KeywordId::False, "False", &["false"], KeywordCategory::Literal),
    info(KeywordId::None, "None", &[], KeywordCategory::Literal),
    info(KeywordId::True, "True", &["true"], KeywordCategory::Literal),
    // Word operators
    info(KeywordId::And, "and", &[], KeywordCategory::Operator),
    info(KeywordId::Or, "or", &[], KeywordCategory::Operator),
    info(KeywordId::Not, "not", &[], KeywordCategory::Operator),
    info(KeywordId::In, "in", &[], KeywordCategory::Operator),
    info(KeywordId::Is, "is", &[], KeywordCategory::Operator),
    // Control flow / statements
    info(KeywordId::If, "if", &[], KeywordCategory::ControlFlow),
    info(KeywordId::Elif, "elif", &[], KeywordCategory::ControlFlow),
    info(KeywordId::Else, "else", &[], KeywordCategory::ControlFlow),
    info(KeywordId::While, "while", &[], KeywordCategory::ControlFlow),
    info(KeywordId::For, "for", &[], KeywordCategory::ControlFlow),
    info(KeywordId::Break, "break", &[], KeywordCategory::ControlFlow),
    info(KeywordId::Continue, "continue", &[], KeywordCategory::ControlFlow),
    info(KeywordId::Return, "return", &[], KeywordCategory::ControlFlow),
    info(KeywordId::Yield, "yield", &[], KeywordCategory::ControlFlow),
    info(KeywordId::Pass, "pass", &[], KeywordCategory::ControlFlow),
    info(KeywordId::Match, "match", &[], KeywordCategory::ControlFlow),
    info(KeywordId::Where, "where", &[], KeywordCategory::ControlFlow),
    info(KeywordId::Del, "del", &[], KeywordCategory::ControlFlow),
    info(KeywordId::Global, "global", &[], KeywordCategory::ControlFlow),
    info(KeywordId::Nonlocal, "nonlocal", &[], KeywordCategory::ControlFlow),
    info(KeywordId::With, "with", &[], KeywordCategory::ControlFlow),
    // Exceptions
    info(KeywordId::Try, "try", &[], KeywordCategory::Exception),
    info(KeywordId::Except, "except", &[], KeywordCategory::Exception),
    info(KeywordId::Finally, "finally", &[], KeywordCategory::Exception),
    info(KeywordId::Raise, "raise", &[], KeywordCategory::Exception),
    info(KeywordId::Assert, "assert", &[], KeywordCategory::Exception),
    // Definitions / declarations
    info(KeywordId::Def, "def", &[], KeywordCategory::Definition),
    info(KeywordId::Lambda, "lambda", &[], KeywordCategory::Definition),
    info(KeywordId::Class, "class", &[], KeywordCategory::Definition),
    info(KeywordId::Async, "async", &[], KeywordCategory::Definition),
    info(KeywordId::Await, "await", &[], KeywordCategory::Definition),
    info(KeywordId::Enum, "enum", &[], KeywordCategory::Definition),
    info(KeywordId::Interface, "interface", &[], KeywordCategory::Definition),
    info(KeywordId::Macro, "macro", &[], KeywordCategory::Definition),
    info(KeywordId::Typealias, "typealias", &[], KeywordCategory::Definition),
    // Imports
    info(KeywordId::Import, "import", &[], KeywordCategory::Import),
    info(KeywordId::From, "from", &[], KeywordCategory::Import),
    info(KeywordId::As, "as", &[], KeywordCategory::Import),
    // Bindings
    info(KeywordId::Const, "const", &[], KeywordCategory::Binding),
    info(KeywordId::Let, "let", &[], KeywordCategory::Binding),
    info(KeywordId::Var, "var", &[], KeywordCategory::Binding),
    info(KeywordId::Val, "val", &[], KeywordCategory::Binding),
    info(KeywordId::Ref, "ref", &[], KeywordCategory::Binding),
    info(KeywordId::Ptr, "ptr", &[], KeywordCategory::Binding),
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical spelling for `id`.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Returns
/// - The associated [`KeywordInfo`] from [`KEYWORDS`].
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    &KEYWORDS[id as usize]
}

/// Lookup by spelling (canonical or alias).
///
/// ## Parameters
/// - `s`: Candidate keyword spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS
        .iter()
        .find(|k| k.canonical == s || k.aliases.contains(&s))
        .map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    category: KeywordCategory,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        aliases,
        category,
    }
}
