//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to resolve token text against the
//! `viper_core::lang` registries.

use crate::lexer::{Token, TokenKind};
use viper_core::lang::keywords::{self, KeywordId};
use viper_core::lang::operators::{self, OperatorId};
use viper_core::lang::punctuation::{self, PunctuationId};

impl TokenKind {
    /// Upper-snake name used in token dumps (`DEC_FLOAT_IMAG`).
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::DecInteger => "DEC_INTEGER",
            TokenKind::DecIntegerImag => "DEC_INTEGER_IMAG",
            TokenKind::DecFloat => "DEC_FLOAT",
            TokenKind::DecFloatImag => "DEC_FLOAT_IMAG",
            TokenKind::BinInteger => "BIN_INTEGER",
            TokenKind::OctInteger => "OCT_INTEGER",
            TokenKind::HexInteger => "HEX_INTEGER",
            TokenKind::String => "STRING",
            TokenKind::ByteString => "BYTE_STRING",
            TokenKind::PrefixedString => "PREFIXED_STRING",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Delimiter => "DELIMITER",
        }
    }

    /// Return `true` for NEWLINE/INDENT/DEDENT.
    pub fn is_layout(self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Indent | TokenKind::Dedent)
    }

    /// Return `true` for every numeric literal kind.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            TokenKind::DecInteger
                | TokenKind::DecIntegerImag
                | TokenKind::DecFloat
                | TokenKind::DecFloatImag
                | TokenKind::BinInteger
                | TokenKind::OctInteger
                | TokenKind::HexInteger
        )
    }

    /// Return `true` for the `im`-suffixed kinds.
    pub fn is_imaginary(self) -> bool {
        matches!(self, TokenKind::DecIntegerImag | TokenKind::DecFloatImag)
    }

    /// Return `true` for `0b`/`0o`/`0x` integers.
    pub fn is_radix_integer(self) -> bool {
        matches!(self, TokenKind::BinInteger | TokenKind::OctInteger | TokenKind::HexInteger)
    }

    /// Return `true` for kinds matched by spelling in the grammar (keywords, operators, delimiters).
    pub fn is_symbolic(self) -> bool {
        matches!(self, TokenKind::Keyword | TokenKind::Operator | TokenKind::Delimiter)
    }

    /// The imaginary counterpart of a plain decimal literal kind.
    pub fn imaginary(self) -> Option<TokenKind> {
        match self {
            TokenKind::DecInteger => Some(TokenKind::DecIntegerImag),
            TokenKind::DecFloat => Some(TokenKind::DecFloatImag),
            _ => None,
        }
    }

    /// The radix prefix a non-decimal integer was written with.
    pub fn radix_prefix(self) -> &'static str {
        match self {
            TokenKind::BinInteger => "0b",
            TokenKind::OctInteger => "0o",
            TokenKind::HexInteger => "0x",
            _ => "",
        }
    }
}

impl Token {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self.kind {
            TokenKind::Keyword => keywords::from_str(&self.data),
            _ => None,
        }
    }

    /// Return the operator id for OPERATOR tokens and multi-character DELIMITER tokens (`->`, `+=`, ...).
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self.kind {
            TokenKind::Operator | TokenKind::Delimiter => operators::from_str(&self.data),
            _ => None,
        }
    }

    /// Return the punctuation id, if this is a single-character delimiter token.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self.kind {
            TokenKind::Delimiter => punctuation::from_str(&self.data),
            _ => None,
        }
    }

    /// Return `true` if this is a keyword/operator/delimiter spelled exactly `text`.
    pub fn is_symbol(&self, text: &str) -> bool {
        self.kind.is_symbolic() && self.data == text
    }
}
