//! Character classes used by the Viper lexer.
//!
//! Every function here is a pure, total predicate over a single `char` (or, for [`is_keyword`], a complete word).
//! They never fail; they only classify.
//!
//! ## Notes
//! - Identifiers are ASCII-only for now: letters, digits and `_`. Unicode letter categories (Lu, Ll, Lt, Lm, Lo,
//!   Nl) are a planned extension.
//! - [`is_single_char_operator`] and [`is_single_char_delimiter`] are disjoint and seed multi-character
//!   recognition through [`crate::lang::operators::longest_match`].
//!
//! ## Examples
//! ```rust
//! use viper_core::lang::chars;
//!
//! assert!(chars::is_identifier_start('_'));
//! assert!(!chars::is_identifier_start('9'));
//! assert!(chars::is_hex_digit('F'));
//! assert!(chars::is_single_char_operator('√'));
//! ```

use super::keywords;

/// ASCII letter or underscore.
pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Identifier start character or ASCII digit.
pub fn is_identifier_continuation(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}

pub fn is_dec_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_bin_digit(c: char) -> bool {
    matches!(c, '0' | '1')
}

pub fn is_oct_digit(c: char) -> bool {
    matches!(c, '0'..='7')
}

pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Space or tab: the only characters allowed in indentation and between tokens.
pub fn is_horizontal_space(c: char) -> bool {
    matches!(c, ' ' | '\t')
}

/// Line terminator (`\n` or `\r`).
pub fn is_newline(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

/// Horizontal space or line terminator.
pub fn is_space(c: char) -> bool {
    is_horizontal_space(c) || is_newline(c)
}

/// `+` or `-`, as allowed after an exponent marker.
pub fn is_sign(c: char) -> bool {
    matches!(c, '+' | '-')
}

/// Whether `word` is a reserved word.
pub fn is_keyword(word: &str) -> bool {
    keywords::from_str(word).is_some()
}

pub fn is_single_char_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '%' | '&' | '|' | '^' | '~' | '<' | '>' | '²' | '√')
}

pub fn is_single_char_delimiter(c: char) -> bool {
    matches!(c, '(' | ')' | '[' | ']' | '{' | '}' | ',' | ':' | '.' | ';' | '@' | '=')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_classes() {
        for c in ['a', 'Z', '_'] {
            assert!(is_identifier_start(c), "{c:?} should start an identifier");
        }
        for c in ['0', '9', '$', 'é', ' '] {
            assert!(!is_identifier_start(c), "{c:?} should not start an identifier");
        }
        assert!(is_identifier_continuation('7'));
        assert!(!is_identifier_continuation('-'));
    }

    #[test]
    fn test_digit_classes() {
        assert!(is_bin_digit('1') && !is_bin_digit('2'));
        assert!(is_oct_digit('7') && !is_oct_digit('8'));
        assert!(is_dec_digit('9') && !is_dec_digit('a'));
        assert!(is_hex_digit('a') && is_hex_digit('F') && !is_hex_digit('g'));
    }

    #[test]
    fn test_space_classes() {
        assert!(is_horizontal_space('\t'));
        assert!(!is_horizontal_space('\n'));
        assert!(is_space('\r'));
        assert!(!is_space('x'));
    }

    #[test]
    fn test_operator_and_delimiter_sets_are_disjoint() {
        let candidates = "+-*/%&|^~<>²√()[]{},:.;@=!#$?";
        for c in candidates.chars() {
            assert!(
                !(is_single_char_operator(c) && is_single_char_delimiter(c)),
                "{c:?} is in both sets"
            );
        }
    }

    #[test]
    fn test_is_keyword() {
        assert!(is_keyword("typealias"));
        assert!(is_keyword("false"));
        assert!(!is_keyword("print"));
    }
}
