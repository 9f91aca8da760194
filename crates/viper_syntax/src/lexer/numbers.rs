//! Numeric literal scanning.
//!
//! Token data is normalized: `_` separators and radix prefixes are dropped, a leading `.` gains a `0`, and a
//! fraction with no digits becomes `.0` (`1234.` → `1234.0`).

use super::{LexResult, Lexer, TokenKind};
use std::fmt;
use viper_core::lang::chars;

/// Literal family named in digit-run errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberType {
    Integer,
    FloatingPoint,
}

impl fmt::Display for NumberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberType::Integer => write!(f, "integer"),
            NumberType::FloatingPoint => write!(f, "floating point"),
        }
    }
}

fn is_exponent_marker(c: char) -> bool {
    matches!(c, 'e' | 'E')
}

fn starts_exponent_digits(c: char) -> bool {
    chars::is_dec_digit(c) || chars::is_sign(c)
}

impl Lexer {
    /// Consume a run of digits and single `_` separators, returning the digits.
    ///
    /// A trailing `_` is left unconsumed so it can start the identifier of a coefficient expression.
    fn lex_digit_part(
        &mut self,
        is_digit: fn(char) -> bool,
        number_type: NumberType,
        required: bool,
    ) -> LexResult<String> {
        let mut digits = String::new();
        let mut previous = None;

        while let Some(c) = self.peek_char(1).filter(|&c| c == '_' || is_digit(c)) {
            self.eat_char();
            if c == '_' && previous == Some('_') {
                return Err(self.error(format!("Unexpected consecutive underscores in {number_type} literal")));
            }
            if c != '_' {
                digits.push(c);
            }
            previous = Some(c);
        }

        if previous == Some('_') {
            self.vomit_char();
        }

        if required && digits.is_empty() {
            return Err(self.error(format!("Unexpected end of {number_type} literal")));
        }
        Ok(digits)
    }

    fn exponent_follows(&self) -> bool {
        self.peek_char(1).is_some_and(is_exponent_marker) && self.peek_char(2).is_some_and(starts_exponent_digits)
    }

    /// `e [+-]? digits`
    fn lex_exponent_part(&mut self) -> LexResult<String> {
        let mut part = String::new();
        if let Some(marker) = self.eat_char() {
            part.push(marker);
        }

        if let Some(sign) = self.peek_char(1).filter(|&c| chars::is_sign(c)) {
            if !self.peek_char(2).is_some_and(chars::is_dec_digit) {
                return Err(self.error("Unexpected character in floating point literal"));
            }
            self.eat_char();
            part.push(sign);
        }

        part.push_str(&self.lex_digit_part(chars::is_dec_digit, NumberType::FloatingPoint, true)?);
        Ok(part)
    }

    /// `'.' digits? exponent?`
    fn lex_fraction_exponent_part(&mut self) -> LexResult<String> {
        self.eat_char();
        let mut part = String::from(".");

        if self.peek_char(1).is_some_and(chars::is_dec_digit) {
            part.push_str(&self.lex_digit_part(chars::is_dec_digit, NumberType::FloatingPoint, true)?);
        } else {
            part.push('0');
        }

        if self.exponent_follows() {
            part.push_str(&self.lex_exponent_part()?);
        }
        Ok(part)
    }

    /// A float written without its integer part (`.5`), after the `.` is consumed.
    pub(super) fn lex_leading_dot_float(&mut self) -> LexResult<()> {
        let mut literal = String::from("0.");
        literal.push_str(&self.lex_digit_part(chars::is_dec_digit, NumberType::FloatingPoint, true)?);

        if self.exponent_follows() {
            literal.push_str(&self.lex_exponent_part()?);
        }
        self.push(literal, TokenKind::DecFloat);
        Ok(())
    }

    /// A literal starting with `0`: radix-prefixed integers (`0x`, `0b`, `0o`) or a decimal number.
    pub(super) fn lex_zero(&mut self) -> LexResult<()> {
        let radix: Option<(fn(char) -> bool, TokenKind)> = match self.peek_char(1) {
            Some('x') => Some((chars::is_hex_digit, TokenKind::HexInteger)),
            Some('b') => Some((chars::is_bin_digit, TokenKind::BinInteger)),
            Some('o') => Some((chars::is_oct_digit, TokenKind::OctInteger)),
            _ => None,
        };

        match radix {
            Some((is_digit, kind)) => {
                self.eat_char();
                let digits = self.lex_digit_part(is_digit, NumberType::Integer, true)?;
                self.push(digits, kind);
                Ok(())
            }
            None => self.lex_decimal('0'),
        }
    }

    /// A decimal integer or float whose first digit `first` is already consumed.
    pub(super) fn lex_decimal(&mut self, first: char) -> LexResult<()> {
        let mut literal = String::from(first);
        literal.push_str(&self.lex_digit_part(chars::is_dec_digit, NumberType::Integer, false)?);

        let (p0, p1, p2) = (self.peek_char(1), self.peek_char(2), self.peek_char(3));
        let is_fraction = p0 == Some('.')
            && (p1.is_none_or(|c| chars::is_dec_digit(c) || chars::is_space(c))
                || (p1.is_some_and(is_exponent_marker) && p2.is_some_and(starts_exponent_digits)));

        if is_fraction {
            literal.push_str(&self.lex_fraction_exponent_part()?);
            self.push(literal, TokenKind::DecFloat);
        } else if p0.is_some_and(is_exponent_marker) && p1.is_some_and(starts_exponent_digits) {
            literal.push_str(&self.lex_exponent_part()?);
            self.push(literal, TokenKind::DecFloat);
        } else {
            self.push(literal, TokenKind::DecInteger);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{Token, TokenKind, lex};

    fn single(source: &str) -> Token {
        let tokens = lex(source).unwrap();
        assert_eq!(tokens.len(), 1, "expected one token for {source:?}, got {tokens:?}");
        tokens.into_iter().next().unwrap()
    }

    fn error_of(source: &str) -> (String, usize, isize) {
        let err = lex(source).unwrap_err();
        (err.message, err.row, err.column)
    }

    #[test]
    fn test_dec_integers() {
        let cases = [
            ("0123456789", "0123456789", 9),
            ("123456789", "123456789", 8),
            ("01_33456_789", "0133456789", 11),
            ("5_37450_99", "53745099", 9),
            ("1", "1", 0),
            ("0", "0", 0),
        ];
        for (source, data, column) in cases {
            assert_eq!(single(source), Token::new(data, TokenKind::DecInteger, 0, column), "lexing {source:?}");
        }
    }

    #[test]
    fn test_radix_integers() {
        assert_eq!(
            single("0x1234567890aAbBcCdDeEfF"),
            Token::new("1234567890aAbBcCdDeEfF", TokenKind::HexInteger, 0, 23)
        );
        assert_eq!(
            single("0x_23A_b4_567dD_90aBcCeEfF"),
            Token::new("23Ab4567dD90aBcCeEfF", TokenKind::HexInteger, 0, 25)
        );
        assert_eq!(single("0o01234567"), Token::new("01234567", TokenKind::OctInteger, 0, 9));
        assert_eq!(single("0o12_03_4"), Token::new("12034", TokenKind::OctInteger, 0, 8));
        assert_eq!(single("0b1_0"), Token::new("10", TokenKind::BinInteger, 0, 4));
    }

    #[test]
    fn test_incomplete_radix_integer_fails() {
        for source in ["0o", "0btt", "0x"] {
            assert_eq!(
                error_of(source),
                ("Unexpected end of integer literal".to_string(), 0, 1),
                "lexing {source:?}"
            );
        }
    }

    #[test]
    fn test_consecutive_underscores_fail() {
        for source in ["0o1_234__5", "0b1_111__0", "0x1_234__5"] {
            assert_eq!(
                error_of(source),
                ("Unexpected consecutive underscores in integer literal".to_string(), 0, 8),
                "lexing {source:?}"
            );
        }
        assert_eq!(
            error_of("1_234__5"),
            ("Unexpected consecutive underscores in integer literal".to_string(), 0, 6)
        );

        let float_cases = [("1_234.0__5", 8), (".111__0", 5), ("1_23.e-4__5", 9), ("1_23.100e-4__5", 12)];
        for (source, column) in float_cases {
            assert_eq!(
                error_of(source),
                ("Unexpected consecutive underscores in floating point literal".to_string(), 0, column),
                "lexing {source:?}"
            );
        }
    }

    #[test]
    fn test_dec_floats() {
        let cases = [
            ("0123.456789", "0123.456789", 10),
            (".00", "0.00", 2),
            (".12_34", "0.1234", 5),
            (".12_34e-100", "0.1234e-100", 10),
            ("1_234e00", "1234e00", 7),
            ("1234.", "1234.0", 4),
            ("1234.e-56789", "1234.0e-56789", 11),
            ("12_34.5_67e+8_900", "1234.567e+8900", 16),
            ("00.1_23456_789", "00.123456789", 13),
            ("2E5", "2E5", 2),
        ];
        for (source, data, column) in cases {
            assert_eq!(single(source), Token::new(data, TokenKind::DecFloat, 0, column), "lexing {source:?}");
        }
    }

    #[test]
    fn test_code_that_looks_like_a_float() {
        assert_eq!(
            lex("12_34.e_00").unwrap(),
            vec![
                Token::new("1234", TokenKind::DecInteger, 0, 4),
                Token::new(".", TokenKind::Delimiter, 0, 5),
                Token::new("e_00", TokenKind::Identifier, 0, 9),
            ]
        );
        assert_eq!(
            lex("12_34.f100").unwrap(),
            vec![
                Token::new("1234", TokenKind::DecInteger, 0, 4),
                Token::new(".", TokenKind::Delimiter, 0, 5),
                Token::new("f100", TokenKind::Identifier, 0, 9),
            ]
        );
    }

    #[test]
    fn test_exponent_sign_without_digits_fails() {
        assert_eq!(
            error_of("1.5e+x"),
            ("Unexpected character in floating point literal".to_string(), 0, 3)
        );
    }
}
