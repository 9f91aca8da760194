/// Literal and layout rules.
///
/// Each rule consumes exactly one token of the matching kind and wraps its index in a leaf node.
impl<'a> Parser<'a> {
    pub fn parse_newline(&mut self) -> ParseResult<Newline> {
        self.rule(Rule::Newline, |p| Ok(p.consume(&[TokenKind::Newline], Newline)))
    }

    pub fn parse_indent(&mut self) -> ParseResult<Indent> {
        self.rule(Rule::Indent, |p| Ok(p.consume(&[TokenKind::Indent], Indent)))
    }

    pub fn parse_dedent(&mut self) -> ParseResult<Dedent> {
        self.rule(Rule::Dedent, |p| Ok(p.consume(&[TokenKind::Dedent], Dedent)))
    }

    pub fn parse_identifier(&mut self) -> ParseResult<Expr> {
        self.rule(Rule::Identifier, |p| Ok(p.consume(&[TokenKind::Identifier], Expr::Identifier)))
    }

    /// Decimal or radix integer.
    pub fn parse_integer(&mut self) -> ParseResult<Expr> {
        self.rule(Rule::Integer, |p| {
            Ok(p.consume(
                &[
                    TokenKind::DecInteger,
                    TokenKind::BinInteger,
                    TokenKind::OctInteger,
                    TokenKind::HexInteger,
                ],
                Expr::Integer,
            ))
        })
    }

    pub fn parse_float(&mut self) -> ParseResult<Expr> {
        self.rule(Rule::Float, |p| Ok(p.consume(&[TokenKind::DecFloat], Expr::Float)))
    }

    pub fn parse_imag_integer(&mut self) -> ParseResult<Expr> {
        self.rule(Rule::ImagInteger, |p| Ok(p.consume(&[TokenKind::DecIntegerImag], Expr::ImagInteger)))
    }

    pub fn parse_imag_float(&mut self) -> ParseResult<Expr> {
        self.rule(Rule::ImagFloat, |p| Ok(p.consume(&[TokenKind::DecFloatImag], Expr::ImagFloat)))
    }

    pub fn parse_string(&mut self) -> ParseResult<Expr> {
        self.rule(Rule::String, |p| Ok(p.consume(&[TokenKind::String], Expr::String)))
    }

    pub fn parse_byte_string(&mut self) -> ParseResult<Expr> {
        self.rule(Rule::ByteString, |p| Ok(p.consume(&[TokenKind::ByteString], Expr::ByteString)))
    }

    pub fn parse_prefixed_string(&mut self) -> ParseResult<Expr> {
        self.rule(Rule::PrefixedString, |p| Ok(p.consume(&[TokenKind::PrefixedString], Expr::PrefixedString)))
    }

    /// `True`, `False`, `None` and their lowercase aliases.
    pub fn parse_constant(&mut self) -> ParseResult<Expr> {
        self.rule(Rule::Constant, |p| {
            let constant = [KeywordId::True, KeywordId::False, KeywordId::None]
                .into_iter()
                .find_map(|id| p.consume_keyword(id));
            Ok(constant.map(Expr::Constant))
        })
    }
}
