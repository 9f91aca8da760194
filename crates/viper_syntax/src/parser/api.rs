/// Parse a token stream into an AST [`Program`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `viper_syntax::lexer`.
///
/// ## Errors
/// Returns the first hard stop as a [`ParseError`].
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    parse_with_options(tokens, ParseOptions::default())
}

/// [`parse`] with explicit [`ParseOptions`].
pub fn parse_with_options(tokens: &[Token], options: ParseOptions) -> Result<Program, ParseError> {
    let mut parser = Parser::with_options(tokens, options);
    let program = parser.parse_program()?;
    tracing::debug!(
        statements = program.statements.len(),
        cache_hits = parser.cache_hits(),
        memoized_positions = parser.cache.len(),
        "parsed program"
    );
    Ok(program)
}
