/// Rule combinators and token primitives.
///
/// This chunk implements the two wrappers every grammar rule runs through ([`Parser::backtrackable`] around
/// [`Parser::memoized`], composed by [`Parser::rule`]) and the token-level primitives the rules are built from.
///
/// ## Notes
/// - Primitives never consume a token that does not match.
/// - Every primitive that looks at the next token records it in `furthest` for `Unexpected token` reporting.
impl<'a> Parser<'a> {
    // ========================================================================
    // Cursor
    // ========================================================================

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            cursor: self.cursor,
            row: self.row,
            column: self.column,
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.cursor = snapshot.cursor;
        self.row = snapshot.row;
        self.column = snapshot.column;
    }

    /// Move the cursor to `cursor`, mirroring the position of the token there.
    fn seek(&mut self, cursor: isize) {
        self.cursor = cursor;
        let token = usize::try_from(cursor).ok().and_then(|index| self.tokens.get(index));
        (self.row, self.column) = match token {
            Some(token) => (token.row, token.column),
            None => (0, -1),
        };
    }

    /// Index of the next unconsumed token.
    fn next_index(&self) -> usize {
        usize::try_from(self.cursor + 1).unwrap_or(0)
    }

    fn at_end(&self) -> bool {
        self.next_index() >= self.tokens.len()
    }

    /// The next token, recorded as examined.
    fn look(&mut self) -> Option<&Token> {
        let index = self.next_index();
        self.furthest = self.furthest.max(index);
        self.tokens.get(index)
    }

    fn advance(&mut self) -> TokenIndex {
        let index = self.next_index();
        self.seek(self.cursor + 1);
        index
    }

    // ========================================================================
    // Combinators
    // ========================================================================

    /// Run `parse`; if it does not match, put the cursor back where it was.
    ///
    /// Every rule passes through here, so this is also where the stack is grown on the heap when it runs low.
    fn backtrackable<T>(&mut self, parse: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT, || {
            let snapshot = self.snapshot();
            let result = parse(self);
            if matches!(result, Ok(None)) {
                self.restore(snapshot);
            }
            result
        })
    }

    /// Run `parse` one bracket or block level deeper.
    ///
    /// ## Errors
    /// `Maximum nesting depth exceeded` once more than [`ParseOptions::max_depth`] levels are open.
    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.depth >= self.options.max_depth {
            return Err(self.error("Maximum nesting depth exceeded"));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Run `parse` at most once per cursor position, replaying the cached outcome afterwards.
    fn memoized<T: Clone + 'static>(
        &mut self,
        rule: Rule,
        parse: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        let start = self.cursor;
        let hit = self.cache.get(&start).and_then(|rules| rules.get(&rule)).and_then(|entry| match &entry.result {
            None => Some((None, entry.end)),
            Some(value) => value.downcast_ref::<T>().map(|node| (Some(node.clone()), entry.end)),
        });

        if let Some((node, end)) = hit {
            self.cache_hits += 1;
            tracing::trace!(?rule, start, end, matched = node.is_some(), "memo hit");
            self.seek(end);
            return Ok(node);
        }

        let result = parse(self)?;
        let entry = MemoEntry {
            result: result.clone().map(|node| Rc::new(node) as Rc<dyn Any>),
            end: if result.is_some() { self.cursor } else { start },
        };
        self.cache.entry(start).or_default().insert(rule, entry);
        Ok(result)
    }

    /// A grammar rule: memoized, and backtracking when it does not match.
    fn rule<T: Clone + 'static>(
        &mut self,
        rule: Rule,
        parse: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        self.backtrackable(|p| p.memoized(rule, parse))
    }

    /// An unmemoized optional piece of a rule (`(',' param)`, `('^' unary)`, ...).
    fn attempt<T>(&mut self, parse: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        self.backtrackable(parse)
    }

    // ========================================================================
    // Token primitives
    // ========================================================================

    /// Consume and return the next token, if any.
    pub fn eat_token(&mut self) -> Option<(TokenIndex, &Token)> {
        self.look()?;
        let index = self.advance();
        self.tokens.get(index).map(|token| (index, token))
    }

    /// Consume the next token if it is a keyword, operator or delimiter spelled `text`.
    fn consume_string(&mut self, text: &str) -> Option<TokenIndex> {
        if self.look()?.is_symbol(text) { Some(self.advance()) } else { None }
    }

    fn consume_keyword(&mut self, id: KeywordId) -> Option<TokenIndex> {
        if self.look()?.keyword_id() == Some(id) { Some(self.advance()) } else { None }
    }

    /// Consume the next token if its kind is one of `kinds`, wrapping its index with `node`.
    fn consume<T>(&mut self, kinds: &[TokenKind], node: fn(TokenIndex) -> T) -> Option<T> {
        let kind = self.look()?.kind;
        if kinds.contains(&kind) { Some(node(self.advance())) } else { None }
    }

    fn consume_identifier(&mut self) -> Option<TokenIndex> {
        self.consume(&[TokenKind::Identifier], std::convert::identity)
    }

    /// Consume the first operator of `operators` that matches the upcoming tokens.
    fn consume_operator(&mut self, operators: &[BinaryOperator]) -> Option<Operator> {
        for operator in operators {
            match *operator {
                BinaryOperator::Single(text) => {
                    if let Some(op) = self.consume_string(text) {
                        return Some(Operator::new(op));
                    }
                }
                BinaryOperator::Pair(first, second) => {
                    let snapshot = self.snapshot();
                    if let Some(op) = self.consume_string(first) {
                        if let Some(next) = self.consume_string(second) {
                            return Some(Operator::pair(op, next));
                        }
                        self.restore(snapshot);
                    }
                }
            }
        }
        None
    }

    // ========================================================================
    // Errors
    // ========================================================================

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(message, self.row, self.column)
    }

    /// Hard stop at the furthest token any rule examined.
    fn unexpected_token(&self) -> ParseError {
        match self.tokens.get(self.furthest) {
            Some(token) => {
                let shown = if token.kind.is_layout() { token.kind.name() } else { token.data.as_str() };
                ParseError::new(format!("Unexpected token '{shown}'"), token.row, token.column)
            }
            None => {
                let (row, column) = self.tokens.last().map_or((0, -1), |token| (token.row, token.column));
                ParseError::new("Unexpected end of input", row, column)
            }
        }
    }
}
