/// Comprehension parsing methods.
///
/// A comprehension is an element expression followed by one or more clauses. `for` clauses open a new loop level;
/// `where` clauses filter, and attach to the closest `for` before them:
///
/// ```text
/// [x * y for x in xs where x > 0 for y in ys where y != x]
/// ```
impl<'a> Parser<'a> {
    /// `'for' identifier (',' identifier)* 'in' indentable_expr`
    pub fn parse_sync_comprehension_for(&mut self) -> ParseResult<ComprehensionFor> {
        self.rule(Rule::SyncComprehensionFor, |p| {
            if p.consume_keyword(KeywordId::For).is_none() {
                return Ok(None);
            }
            let Some(targets) = p.parse_names(",")? else {
                return Ok(None);
            };
            if p.consume_keyword(KeywordId::In).is_none() {
                return Ok(None);
            }
            Ok(p.parse_indentable_expr()?.map(|in_expr| ComprehensionFor {
                targets,
                in_expr: Box::new(in_expr),
                where_exprs: Vec::new(),
                is_async: false,
            }))
        })
    }

    /// `'async'? sync_comprehension_for`
    pub fn parse_comprehension_for(&mut self) -> ParseResult<ComprehensionFor> {
        self.rule(Rule::ComprehensionFor, |p| {
            let is_async = p.consume_keyword(KeywordId::Async).is_some();
            Ok(p.parse_sync_comprehension_for()?.map(|clause| ComprehensionFor { is_async, ..clause }))
        })
    }

    /// `'where' indentable_expr`
    pub fn parse_comprehension_where(&mut self) -> ParseResult<Expr> {
        self.rule(Rule::ComprehensionWhere, |p| {
            if p.consume_keyword(KeywordId::Where).is_none() {
                return Ok(None);
            }
            p.parse_indentable_expr()
        })
    }

    pub fn parse_comprehension_iter(&mut self) -> ParseResult<ComprehensionIter> {
        self.rule(Rule::ComprehensionIter, |p| {
            if let Some(clause) = p.parse_comprehension_for()? {
                return Ok(Some(ComprehensionIter::For(clause)));
            }
            Ok(p.parse_comprehension_where()?.map(ComprehensionIter::Where))
        })
    }

    /// `rest_indentable_expr comprehension_for comprehension_iter* | rest_indentable_exprs`
    pub fn parse_indentable_exprs_or_comprehension(&mut self) -> ParseResult<ExprsOrComprehension> {
        self.rule(Rule::IndentableExprsOrComprehension, |p| {
            let comprehension = p.attempt(|p| {
                let Some(expr) = p.parse_rest_indentable_expr()? else {
                    return Ok(None);
                };
                let Some(first) = p.parse_comprehension_for()? else {
                    return Ok(None);
                };

                let mut fors = vec![first];
                while let Some(clause) = p.parse_comprehension_iter()? {
                    match clause {
                        ComprehensionIter::For(clause) => fors.push(clause),
                        ComprehensionIter::Where(filter) => {
                            if let Some(last) = fors.last_mut() {
                                last.where_exprs.push(filter);
                            }
                        }
                    }
                }
                Ok(Some(ExprsOrComprehension::Comprehension {
                    expr: Box::new(expr),
                    fors,
                }))
            })?;
            if comprehension.is_some() {
                return Ok(comprehension);
            }

            Ok(p.parse_rest_indentable_exprs()?.map(ExprsOrComprehension::Exprs))
        })
    }
}
