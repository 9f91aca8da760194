/// Statement parsing methods.
///
/// This chunk implements the program rule, simple and compound statements, and blocks. A block is either an
/// indented suite (`':' NEWLINE* INDENT statement+ DEDENT`) or simple statements on the same line as the `:`.
///
/// ## Notes
/// - A simple statement must be followed by a separator (NEWLINE or `;`), a DEDENT, or the end of input. A DEDENT
///   just consumed (the end of a lambda block) also ends the statement.
/// - `elif`/`else`/`except`/`finally` may follow a NEWLINE, which is how they appear after a one-line block.
impl<'a> Parser<'a> {
    // ========================================================================
    // Program
    // ========================================================================

    /// Parse the whole token stream.
    ///
    /// ## Errors
    /// Returns `Unexpected token '…'` positioned at the furthest token examined when some statement cannot be
    /// parsed, or a nesting-depth error.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();
        self.skip_separators();
        while !self.at_end() {
            match self.parse_statement()? {
                Some(statement) => statements.push(statement),
                None => return Err(self.unexpected_token()),
            }
            self.skip_separators();
        }
        Ok(Program { statements })
    }

    /// `compound_statement | simple_statement`
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        self.rule(Rule::Statement, |p| {
            if let Some(statement) = p.parse_compound_statement()? {
                return Ok(Some(statement));
            }
            let Some(statement) = p.parse_simple_statement()? else {
                return Ok(None);
            };
            Ok(p.at_statement_end().then_some(statement))
        })
    }

    fn skip_separators(&mut self) {
        loop {
            if self.at_empty_indent() {
                self.advance();
                self.advance();
            } else if self.consume(&[TokenKind::Newline], std::convert::identity).is_none()
                && self.consume_string(";").is_none()
            {
                break;
            }
        }
    }

    /// `INDENT DEDENT`: a deeper line with nothing on it, as trailing spaces at the end of the input produce.
    fn at_empty_indent(&self) -> bool {
        let index = self.next_index();
        let kind = |offset: usize| self.tokens.get(index + offset).map(|token| token.kind);
        kind(0) == Some(TokenKind::Indent) && kind(1) == Some(TokenKind::Dedent)
    }

    fn at_statement_end(&mut self) -> bool {
        let after_dedent = usize::try_from(self.cursor)
            .ok()
            .and_then(|index| self.tokens.get(index))
            .is_some_and(|token| token.kind == TokenKind::Dedent);
        if after_dedent || self.at_empty_indent() {
            return true;
        }
        match self.look() {
            None => true,
            Some(token) => matches!(token.kind, TokenKind::Newline | TokenKind::Dedent) || token.is_symbol(";"),
        }
    }

    // ========================================================================
    // Simple statements
    // ========================================================================

    pub fn parse_simple_statement(&mut self) -> ParseResult<Statement> {
        self.rule(Rule::SimpleStatement, |p| {
            let keyword = p.look().and_then(Token::keyword_id);
            let statement = match keyword {
                Some(KeywordId::Pass) => Statement::Pass(p.advance()),
                Some(KeywordId::Break) => Statement::Break(p.advance()),
                Some(KeywordId::Continue) => Statement::Continue(p.advance()),
                Some(KeywordId::Return) => {
                    p.advance();
                    Statement::Return(p.parse_indentable_exprs()?.map(ExprList::into_expr))
                }
                Some(KeywordId::Raise) => {
                    p.advance();
                    Statement::Raise(p.parse_test()?)
                }
                Some(KeywordId::Yield) => {
                    p.advance();
                    Statement::Yield(p.parse_yield_argument()?)
                }
                Some(KeywordId::Assert) => return p.parse_assert(),
                Some(KeywordId::Let | KeywordId::Var | KeywordId::Const | KeywordId::Val) => return p.parse_binding(),
                Some(KeywordId::Import) => return p.parse_import(),
                Some(KeywordId::From) => return p.parse_from_import(),
                _ => return p.parse_expr_statement(),
            };
            Ok(Some(statement))
        })
    }

    /// `'from' indentable_expr | indentable_exprs`
    pub fn parse_yield_argument(&mut self) -> ParseResult<YieldArgument> {
        self.rule(Rule::YieldArgument, |p| {
            if p.consume_keyword(KeywordId::From).is_some() {
                return Ok(p.parse_indentable_expr()?.map(YieldArgument::From));
            }
            Ok(p.parse_indentable_exprs()?.map(|list| YieldArgument::Value(list.into_expr())))
        })
    }

    /// `'assert' test (',' test)?`
    fn parse_assert(&mut self) -> ParseResult<Statement> {
        if self.consume_keyword(KeywordId::Assert).is_none() {
            return Ok(None);
        }
        let Some(test) = self.parse_test()? else {
            return Ok(None);
        };
        let message = self.attempt(|p| {
            if p.consume_string(",").is_none() {
                return Ok(None);
            }
            p.parse_test()
        })?;
        Ok(Some(Statement::Assert { test, message }))
    }

    /// `('let' | 'var' | 'const' | 'val') identifier ('=' indentable_expr)?`
    fn parse_binding(&mut self) -> ParseResult<Statement> {
        let keyword = self.advance();
        let Some(name) = self.consume_identifier() else {
            return Ok(None);
        };
        let value = self.attempt(|p| {
            if p.consume_string("=").is_none() {
                return Ok(None);
            }
            p.parse_indentable_expr()
        })?;
        Ok(Some(Statement::Binding(BindingStmt { keyword, name, value })))
    }

    /// `'import' dotted_name ('as' identifier)?`
    fn parse_import(&mut self) -> ParseResult<Statement> {
        if self.consume_keyword(KeywordId::Import).is_none() {
            return Ok(None);
        }
        let Some(path) = self.parse_names(".")? else {
            return Ok(None);
        };
        let alias = self.parse_alias()?;
        Ok(Some(Statement::Import(ImportStmt { path, alias })))
    }

    /// `'from' dotted_name 'import' import_name (',' import_name)*`
    fn parse_from_import(&mut self) -> ParseResult<Statement> {
        if self.consume_keyword(KeywordId::From).is_none() {
            return Ok(None);
        }
        let Some(path) = self.parse_names(".")? else {
            return Ok(None);
        };
        if self.consume_keyword(KeywordId::Import).is_none() {
            return Ok(None);
        }

        let mut names = Vec::new();
        loop {
            let Some(name) = self.consume_identifier() else {
                return Ok(None);
            };
            let alias = self.parse_alias()?;
            names.push(ImportName { name, alias });
            if self.consume_string(",").is_none() {
                break;
            }
        }
        Ok(Some(Statement::FromImport(FromImportStmt { path, names })))
    }

    /// `('as' identifier)?`
    fn parse_alias(&mut self) -> ParseResult<TokenIndex> {
        self.attempt(|p| {
            if p.consume_keyword(KeywordId::As).is_none() {
                return Ok(None);
            }
            Ok(p.consume_identifier())
        })
    }

    /// `rest_indentable_exprs (assign_op rest_indentable_exprs)?`
    fn parse_expr_statement(&mut self) -> ParseResult<Statement> {
        let Some(target) = self.parse_rest_indentable_exprs()? else {
            return Ok(None);
        };
        let assignment = self.attempt(|p| {
            let Some(op) = p.consume_assign_op() else {
                return Ok(None);
            };
            Ok(p.parse_rest_indentable_exprs()?.map(|value| (op, value)))
        })?;

        Ok(Some(match assignment {
            Some((op, value)) => Statement::Assign(AssignStmt {
                target: target.into_expr(),
                op,
                value: value.into_expr(),
            }),
            None => Statement::Expr(target.into_expr()),
        }))
    }

    /// `=` or an augmented assignment delimiter.
    fn consume_assign_op(&mut self) -> Option<TokenIndex> {
        let token = self.look()?;
        if token.kind == TokenKind::Delimiter && operators::is_assignment(&token.data) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// `identifier (separator identifier)*`
    fn parse_names(&mut self, separator: &str) -> ParseResult<Vec<TokenIndex>> {
        let Some(first) = self.consume_identifier() else {
            return Ok(None);
        };
        let mut names = vec![first];
        while let Some(name) = self.attempt(|p| {
            if p.consume_string(separator).is_none() {
                return Ok(None);
            }
            Ok(p.consume_identifier())
        })? {
            names.push(name);
        }
        Ok(Some(names))
    }

    // ========================================================================
    // Blocks
    // ========================================================================

    pub fn parse_block(&mut self) -> ParseResult<Vec<Statement>> {
        self.rule(Rule::Block, |p| {
            if p.consume_string(":").is_none() {
                return Ok(None);
            }
            if let Some(body) = p.parse_indented_statements()? {
                return Ok(Some(body));
            }
            p.parse_inline_statements()
        })
    }

    /// `NEWLINE* INDENT statement+ DEDENT`
    fn parse_indented_statements(&mut self) -> ParseResult<Vec<Statement>> {
        self.attempt(|p| {
            while p.parse_newline()?.is_some() {}
            if p.parse_indent()?.is_none() {
                return Ok(None);
            }

            p.nested(|p| {
                let mut statements = Vec::new();
                loop {
                    p.skip_separators();
                    if p.parse_dedent()?.is_some() {
                        break;
                    }
                    match p.parse_statement()? {
                        Some(statement) => statements.push(statement),
                        None => return Ok(None),
                    }
                }
                Ok((!statements.is_empty()).then_some(statements))
            })
        })
    }

    /// `simple_statement (';' simple_statement)* ';'?` on the line of the `:`.
    fn parse_inline_statements(&mut self) -> ParseResult<Vec<Statement>> {
        self.attempt(|p| {
            let Some(first) = p.parse_simple_statement()? else {
                return Ok(None);
            };
            let mut statements = vec![first];
            while let Some(next) = p.attempt(|p| {
                if p.consume_string(";").is_none() {
                    return Ok(None);
                }
                p.parse_simple_statement()
            })? {
                statements.push(next);
            }
            Ok(p.at_statement_end().then_some(statements))
        })
    }

    /// `NEWLINE? keyword rest`
    fn parse_clause<T>(&mut self, keyword: KeywordId, rest: fn(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        self.attempt(|p| {
            p.parse_newline()?;
            if p.consume_keyword(keyword).is_none() {
                return Ok(None);
            }
            rest(p)
        })
    }

    /// `test block`
    fn parse_conditional_block(&mut self) -> ParseResult<(Expr, Vec<Statement>)> {
        self.attempt(|p| {
            let Some(condition) = p.parse_test()? else {
                return Ok(None);
            };
            Ok(p.parse_block()?.map(|body| (condition, body)))
        })
    }

    // ========================================================================
    // Compound statements
    // ========================================================================

    pub fn parse_compound_statement(&mut self) -> ParseResult<Statement> {
        self.rule(Rule::CompoundStatement, |p| {
            let keyword = p.look().and_then(Token::keyword_id);
            match keyword {
                Some(KeywordId::If) => Ok(p.parse_if_stmt()?.map(Statement::If)),
                Some(KeywordId::While) => Ok(p.parse_while_stmt()?.map(Statement::While)),
                Some(KeywordId::For) => Ok(p.parse_for_stmt()?.map(Statement::For)),
                Some(KeywordId::Def) => Ok(p.parse_def_stmt()?.map(Statement::Def)),
                Some(KeywordId::Async) => {
                    if let Some(statement) = p.parse_for_stmt()? {
                        return Ok(Some(Statement::For(statement)));
                    }
                    Ok(p.parse_def_stmt()?.map(Statement::Def))
                }
                Some(KeywordId::Class) => Ok(p.parse_class_stmt()?.map(Statement::Class)),
                Some(KeywordId::Try) => Ok(p.parse_try_stmt()?.map(Statement::Try)),
                Some(KeywordId::Match) => Ok(p.parse_match_stmt()?.map(Statement::Match)),
                _ => Ok(None),
            }
        })
    }

    /// `'if' test block (NEWLINE? 'elif' test block)* (NEWLINE? 'else' block)?`
    pub fn parse_if_stmt(&mut self) -> ParseResult<IfStmt> {
        self.rule(Rule::IfStmt, |p| {
            if p.consume_keyword(KeywordId::If).is_none() {
                return Ok(None);
            }
            let Some((condition, body)) = p.parse_conditional_block()? else {
                return Ok(None);
            };

            let mut elif_branches = Vec::new();
            while let Some(branch) = p.parse_clause(KeywordId::Elif, Self::parse_conditional_block)? {
                elif_branches.push(branch);
            }
            let else_body = p.parse_clause(KeywordId::Else, Self::parse_block)?;

            Ok(Some(IfStmt {
                condition,
                body,
                elif_branches,
                else_body,
            }))
        })
    }

    /// `'while' test block (NEWLINE? 'else' block)?`
    pub fn parse_while_stmt(&mut self) -> ParseResult<WhileStmt> {
        self.rule(Rule::WhileStmt, |p| {
            if p.consume_keyword(KeywordId::While).is_none() {
                return Ok(None);
            }
            let Some((condition, body)) = p.parse_conditional_block()? else {
                return Ok(None);
            };
            let else_body = p.parse_clause(KeywordId::Else, Self::parse_block)?;
            Ok(Some(WhileStmt {
                condition,
                body,
                else_body,
            }))
        })
    }

    /// `'async'? 'for' identifier (',' identifier)* 'in' indentable_exprs block`
    pub fn parse_for_stmt(&mut self) -> ParseResult<ForStmt> {
        self.rule(Rule::ForStmt, |p| {
            let is_async = p.consume_keyword(KeywordId::Async).is_some();
            if p.consume_keyword(KeywordId::For).is_none() {
                return Ok(None);
            }
            let Some(targets) = p.parse_names(",")? else {
                return Ok(None);
            };
            if p.consume_keyword(KeywordId::In).is_none() {
                return Ok(None);
            }
            let Some(iterable) = p.parse_indentable_exprs()? else {
                return Ok(None);
            };
            Ok(p.parse_block()?.map(|body| ForStmt {
                is_async,
                targets,
                iterable: iterable.into_expr(),
                body,
            }))
        })
    }

    /// `'async'? 'def' identifier '(' lambda_params? ')' ('->' test)? block`
    pub fn parse_def_stmt(&mut self) -> ParseResult<DefStmt> {
        self.rule(Rule::DefStmt, |p| {
            let is_async = p.consume_keyword(KeywordId::Async).is_some();
            if p.consume_keyword(KeywordId::Def).is_none() {
                return Ok(None);
            }
            let Some(name) = p.consume_identifier() else {
                return Ok(None);
            };
            let Some(params) = p.parse_bracketed("(", ")", Self::parse_lambda_params)? else {
                return Ok(None);
            };
            let return_type = p.attempt(|p| {
                if p.consume_string("->").is_none() {
                    return Ok(None);
                }
                p.parse_test()
            })?;
            Ok(p.parse_block()?.map(|body| DefStmt {
                is_async,
                name,
                params,
                return_type,
                body,
            }))
        })
    }

    /// `'class' identifier ('(' arguments? ')')? block`
    pub fn parse_class_stmt(&mut self) -> ParseResult<ClassStmt> {
        self.rule(Rule::ClassStmt, |p| {
            if p.consume_keyword(KeywordId::Class).is_none() {
                return Ok(None);
            }
            let Some(name) = p.consume_identifier() else {
                return Ok(None);
            };
            let bases = p.parse_bracketed("(", ")", Self::parse_arguments)?.flatten().unwrap_or_default();
            Ok(p.parse_block()?.map(|body| ClassStmt { name, bases, body }))
        })
    }

    /// `'try' block except_clause* (NEWLINE? 'else' block)? (NEWLINE? 'finally' block)?`
    ///
    /// At least one `except` or a `finally` is required.
    pub fn parse_try_stmt(&mut self) -> ParseResult<TryStmt> {
        self.rule(Rule::TryStmt, |p| {
            if p.consume_keyword(KeywordId::Try).is_none() {
                return Ok(None);
            }
            let Some(body) = p.parse_block()? else {
                return Ok(None);
            };

            let mut handlers = Vec::new();
            while let Some(handler) = p.parse_clause(KeywordId::Except, Self::parse_except_clause)? {
                handlers.push(handler);
            }
            let else_body = p.parse_clause(KeywordId::Else, Self::parse_block)?;
            let finally_body = p.parse_clause(KeywordId::Finally, Self::parse_block)?;

            if handlers.is_empty() && finally_body.is_none() {
                return Ok(None);
            }
            Ok(Some(TryStmt {
                body,
                handlers,
                else_body,
                finally_body,
            }))
        })
    }

    /// `(test ('as' identifier)?)? block`, after the `except` keyword.
    fn parse_except_clause(&mut self) -> ParseResult<ExceptClause> {
        self.attempt(|p| {
            let exception = p.parse_test()?;
            let alias = match exception {
                Some(_) => p.parse_alias()?,
                None => None,
            };
            Ok(p.parse_block()?.map(|body| ExceptClause {
                exception,
                alias,
                body,
            }))
        })
    }

    /// `'match' indentable_exprs ':' NEWLINE* INDENT match_arm+ DEDENT`
    pub fn parse_match_stmt(&mut self) -> ParseResult<MatchStmt> {
        self.rule(Rule::MatchStmt, |p| {
            if p.consume_keyword(KeywordId::Match).is_none() {
                return Ok(None);
            }
            let Some(subject) = p.parse_indentable_exprs()? else {
                return Ok(None);
            };
            if p.consume_string(":").is_none() {
                return Ok(None);
            }
            while p.parse_newline()?.is_some() {}
            if p.parse_indent()?.is_none() {
                return Ok(None);
            }

            let mut arms = Vec::new();
            loop {
                p.skip_separators();
                if p.parse_dedent()?.is_some() {
                    break;
                }
                match p.parse_match_arm()? {
                    Some(arm) => arms.push(arm),
                    None => return Ok(None),
                }
            }
            Ok((!arms.is_empty()).then(|| MatchStmt {
                subject: subject.into_expr(),
                arms,
            }))
        })
    }

    /// `indentable_exprs block`
    pub fn parse_match_arm(&mut self) -> ParseResult<MatchArm> {
        self.rule(Rule::MatchArm, |p| {
            let Some(pattern) = p.parse_indentable_exprs()? else {
                return Ok(None);
            };
            Ok(p.parse_block()?.map(|body| MatchArm {
                pattern: pattern.into_expr(),
                body,
            }))
        })
    }
}
