/// Lambda parsing methods.
///
/// Parameter lists are shared by both lambda forms and by `def` statements:
///
/// ```text
/// lambda_params := '(' lambda_params ')'
///                | param (',' param)* (',' '*' param (',' param)*)? (',' '**' param)? ','?
///                | '*' param (',' param)* (',' '**' param)? ','?
///                | '**' param ','?
/// ```
impl<'a> Parser<'a> {
    /// `identifier ('=' test)?`
    pub fn parse_lambda_param(&mut self) -> ParseResult<FuncParam> {
        self.rule(Rule::LambdaParam, |p| {
            let Some(name) = p.consume_identifier() else {
                return Ok(None);
            };
            let default_value = p.attempt(|p| {
                if p.consume_string("=").is_none() {
                    return Ok(None);
                }
                p.parse_test()
            })?;
            Ok(Some(FuncParam { name, default_value }))
        })
    }

    pub fn parse_lambda_params(&mut self) -> ParseResult<FuncParams> {
        self.rule(Rule::LambdaParams, |p| {
            if let Some(params) = p.parse_enclosed("(", ")", Self::parse_lambda_params)? {
                return Ok(Some(params));
            }

            let mut params = FuncParams::default();
            if let Some(first) = p.parse_lambda_param()? {
                params.params.push(first);
                while let Some(param) = p.parse_next_param(None)? {
                    params.params.push(param);
                }
                params.tuple_rest_param = p.parse_next_param(Some("*"))?;
            } else if let Some(rest) = p.parse_prefixed_param("*")? {
                params.tuple_rest_param = Some(rest);
            } else if let Some(rest) = p.parse_prefixed_param("**")? {
                params.named_tuple_rest_param = Some(rest);
                p.consume_string(",");
                return Ok(Some(params));
            } else {
                return Ok(None);
            }

            if params.tuple_rest_param.is_some() {
                while let Some(param) = p.parse_next_param(None)? {
                    params.named_tuple_params.push(param);
                }
            }
            params.named_tuple_rest_param = p.parse_next_param(Some("**"))?;
            p.consume_string(",");
            Ok(Some(params))
        })
    }

    /// `',' prefix? param`
    fn parse_next_param(&mut self, prefix: Option<&str>) -> ParseResult<FuncParam> {
        self.attempt(|p| {
            if p.consume_string(",").is_none() {
                return Ok(None);
            }
            match prefix {
                Some(prefix) => p.parse_prefixed_param(prefix),
                None => p.parse_lambda_param(),
            }
        })
    }

    /// `prefix param`
    fn parse_prefixed_param(&mut self, prefix: &str) -> ParseResult<FuncParam> {
        self.attempt(|p| {
            if p.consume_string(prefix).is_none() {
                return Ok(None);
            }
            p.parse_lambda_param()
        })
    }

    /// `'lambda' lambda_params? ':' test`
    pub fn parse_lambda_expr_def(&mut self) -> ParseResult<Expr> {
        self.rule(Rule::LambdaExprDef, |p| {
            let Some(params) = p.parse_lambda_head()? else {
                return Ok(None);
            };
            Ok(p.parse_test()?.map(|body| {
                Expr::Func(Box::new(FuncExpr {
                    params,
                    body: FuncBody::Expr(Box::new(body)),
                }))
            }))
        })
    }

    /// `'lambda' lambda_params? ':' NEWLINE* INDENT statement+ DEDENT`
    pub fn parse_lambda_block_def(&mut self) -> ParseResult<Expr> {
        self.rule(Rule::LambdaBlockDef, |p| {
            let Some(params) = p.parse_lambda_head()? else {
                return Ok(None);
            };
            Ok(p.parse_indented_statements()?.map(|body| {
                Expr::Func(Box::new(FuncExpr {
                    params,
                    body: FuncBody::Block(body),
                }))
            }))
        })
    }

    /// `'lambda' lambda_params? ':'`, yielding the (optional) parameters.
    fn parse_lambda_head(&mut self) -> ParseResult<Option<FuncParams>> {
        self.attempt(|p| {
            if p.consume_keyword(KeywordId::Lambda).is_none() {
                return Ok(None);
            }
            let params = p.parse_lambda_params()?;
            Ok(p.consume_string(":").map(|_| params))
        })
    }
}
