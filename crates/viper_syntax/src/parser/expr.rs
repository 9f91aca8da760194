/// Expression parsing methods.
///
/// This chunk implements operands (atoms, trailers, call arguments, displays) and the precedence chain, from the
/// tightest-binding `power_expr` up to the ternary `test`, plus the comma-separated expression lists built on top.
///
/// ## Notes
/// - Binary chains are left-associative and share [`Parser::parse_binary_expr`]; unary prefixes and `^` are
///   right-associative.
/// - A leading `√` wraps the whole power expression: `√x²` is `√(x²)`.
impl<'a> Parser<'a> {
    // ========================================================================
    // Operands
    // ========================================================================

    pub fn parse_atom(&mut self) -> ParseResult<Expr> {
        self.rule(Rule::Atom, |p| {
            let leaves: [fn(&mut Self) -> ParseResult<Expr>; 9] = [
                Self::parse_identifier,
                Self::parse_integer,
                Self::parse_float,
                Self::parse_imag_integer,
                Self::parse_imag_float,
                Self::parse_string,
                Self::parse_byte_string,
                Self::parse_prefixed_string,
                Self::parse_constant,
            ];
            for leaf in leaves {
                if let Some(expr) = leaf(p)? {
                    return Ok(Some(expr));
                }
            }

            if let Some(contents) = p.parse_bracketed("(", ")", Self::parse_indentable_exprs_or_comprehension)? {
                return Ok(Some(match contents {
                    None => Expr::Tuple(Vec::new()),
                    Some(ExprsOrComprehension::Exprs(list)) => list.into_expr(),
                    Some(ExprsOrComprehension::Comprehension { expr, fors }) => {
                        comprehension(ComprehensionKind::Generator, expr, fors)
                    }
                }));
            }

            if let Some(contents) = p.parse_bracketed("[", "]", Self::parse_indentable_exprs_or_comprehension)? {
                return Ok(Some(match contents {
                    None => Expr::List(Vec::new()),
                    Some(ExprsOrComprehension::Exprs(list)) => Expr::List(list.exprs),
                    Some(ExprsOrComprehension::Comprehension { expr, fors }) => {
                        comprehension(ComprehensionKind::List, expr, fors)
                    }
                }));
            }

            if let Some(entries) = p.parse_bracketed("{", "}", Self::parse_dict_entries)? {
                return Ok(Some(Expr::Dict(entries.unwrap_or_default())));
            }

            let set = p.parse_enclosed("{", "}", Self::parse_indentable_exprs_or_comprehension)?;
            Ok(set.map(|contents| match contents {
                ExprsOrComprehension::Exprs(list) => Expr::Set(list.exprs),
                ExprsOrComprehension::Comprehension { expr, fors } => comprehension(ComprehensionKind::Set, expr, fors),
            }))
        })
    }

    /// `'await'? atom trailer*`
    pub fn parse_atom_expr(&mut self) -> ParseResult<Expr> {
        self.rule(Rule::AtomExpr, |p| {
            let is_await = p.consume_keyword(KeywordId::Await).is_some();
            let Some(mut expr) = p.parse_atom()? else {
                return Ok(None);
            };

            while let Some(trailer) = p.parse_trailer()? {
                expr = match trailer {
                    Trailer::Call(arguments) => Expr::Call {
                        callee: Box::new(expr),
                        arguments,
                    },
                    Trailer::Index(index) => Expr::Index {
                        target: Box::new(expr),
                        index: Box::new(index),
                    },
                    Trailer::Field(name) => Expr::Field {
                        target: Box::new(expr),
                        name,
                    },
                };
            }

            Ok(Some(if is_await { Expr::Await(Box::new(expr)) } else { expr }))
        })
    }

    fn parse_trailer(&mut self) -> ParseResult<Trailer> {
        self.rule(Rule::Trailer, |p| {
            if let Some(arguments) = p.parse_bracketed("(", ")", Self::parse_arguments)? {
                return Ok(Some(Trailer::Call(arguments.unwrap_or_default())));
            }
            if let Some(index) = p.parse_enclosed("[", "]", Self::parse_rest_exprs)? {
                return Ok(Some(Trailer::Index(index.into_expr())));
            }
            p.attempt(|p| {
                if p.consume_string(".").is_none() {
                    return Ok(None);
                }
                Ok(p.consume_identifier().map(Trailer::Field))
            })
        })
    }

    pub fn parse_arguments(&mut self) -> ParseResult<Vec<Argument>> {
        self.rule(Rule::Arguments, |p| {
            Ok(p.parse_comma_list(Self::parse_argument)?.map(|(arguments, _)| arguments))
        })
    }

    /// `identifier '=' indentable_expr | rest_indentable_expr`
    pub fn parse_argument(&mut self) -> ParseResult<Argument> {
        self.rule(Rule::Argument, |p| {
            let named = p.attempt(|p| {
                let Some(name) = p.consume_identifier() else {
                    return Ok(None);
                };
                if p.consume_string("=").is_none() {
                    return Ok(None);
                }
                Ok(p.parse_indentable_expr()?.map(|value| Argument {
                    name: Some(name),
                    value,
                }))
            })?;
            if named.is_some() {
                return Ok(named);
            }
            Ok(p.parse_rest_indentable_expr()?.map(|value| Argument { name: None, value }))
        })
    }

    pub fn parse_dict_entries(&mut self) -> ParseResult<Vec<DictEntry>> {
        self.rule(Rule::DictEntries, |p| {
            Ok(p.parse_comma_list(Self::parse_dict_entry)?.map(|(entries, _)| entries))
        })
    }

    /// `test ':' indentable_expr | '**' expr`
    pub fn parse_dict_entry(&mut self) -> ParseResult<DictEntry> {
        self.rule(Rule::DictEntry, |p| {
            let pair = p.attempt(|p| {
                let Some(key) = p.parse_test()? else {
                    return Ok(None);
                };
                if p.consume_string(":").is_none() {
                    return Ok(None);
                }
                Ok(p.parse_indentable_expr()?.map(|value| DictEntry::Pair { key, value }))
            })?;
            if pair.is_some() {
                return Ok(pair);
            }

            if p.consume_string("**").is_none() {
                return Ok(None);
            }
            Ok(p.parse_expr()?.map(DictEntry::Rest))
        })
    }

    // ========================================================================
    // Precedence chain
    // ========================================================================

    /// `'√'? atom_expr ('^' unary_expr | '²')?`
    pub fn parse_power_expr(&mut self) -> ParseResult<Expr> {
        self.rule(Rule::PowerExpr, |p| {
            let root = p.consume_string("√");
            let Some(mut expr) = p.parse_atom_expr()? else {
                return Ok(None);
            };

            let exponent = p.attempt(|p| {
                let Some(op) = p.consume_string("^") else {
                    return Ok(None);
                };
                Ok(p.parse_unary_expr()?.map(|rhs| (op, rhs)))
            })?;
            if let Some((op, rhs)) = exponent {
                expr = binary(expr, Operator::new(op), rhs);
            } else if let Some(op) = p.consume_string("²") {
                expr = unary(expr, Operator::new(op));
            }

            if let Some(op) = root {
                expr = unary(expr, Operator::new(op));
            }
            Ok(Some(expr))
        })
    }

    /// `('+' | '-' | '~') unary_expr | power_expr`
    pub fn parse_unary_expr(&mut self) -> ParseResult<Expr> {
        self.rule(Rule::UnaryExpr, |p| {
            let prefix = ["+", "-", "~"].into_iter().find_map(|op| p.consume_string(op));
            match prefix {
                Some(op) => Ok(p.parse_unary_expr()?.map(|expr| unary(expr, Operator::new(op)))),
                None => p.parse_power_expr(),
            }
        })
    }

    pub fn parse_mul_expr(&mut self) -> ParseResult<Expr> {
        self.rule(Rule::MulExpr, |p| p.parse_binary_expr(Self::parse_unary_expr, MUL_OPERATORS))
    }

    pub fn parse_sum_expr(&mut self) -> ParseResult<Expr> {
        self.rule(Rule::SumExpr, |p| p.parse_binary_expr(Self::parse_mul_expr, SUM_OPERATORS))
    }

    pub fn parse_shift_expr(&mut self) -> ParseResult<Expr> {
        self.rule(Rule::ShiftExpr, |p| p.parse_binary_expr(Self::parse_sum_expr, SHIFT_OPERATORS))
    }

    pub fn parse_and_expr(&mut self) -> ParseResult<Expr> {
        self.rule(Rule::AndExpr, |p| p.parse_binary_expr(Self::parse_shift_expr, &[BinaryOperator::Single("&")]))
    }

    pub fn parse_xor_expr(&mut self) -> ParseResult<Expr> {
        self.rule(Rule::XorExpr, |p| p.parse_binary_expr(Self::parse_and_expr, &[BinaryOperator::Single("||")]))
    }

    pub fn parse_or_expr(&mut self) -> ParseResult<Expr> {
        self.rule(Rule::OrExpr, |p| p.parse_binary_expr(Self::parse_xor_expr, &[BinaryOperator::Single("|")]))
    }

    pub fn parse_comparison_expr(&mut self) -> ParseResult<Expr> {
        self.rule(Rule::ComparisonExpr, |p| p.parse_binary_expr(Self::parse_or_expr, COMPARISON_OPERATORS))
    }

    /// `'not' not_test | comparison_expr`
    pub fn parse_not_test(&mut self) -> ParseResult<Expr> {
        self.rule(Rule::NotTest, |p| match p.consume_keyword(KeywordId::Not) {
            Some(op) => Ok(p.parse_not_test()?.map(|expr| unary(expr, Operator::new(op)))),
            None => p.parse_comparison_expr(),
        })
    }

    pub fn parse_and_test(&mut self) -> ParseResult<Expr> {
        self.rule(Rule::AndTest, |p| p.parse_binary_expr(Self::parse_not_test, &[BinaryOperator::Single("and")]))
    }

    pub fn parse_or_test(&mut self) -> ParseResult<Expr> {
        self.rule(Rule::OrTest, |p| p.parse_binary_expr(Self::parse_and_test, &[BinaryOperator::Single("or")]))
    }

    /// `or_test ('if' or_test 'else' or_test)?`
    pub fn parse_test(&mut self) -> ParseResult<Expr> {
        self.rule(Rule::Test, |p| {
            let Some(expr) = p.parse_or_test()? else {
                return Ok(None);
            };

            let ternary = p.attempt(|p| {
                if p.consume_keyword(KeywordId::If).is_none() {
                    return Ok(None);
                }
                let Some(condition) = p.parse_or_test()? else {
                    return Ok(None);
                };
                if p.consume_keyword(KeywordId::Else).is_none() {
                    return Ok(None);
                }
                Ok(p.parse_or_test()?.map(|else_expr| (condition, else_expr)))
            })?;

            Ok(Some(match ternary {
                Some((condition, else_expr)) => Expr::If(IfExpr {
                    if_expr: Box::new(expr),
                    condition: Box::new(condition),
                    else_expr: Box::new(else_expr),
                }),
                None => expr,
            }))
        })
    }

    /// Left-associative chain: `operand (operator operand)*`, first matching operator wins.
    ///
    /// An operator that is not followed by an operand is left unconsumed.
    fn parse_binary_expr(
        &mut self,
        operand: fn(&mut Self) -> ParseResult<Expr>,
        operators: &[BinaryOperator],
    ) -> ParseResult<Expr> {
        let Some(mut expr) = operand(self)? else {
            return Ok(None);
        };

        loop {
            let before = self.snapshot();
            let Some(op) = self.consume_operator(operators) else {
                break;
            };
            let Some(rhs) = operand(self)? else {
                self.restore(before);
                break;
            };
            expr = binary(expr, op, rhs);
        }
        Ok(Some(expr))
    }

    // ========================================================================
    // Expression lists
    // ========================================================================

    /// `test | lambda_expr_def`
    pub fn parse_expr(&mut self) -> ParseResult<Expr> {
        self.rule(Rule::Expr, |p| {
            if let Some(expr) = p.parse_test()? {
                return Ok(Some(expr));
            }
            p.parse_lambda_expr_def()
        })
    }

    pub fn parse_exprs(&mut self) -> ParseResult<ExprList> {
        self.rule(Rule::Exprs, |p| p.parse_expr_list(Self::parse_expr))
    }

    /// `('*' | '**')? expr`
    pub fn parse_rest_expr(&mut self) -> ParseResult<Expr> {
        self.rule(Rule::RestExpr, |p| p.parse_rest(Self::parse_expr))
    }

    pub fn parse_rest_exprs(&mut self) -> ParseResult<ExprList> {
        self.rule(Rule::RestExprs, |p| p.parse_expr_list(Self::parse_rest_expr))
    }

    /// `expr | lambda_block_def`
    pub fn parse_indentable_expr(&mut self) -> ParseResult<Expr> {
        self.rule(Rule::IndentableExpr, |p| {
            if let Some(expr) = p.parse_expr()? {
                return Ok(Some(expr));
            }
            p.parse_lambda_block_def()
        })
    }

    pub fn parse_indentable_exprs(&mut self) -> ParseResult<ExprList> {
        self.rule(Rule::IndentableExprs, |p| p.parse_expr_list(Self::parse_indentable_expr))
    }

    pub fn parse_rest_indentable_expr(&mut self) -> ParseResult<Expr> {
        self.rule(Rule::RestIndentableExpr, |p| p.parse_rest(Self::parse_indentable_expr))
    }

    pub fn parse_rest_indentable_exprs(&mut self) -> ParseResult<ExprList> {
        self.rule(Rule::RestIndentableExprs, |p| p.parse_expr_list(Self::parse_rest_indentable_expr))
    }

    fn parse_rest(&mut self, item: fn(&mut Self) -> ParseResult<Expr>) -> ParseResult<Expr> {
        if self.consume_string("*").is_some() {
            return Ok(item(self)?.map(|expr| Expr::TupleRest(Box::new(expr))));
        }
        if self.consume_string("**").is_some() {
            return Ok(item(self)?.map(|expr| Expr::NamedTupleRest(Box::new(expr))));
        }
        item(self)
    }

    fn parse_expr_list(&mut self, item: fn(&mut Self) -> ParseResult<Expr>) -> ParseResult<ExprList> {
        Ok(self
            .parse_comma_list(item)?
            .map(|(exprs, trailing_comma)| ExprList { exprs, trailing_comma }))
    }

    // ========================================================================
    // Shared shapes
    // ========================================================================

    /// `item (',' item)* ','?`, reporting whether a trailing comma was consumed.
    fn parse_comma_list<T>(&mut self, item: fn(&mut Self) -> ParseResult<T>) -> ParseResult<(Vec<T>, bool)> {
        let Some(first) = item(self)? else {
            return Ok(None);
        };

        let mut items = vec![first];
        let mut trailing_comma = false;
        while self.consume_string(",").is_some() {
            match item(self)? {
                Some(next) => items.push(next),
                None => {
                    trailing_comma = true;
                    break;
                }
            }
        }
        Ok(Some((items, trailing_comma)))
    }

    /// `open inner? close`; the inner value is `None` for an empty pair.
    fn parse_bracketed<T>(
        &mut self,
        open: &str,
        close: &str,
        inner: fn(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<Option<T>> {
        self.attempt(|p| {
            if p.consume_string(open).is_none() {
                return Ok(None);
            }
            let contents = p.nested(inner)?;
            Ok(p.consume_string(close).map(|_| contents))
        })
    }

    /// `open inner close`
    fn parse_enclosed<T>(
        &mut self,
        open: &str,
        close: &str,
        inner: fn(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        self.attempt(|p| {
            if p.consume_string(open).is_none() {
                return Ok(None);
            }
            let Some(contents) = p.nested(inner)? else {
                return Ok(None);
            };
            Ok(p.consume_string(close).map(|_| contents))
        })
    }
}

const MUL_OPERATORS: &[BinaryOperator] = &[
    BinaryOperator::Single("*"),
    BinaryOperator::Single("@"),
    BinaryOperator::Single("/"),
    BinaryOperator::Single("%"),
    BinaryOperator::Single("//"),
];

const SUM_OPERATORS: &[BinaryOperator] = &[BinaryOperator::Single("+"), BinaryOperator::Single("-")];

const SHIFT_OPERATORS: &[BinaryOperator] = &[BinaryOperator::Single("<<"), BinaryOperator::Single(">>")];

/// Two-word forms come before the one-word operator they start with.
const COMPARISON_OPERATORS: &[BinaryOperator] = &[
    BinaryOperator::Single("<"),
    BinaryOperator::Single(">"),
    BinaryOperator::Single("=="),
    BinaryOperator::Single(">="),
    BinaryOperator::Single("<="),
    BinaryOperator::Single("!="),
    BinaryOperator::Single("in"),
    BinaryOperator::Pair("not", "in"),
    BinaryOperator::Pair("is", "not"),
    BinaryOperator::Single("is"),
];

fn unary(expr: Expr, op: Operator) -> Expr {
    Expr::Unary(UnaryExpr {
        expr: Box::new(expr),
        op,
    })
}

fn binary(lhs: Expr, op: Operator, rhs: Expr) -> Expr {
    Expr::Binary(BinaryExpr {
        lhs: Box::new(lhs),
        op,
        rhs: Box::new(rhs),
    })
}

fn comprehension(kind: ComprehensionKind, expr: Box<Expr>, fors: Vec<ComprehensionFor>) -> Expr {
    Expr::Comprehension(Comprehension { kind, expr, fors })
}
