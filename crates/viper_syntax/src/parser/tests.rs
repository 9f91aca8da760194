#[cfg(test)]
/// Parser unit tests.
///
/// Expression tests render the AST back to a fully parenthesized string so precedence and associativity are
/// visible at a glance; statement tests match on the AST directly.
mod tests {
    use super::*;

    fn parser(source: &str) -> Parser<'static> {
        Parser::from_code(source).unwrap()
    }

    fn op_text(op: &Operator, tokens: &[Token]) -> String {
        match op.second {
            Some(second) => format!("{} {}", tokens[op.op].data, tokens[second].data),
            None => tokens[op.op].data.clone(),
        }
    }

    fn render_list(exprs: &[Expr], tokens: &[Token]) -> String {
        exprs.iter().map(|expr| render(expr, tokens)).collect::<Vec<_>>().join(", ")
    }

    fn render(expr: &Expr, tokens: &[Token]) -> String {
        match expr {
            Expr::Identifier(i)
            | Expr::Integer(i)
            | Expr::Float(i)
            | Expr::ImagInteger(i)
            | Expr::ImagFloat(i)
            | Expr::Constant(i) => tokens[*i].data.clone(),
            Expr::String(i) | Expr::ByteString(i) | Expr::PrefixedString(i) => format!("{:?}", tokens[*i].data),
            Expr::Unary(unary) => {
                let op = op_text(&unary.op, tokens);
                if op == "²" {
                    format!("({} ²)", render(&unary.expr, tokens))
                } else {
                    format!("({op} {})", render(&unary.expr, tokens))
                }
            }
            Expr::Binary(binary) => format!(
                "({} {} {})",
                render(&binary.lhs, tokens),
                op_text(&binary.op, tokens),
                render(&binary.rhs, tokens)
            ),
            Expr::If(if_expr) => format!(
                "({} if {} else {})",
                render(&if_expr.if_expr, tokens),
                render(&if_expr.condition, tokens),
                render(&if_expr.else_expr, tokens)
            ),
            Expr::Func(_) => "lambda".to_string(),
            Expr::TupleRest(inner) => format!("*{}", render(inner, tokens)),
            Expr::NamedTupleRest(inner) => format!("**{}", render(inner, tokens)),
            Expr::Tuple(exprs) => format!("({})", render_list(exprs, tokens)),
            Expr::List(exprs) => format!("[{}]", render_list(exprs, tokens)),
            Expr::Set(exprs) => format!("{{{}}}", render_list(exprs, tokens)),
            Expr::Dict(entries) => {
                let entries: Vec<String> = entries
                    .iter()
                    .map(|entry| match entry {
                        DictEntry::Pair { key, value } => format!("{}: {}", render(key, tokens), render(value, tokens)),
                        DictEntry::Rest(mapping) => format!("**{}", render(mapping, tokens)),
                    })
                    .collect();
                format!("{{{}}}", entries.join(", "))
            }
            Expr::Comprehension(comprehension) => {
                format!("<{:?} {}>", comprehension.kind, render(&comprehension.expr, tokens))
            }
            Expr::Call { callee, arguments } => {
                let arguments: Vec<String> = arguments
                    .iter()
                    .map(|argument| match argument.name {
                        Some(name) => format!("{}={}", tokens[name].data, render(&argument.value, tokens)),
                        None => render(&argument.value, tokens),
                    })
                    .collect();
                format!("{}({})", render(callee, tokens), arguments.join(", "))
            }
            Expr::Index { target, index } => format!("{}[{}]", render(target, tokens), render(index, tokens)),
            Expr::Field { target, name } => format!("{}.{}", render(target, tokens), tokens[*name].data),
            Expr::Await(inner) => format!("(await {})", render(inner, tokens)),
        }
    }

    /// Parse `source` as one expression that must consume every token.
    fn parse_expr_source(source: &str) -> (Expr, Vec<Token>) {
        let mut parser = parser(source);
        let expr = parser
            .parse_indentable_expr()
            .unwrap()
            .unwrap_or_else(|| panic!("no expression in {source:?}"));
        assert_eq!(parser.cursor() + 1, parser.tokens().len() as isize, "unconsumed tokens in {source:?}");
        (expr, parser.tokens().to_vec())
    }

    fn rendered(source: &str) -> String {
        let (expr, tokens) = parse_expr_source(source);
        render(&expr, &tokens)
    }

    fn program(source: &str) -> (Program, Vec<Token>) {
        let tokens = lexer::lex(source).unwrap();
        let program = parse(&tokens).unwrap_or_else(|err| panic!("failed to parse {source:?}: {err}"));
        (program, tokens)
    }

    fn parse_error(source: &str) -> ParseError {
        let tokens = lexer::lex(source).unwrap();
        parse(&tokens).unwrap_err()
    }

    // ========================================================================
    // Combinators
    // ========================================================================

    #[test]
    fn test_parse_identifier_records_memo_entry() {
        let mut parser = parser("identifier");
        assert_eq!(parser.parse_identifier().unwrap(), Some(Expr::Identifier(0)));
        assert_eq!(parser.cursor(), 0);
        assert_eq!(parser.memoized_end(-1, Rule::Identifier), Some(0));
        assert_eq!(parser.memoized_end(0, Rule::Identifier), None);
    }

    #[test]
    fn test_failed_rule_restores_position() {
        let mut parser = parser("1hello");
        assert_eq!(parser.parse_identifier().unwrap(), None);
        assert_eq!((parser.cursor(), parser.row(), parser.column()), (-1, 0, -1));
        assert_eq!(parser.memoized_end(-1, Rule::Identifier), Some(-1));
    }

    #[test]
    fn test_repeated_rule_is_answered_from_cache() {
        let mut parser = parser("a + b * c");
        let first = parser.parse_test().unwrap();
        let end = parser.cursor();
        let hits = parser.cache_hits();

        parser.rewind();
        assert_eq!(parser.cursor(), -1);
        let second = parser.parse_test().unwrap();

        assert_eq!(first, second);
        assert_eq!(parser.cursor(), end);
        assert_eq!(parser.cache_hits(), hits + 1);
        assert_eq!((parser.row(), parser.column()), (0, 8));
    }

    #[test]
    fn test_eat_token() {
        let mut parser = parser("a b");
        assert_eq!(parser.eat_token().map(|(i, t)| (i, t.data.clone())), Some((0, "a".to_string())));
        assert_eq!(parser.eat_token().map(|(i, t)| (i, t.data.clone())), Some((1, "b".to_string())));
        assert!(parser.eat_token().is_none());
        assert_eq!(parser.cursor(), 1);
    }

    #[test]
    fn test_borrowed_tokens() {
        let tokens = lexer::lex("x").unwrap();
        let mut parser = Parser::new(&tokens);
        assert_eq!(parser.parse_expr().unwrap(), Some(Expr::Identifier(0)));
    }

    // ========================================================================
    // Literals
    // ========================================================================

    #[test]
    fn test_integers() {
        for source in ["5_000", "0001", "0b11_00", "0o217", "0xffEE_210"] {
            let mut parser = parser(source);
            assert_eq!(parser.parse_integer().unwrap(), Some(Expr::Integer(0)), "parsing {source:?}");
            assert_eq!(parser.cursor(), 0);
        }
    }

    #[test]
    fn test_floats() {
        for source in [".05", "0.0_55", "1_00.00_50", "1.e-5_00", "1.", "1_00.1_00e-1_00"] {
            let mut parser = parser(source);
            assert_eq!(parser.parse_float().unwrap(), Some(Expr::Float(0)), "parsing {source:?}");
        }
    }

    #[test]
    fn test_imaginary_numbers() {
        for source in ["5_000im", "0001im"] {
            let mut parser = parser(source);
            assert_eq!(parser.parse_imag_integer().unwrap(), Some(Expr::ImagInteger(0)), "parsing {source:?}");
        }
        for source in [".05im", "0.0_55im", "1_00.1_00e-1_00im"] {
            let mut parser = parser(source);
            assert_eq!(parser.parse_imag_float().unwrap(), Some(Expr::ImagFloat(0)), "parsing {source:?}");
        }
    }

    #[test]
    fn test_strings() {
        for source in ["'hello'", "\"\"\"hello\"\"\""] {
            assert_eq!(parser(source).parse_string().unwrap(), Some(Expr::String(0)));
        }
        for source in ["b'hello'", "rb'''hello'''"] {
            assert_eq!(parser(source).parse_byte_string().unwrap(), Some(Expr::ByteString(0)));
        }
        for source in ["r'hello'", "f\"hello\"", "u'hello'"] {
            assert_eq!(parser(source).parse_prefixed_string().unwrap(), Some(Expr::PrefixedString(0)));
        }
    }

    #[test]
    fn test_string_spelled_like_syntax_is_a_string() {
        assert_eq!(parser("'('").parse_atom().unwrap(), Some(Expr::String(0)));
        assert_eq!(parser("'if'").parse_constant().unwrap(), None);
    }

    #[test]
    fn test_constants() {
        for source in ["True", "False", "None", "true", "false"] {
            assert_eq!(parser(source).parse_constant().unwrap(), Some(Expr::Constant(0)), "parsing {source:?}");
        }
    }

    #[test]
    fn test_layout_rules() {
        let mut parser = parser("if x:\n    y\n");
        for _ in 0..3 {
            parser.eat_token();
        }
        assert_eq!(parser.parse_newline().unwrap(), None);
        assert_eq!(parser.parse_indent().unwrap(), Some(Indent(3)));
        parser.eat_token();
        assert_eq!(parser.parse_dedent().unwrap(), Some(Dedent(5)));
    }

    // ========================================================================
    // Precedence and associativity
    // ========================================================================

    #[test]
    fn test_mul_expr_is_left_associative() {
        let mut parser = parser("-5/-4*+3");
        let expr = parser.parse_mul_expr().unwrap();
        let expected = Expr::Binary(BinaryExpr {
            lhs: Box::new(Expr::Binary(BinaryExpr {
                lhs: Box::new(Expr::Unary(UnaryExpr {
                    expr: Box::new(Expr::Integer(1)),
                    op: Operator::new(0),
                })),
                op: Operator::new(2),
                rhs: Box::new(Expr::Unary(UnaryExpr {
                    expr: Box::new(Expr::Integer(4)),
                    op: Operator::new(3),
                })),
            })),
            op: Operator::new(5),
            rhs: Box::new(Expr::Unary(UnaryExpr {
                expr: Box::new(Expr::Integer(7)),
                op: Operator::new(6),
            })),
        });
        assert_eq!(expr, Some(expected));
        assert_eq!(parser.cursor(), 7);
    }

    #[test]
    fn test_precedence_levels() {
        let cases = [
            ("1 + 2 * 3", "(1 + (2 * 3))"),
            ("~a // b % c @ d", "((((~ a) // b) % c) @ d)"),
            ("1 << 2 + 3", "(1 << (2 + 3))"),
            ("a & b || c | d", "(((a & b) || c) | d)"),
            ("a < b == c", "((a < b) == c)"),
            ("x not in y is not z", "((x not in y) is not z)"),
            ("a is b", "(a is b)"),
            ("a or b and not c", "(a or (b and (not c)))"),
            ("not not a", "(not (not a))"),
            ("a | b < c", "((a | b) < c)"),
        ];
        for (source, expected) in cases {
            assert_eq!(rendered(source), expected, "parsing {source:?}");
        }
    }

    #[test]
    fn test_power_forms() {
        assert_eq!(rendered("-2^-3^4"), "(- (2 ^ (- (3 ^ 4))))");
        assert_eq!(rendered("√x²"), "(√ (x ²))");
        assert_eq!(rendered("√x^2"), "(√ (x ^ 2))");
        assert_eq!(rendered("2x^2"), "(2 * (x ^ 2))");
    }

    #[test]
    fn test_ternary() {
        assert_eq!(rendered("a if b else c"), "(a if b else c)");
        assert_eq!(rendered("x if a or b else y"), "(x if (a or b) else y)");
    }

    #[test]
    fn test_incomplete_suffixes_backtrack() {
        let mut p = parser("a if b");
        assert_eq!(p.parse_test().unwrap(), Some(Expr::Identifier(0)));
        assert_eq!(p.cursor(), 0);

        let mut p = parser("a + ");
        assert_eq!(p.parse_sum_expr().unwrap(), Some(Expr::Identifier(0)));
        assert_eq!(p.cursor(), 0);

        let mut p = parser("x ^");
        assert_eq!(p.parse_power_expr().unwrap(), Some(Expr::Identifier(0)));
        assert_eq!(p.cursor(), 0);

        let mut p = parser("a not b");
        assert_eq!(p.parse_comparison_expr().unwrap(), Some(Expr::Identifier(0)));
        assert_eq!(p.cursor(), 0);
    }

    #[test]
    fn test_operator_kinds() {
        let (expr, tokens) = parse_expr_source("a not in b");
        let Expr::Binary(binary) = expr else {
            panic!("expected binary expression");
        };
        assert_eq!(binary.op.binary_kind(&tokens), Some(BinaryOpKind::NotIn));

        let (expr, tokens) = parse_expr_source("~a");
        let Expr::Unary(unary) = expr else {
            panic!("expected unary expression");
        };
        assert_eq!(unary.op.unary_kind(&tokens), Some(UnaryOpKind::BinaryNot));
    }

    // ========================================================================
    // Operands
    // ========================================================================

    #[test]
    fn test_displays() {
        let cases = [
            ("()", "()"),
            ("(x)", "x"),
            ("(x,)", "(x)"),
            ("(1, 2)", "(1, 2)"),
            ("[]", "[]"),
            ("[1, 2,]", "[1, 2]"),
            ("{}", "{}"),
            ("{a: 1, **b}", "{a: 1, **b}"),
            ("{a, *b}", "{a, *b}"),
        ];
        for (source, expected) in cases {
            assert_eq!(rendered(source), expected, "parsing {source:?}");
        }
    }

    #[test]
    fn test_trailers() {
        assert_eq!(rendered("f(x, y=1)(z).a[0]"), "f(x, y=1)(z).a[0]");
        assert_eq!(rendered("f()"), "f()");
        assert_eq!(rendered("f(*args, **kwargs)"), "f(*args, **kwargs)");
        assert_eq!(rendered("x[*a, b]"), "x[(*a, b)]");
        assert_eq!(rendered("await f()"), "(await f())");
        assert_eq!(rendered("-a.b"), "(- a.b)");
    }

    #[test]
    fn test_empty_index_is_not_a_trailer() {
        let mut parser = parser("x[]");
        assert_eq!(parser.parse_atom_expr().unwrap(), Some(Expr::Identifier(0)));
        assert_eq!(parser.cursor(), 0);
    }

    // ========================================================================
    // Lambdas
    // ========================================================================

    fn lambda(source: &str) -> FuncExpr {
        match parse_expr_source(source).0 {
            Expr::Func(func) => *func,
            other => panic!("expected lambda, got {other:?}"),
        }
    }

    #[test]
    fn test_lambda_without_params() {
        let func = lambda("lambda: 1");
        assert_eq!(func.params, None);
        assert_eq!(func.body, FuncBody::Expr(Box::new(Expr::Integer(2))));
    }

    #[test]
    fn test_lambda_full_param_list() {
        let func = lambda("lambda a, b=2, *rest, c, **named: a");
        let params = func.params.unwrap();
        assert_eq!(params.params.len(), 2);
        assert_eq!(params.params[0], FuncParam { name: 1, default_value: None });
        assert_eq!(params.params[1].default_value, Some(Expr::Integer(5)));
        assert_eq!(params.tuple_rest_param.map(|p| p.name), Some(8));
        assert_eq!(params.named_tuple_params.iter().map(|p| p.name).collect::<Vec<_>>(), vec![10]);
        assert_eq!(params.named_tuple_rest_param.map(|p| p.name), Some(13));
    }

    #[test]
    fn test_lambda_rest_only_params() {
        let params = lambda("lambda *args, key: 0").params.unwrap();
        assert!(params.params.is_empty());
        assert_eq!(params.tuple_rest_param.map(|p| p.name), Some(2));
        assert_eq!(params.named_tuple_params.len(), 1);

        let params = lambda("lambda **kw,: 0").params.unwrap();
        assert_eq!(params.tuple_rest_param, None);
        assert_eq!(params.named_tuple_rest_param.map(|p| p.name), Some(2));

        let params = lambda("lambda (a, b): a").params.unwrap();
        assert_eq!(params.params.len(), 2);
    }

    #[test]
    fn test_lambda_block_body() {
        let func = lambda("lambda x:\n    y = x\n    return y");
        let FuncBody::Block(body) = func.body else {
            panic!("expected block body");
        };
        assert_eq!(body.len(), 2);
        assert!(matches!(body[0], Statement::Assign(_)));
        assert_eq!(body[1], Statement::Return(Some(Expr::Identifier(9))));
    }

    #[test]
    fn test_block_lambda_is_not_an_expression_lambda() {
        let mut parser = parser("lambda x:\n    x");
        assert_eq!(parser.parse_expr().unwrap(), None);
        assert_eq!(parser.cursor(), -1);
    }

    #[test]
    fn test_lambda_binds_looser_than_ternary() {
        let func = lambda("lambda x: a if x else b");
        assert!(matches!(func.body, FuncBody::Expr(body) if matches!(*body, Expr::If(_))));
    }

    // ========================================================================
    // Comprehensions
    // ========================================================================

    fn comprehension_of(source: &str) -> Comprehension {
        match parse_expr_source(source).0 {
            Expr::Comprehension(comprehension) => comprehension,
            other => panic!("expected comprehension, got {other:?}"),
        }
    }

    #[test]
    fn test_where_clauses_attach_to_preceding_for() {
        let comprehension = comprehension_of("[x * y for x in xs where x > 0 for y in ys where y != x where y]");
        assert_eq!(comprehension.kind, ComprehensionKind::List);
        assert_eq!(comprehension.fors.len(), 2);
        assert_eq!(comprehension.fors[0].targets, vec![5]);
        assert_eq!(comprehension.fors[0].where_exprs.len(), 1);
        assert_eq!(comprehension.fors[1].where_exprs.len(), 2);
        assert!(!comprehension.fors[1].is_async);
    }

    #[test]
    fn test_comprehension_kinds() {
        assert_eq!(comprehension_of("(x for x in xs)").kind, ComprehensionKind::Generator);
        assert_eq!(comprehension_of("{x for x in xs}").kind, ComprehensionKind::Set);

        let comprehension = comprehension_of("[k for k, v in pairs]");
        assert_eq!(comprehension.fors[0].targets, vec![3, 5]);
    }

    #[test]
    fn test_async_comprehension() {
        let comprehension = comprehension_of("[x async for x in xs]");
        assert!(comprehension.fors[0].is_async);
    }

    // ========================================================================
    // Statements
    // ========================================================================

    #[test]
    fn test_empty_program() {
        assert_eq!(program("").0, Program::default());
        assert_eq!(program("\n\n# comment\n").0, Program::default());
    }

    #[test]
    fn test_simple_statements() {
        let (program, tokens) = program("x = 1\ny **= 2; z\na, b = b, a\n");
        assert_eq!(program.statements.len(), 4);

        let Statement::Assign(assign) = &program.statements[1] else {
            panic!("expected assignment");
        };
        assert_eq!(tokens[assign.op].data, "**=");
        assert_eq!(program.statements[2], Statement::Expr(Expr::Identifier(8)));

        let Statement::Assign(swap) = &program.statements[3] else {
            panic!("expected assignment");
        };
        assert_eq!(render(&swap.target, &tokens), "(a, b)");
        assert_eq!(render(&swap.value, &tokens), "(b, a)");
    }

    #[test]
    fn test_keyword_statements() {
        let source = "import os.path as p\nfrom a.b import c, d as e\nconst LIMIT = 10; var x\nassert x, 'msg'\nreturn\n";
        let (program, tokens) = program(source);
        assert_eq!(program.statements.len(), 6);

        let Statement::Import(import) = &program.statements[0] else {
            panic!("expected import");
        };
        assert_eq!(import.path.len(), 2);
        assert_eq!(import.alias.map(|i| tokens[i].data.as_str()), Some("p"));

        let Statement::FromImport(from) = &program.statements[1] else {
            panic!("expected from-import");
        };
        assert_eq!(from.names.len(), 2);
        assert_eq!(from.names[1].alias.map(|i| tokens[i].data.as_str()), Some("e"));

        assert!(matches!(&program.statements[2], Statement::Binding(b) if b.value.is_some()));
        assert!(matches!(&program.statements[3], Statement::Binding(b) if b.value.is_none()));
        assert!(matches!(&program.statements[4], Statement::Assert { message: Some(_), .. }));
        assert_eq!(program.statements[5], Statement::Return(None));
    }

    #[test]
    fn test_control_flow_statements() {
        let source = "\
let total = 0
for item in items:
    if item > 10: break
    elif item < 0:
        continue
    else:
        total += item
while total: total -= 1
else: pass
";
        let (program, _) = program(source);
        assert_eq!(program.statements.len(), 3);

        let Statement::For(for_stmt) = &program.statements[1] else {
            panic!("expected for statement");
        };
        assert_eq!(for_stmt.body.len(), 1);
        let Statement::If(if_stmt) = &for_stmt.body[0] else {
            panic!("expected if statement");
        };
        assert!(matches!(if_stmt.body[..], [Statement::Break(_)]));
        assert_eq!(if_stmt.elif_branches.len(), 1);
        assert!(matches!(if_stmt.else_body.as_deref(), Some([Statement::Assign(_)])));

        let Statement::While(while_stmt) = &program.statements[2] else {
            panic!("expected while statement");
        };
        assert!(matches!(while_stmt.else_body.as_deref(), Some([Statement::Pass(_)])));
    }

    #[test]
    fn test_definitions_and_handlers() {
        let source = "\
class Point(Base, metaclass=Meta):
    def norm(self, scale=1) -> float:
        return √(self.x² + self.y²) * scale
try:
    risky()
except ValueError as error:
    raise
except:
    pass
finally:
    cleanup()
match point:
    Point(0, 0): pass
    _:
        yield from others
";
        let (program, tokens) = program(source);
        assert_eq!(program.statements.len(), 3);

        let Statement::Class(class) = &program.statements[0] else {
            panic!("expected class");
        };
        assert_eq!(class.bases.len(), 2);
        let Statement::Def(def) = &class.body[0] else {
            panic!("expected def");
        };
        assert!(!def.is_async);
        assert_eq!(def.params.as_ref().map(|p| p.params.len()), Some(2));
        assert_eq!(def.return_type.as_ref().map(|t| render(t, &tokens)), Some("float".to_string()));
        let Statement::Return(Some(value)) = &def.body[0] else {
            panic!("expected return");
        };
        assert_eq!(render(value, &tokens), "((√ ((self.x ²) + (self.y ²))) * scale)");

        let Statement::Try(try_stmt) = &program.statements[1] else {
            panic!("expected try");
        };
        assert_eq!(try_stmt.handlers.len(), 2);
        assert_eq!(try_stmt.handlers[0].alias.map(|i| tokens[i].data.as_str()), Some("error"));
        assert_eq!(try_stmt.handlers[1].exception, None);
        assert!(try_stmt.finally_body.is_some());

        let Statement::Match(match_stmt) = &program.statements[2] else {
            panic!("expected match");
        };
        assert_eq!(match_stmt.arms.len(), 2);
        assert!(matches!(
            match_stmt.arms[1].body[..],
            [Statement::Yield(Some(YieldArgument::From(_)))]
        ));
    }

    #[test]
    fn test_async_forms() {
        let (program, _) = program("async def main():\n    async for x in stream(): await x\n");
        let Statement::Def(def) = &program.statements[0] else {
            panic!("expected def");
        };
        assert!(def.is_async);
        assert_eq!(def.params, None);
        assert!(matches!(&def.body[0], Statement::For(f) if f.is_async));
    }

    #[test]
    fn test_trailing_indentation_without_newline() {
        assert_eq!(program("x = 1\n    ").0.statements.len(), 1);
        assert_eq!(program("x = 1\n    \n").0.statements.len(), 1);

        let (program, _) = program("if a:\n    x\n        # aside\n    y\n");
        let Statement::If(stmt) = &program.statements[0] else {
            panic!("expected if statement");
        };
        assert_eq!(stmt.body.len(), 2);
    }

    #[test]
    fn test_statement_after_block_lambda() {
        let (program, _) = program("f = lambda x:\n    return x\ny = 1\n");
        assert_eq!(program.statements.len(), 2);
        let Statement::Assign(assign) = &program.statements[0] else {
            panic!("expected assignment");
        };
        assert!(matches!(&assign.value, Expr::Func(func) if matches!(func.body, FuncBody::Block(_))));
    }

    // ========================================================================
    // Hard stops
    // ========================================================================

    #[test]
    fn test_unexpected_token_reports_furthest_position() {
        let err = parse_error("x = = 1");
        assert_eq!((err.message.as_str(), err.row, err.column), ("Unexpected token '='", 0, 4));

        let err = parse_error("x y");
        assert_eq!((err.message.as_str(), err.row, err.column), ("Unexpected token 'y'", 0, 2));
    }

    #[test]
    fn test_unexpected_end_of_input() {
        let err = parse_error("(1 +");
        assert_eq!(err.message, "Unexpected end of input");
        assert_eq!((err.row, err.column), (0, 3));
    }

    #[test]
    fn test_try_requires_handler_or_finally() {
        assert!(parse_error("try:\n    pass\n").message.starts_with("Unexpected"));
    }

    #[test]
    fn test_nesting_depth_limit() {
        let tokens = lexer::lex("((((((1))))))").unwrap();
        let err = parse_with_options(&tokens, ParseOptions { max_depth: 5 }).unwrap_err();
        assert_eq!(err.message, "Maximum nesting depth exceeded");
        assert_eq!((err.row, err.column), (0, 5));

        assert!(parse_with_options(&tokens, ParseOptions { max_depth: 6 }).is_ok());
        assert!(parse(&tokens).is_ok());
    }

    #[test]
    fn test_blocks_count_towards_nesting_depth() {
        let tokens = lexer::lex("if a:\n    if b:\n        x\n").unwrap();
        assert!(parse_with_options(&tokens, ParseOptions { max_depth: 2 }).is_ok());
        let err = parse_with_options(&tokens, ParseOptions { max_depth: 1 }).unwrap_err();
        assert_eq!(err.message, "Maximum nesting depth exceeded");
    }

    #[test]
    fn test_deeply_nested_brackets_parse_with_defaults() {
        let source = format!("x = {}1{}\n", "[".repeat(100), "]".repeat(100));
        assert_eq!(program(&source).0.statements.len(), 1);

        let source = format!("y = {}z{}\n", "(".repeat(200), ")".repeat(200));
        assert_eq!(program(&source).0.statements.len(), 1);
    }
}
