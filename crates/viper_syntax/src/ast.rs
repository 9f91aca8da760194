//! Abstract Syntax Tree definitions for Viper
//!
//! The AST is a thin index layer over the token buffer: leaf nodes store the [`TokenIndex`] of the token that
//! produced them instead of copying its text. Composite nodes own their children exclusively.
//!
//! ## Notes
//! - Resolve a leaf against the token buffer the parser was built from (`tokens[index].data`).
//! - Nodes are never mutated after construction; a failed parse path drops its partial nodes.
//! - [`Operator`] keeps one or two token indices so two-word operators (`not in`, `is not`) stay index-based too.

use crate::lexer::Token;

/// Position of a token in the buffer handed to the parser.
pub type TokenIndex = usize;

// ============================================================================
// Program and statements
// ============================================================================

/// A whole source file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Pass(TokenIndex),
    Break(TokenIndex),
    Continue(TokenIndex),
    /// `return value?`
    Return(Option<Expr>),
    /// `raise exception?`
    Raise(Option<Expr>),
    /// `yield argument?`
    Yield(Option<YieldArgument>),
    /// `assert test, message?`
    Assert { test: Expr, message: Option<Expr> },
    /// `let x = value`, `var x`, `const x = value`, `val x = value`
    Binding(BindingStmt),
    /// `import a.b as c`
    Import(ImportStmt),
    /// `from a.b import c, d as e`
    FromImport(FromImportStmt),
    /// `x = value`, `a, b += value`
    Assign(AssignStmt),
    /// Expression statement
    Expr(Expr),
    If(IfStmt),
    While(WhileStmt),
    For(ForStmt),
    Def(DefStmt),
    Class(ClassStmt),
    Try(TryStmt),
    Match(MatchStmt),
}

#[derive(Debug, Clone, PartialEq)]
pub enum YieldArgument {
    /// `yield from iterable`
    From(Expr),
    Value(Expr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BindingStmt {
    /// The `let`/`var`/`const`/`val` keyword.
    pub keyword: TokenIndex,
    pub name: TokenIndex,
    pub value: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportStmt {
    pub path: Vec<TokenIndex>,
    pub alias: Option<TokenIndex>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportName {
    pub name: TokenIndex,
    pub alias: Option<TokenIndex>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FromImportStmt {
    pub path: Vec<TokenIndex>,
    pub names: Vec<ImportName>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub target: Expr,
    /// `=` or an augmented assignment delimiter (`+=`, `**=`, ...).
    pub op: TokenIndex,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub body: Vec<Statement>,
    pub elif_branches: Vec<(Expr, Vec<Statement>)>,
    pub else_body: Option<Vec<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Vec<Statement>,
    pub else_body: Option<Vec<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub is_async: bool,
    pub targets: Vec<TokenIndex>,
    pub iterable: Expr,
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DefStmt {
    pub is_async: bool,
    pub name: TokenIndex,
    pub params: Option<FuncParams>,
    pub return_type: Option<Expr>,
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassStmt {
    pub name: TokenIndex,
    pub bases: Vec<Argument>,
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExceptClause {
    pub exception: Option<Expr>,
    pub alias: Option<TokenIndex>,
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TryStmt {
    pub body: Vec<Statement>,
    pub handlers: Vec<ExceptClause>,
    pub else_body: Option<Vec<Statement>>,
    pub finally_body: Option<Vec<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchStmt {
    pub subject: Expr,
    pub arms: Vec<MatchArm>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchArm {
    pub pattern: Expr,
    pub body: Vec<Statement>,
}

// ============================================================================
// Layout
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Newline(pub TokenIndex);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(pub TokenIndex);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dedent(pub TokenIndex);

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(TokenIndex),
    /// Decimal, binary, octal or hexadecimal integer.
    Integer(TokenIndex),
    Float(TokenIndex),
    ImagInteger(TokenIndex),
    ImagFloat(TokenIndex),
    String(TokenIndex),
    ByteString(TokenIndex),
    PrefixedString(TokenIndex),
    /// `True`, `False`, `None`, `true`, `false`
    Constant(TokenIndex),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    If(IfExpr),
    /// `lambda`
    Func(Box<FuncExpr>),
    /// `*expr`
    TupleRest(Box<Expr>),
    /// `**expr`
    NamedTupleRest(Box<Expr>),
    Tuple(Vec<Expr>),
    List(Vec<Expr>),
    Set(Vec<Expr>),
    Dict(Vec<DictEntry>),
    Comprehension(Comprehension),
    Call { callee: Box<Expr>, arguments: Vec<Argument> },
    Index { target: Box<Expr>, index: Box<Expr> },
    Field { target: Box<Expr>, name: TokenIndex },
    Await(Box<Expr>),
}

/// An operator token, or the two tokens of a two-word operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operator {
    pub op: TokenIndex,
    pub second: Option<TokenIndex>,
}

impl Operator {
    pub fn new(op: TokenIndex) -> Self {
        Self { op, second: None }
    }

    pub fn pair(op: TokenIndex, second: TokenIndex) -> Self {
        Self {
            op,
            second: Some(second),
        }
    }

    /// Classify this operator as a binary operator using the token buffer it indexes.
    pub fn binary_kind(&self, tokens: &[Token]) -> Option<BinaryOpKind> {
        let first = tokens.get(self.op)?;
        let second = match self.second {
            Some(index) => Some(tokens.get(index)?.data.as_str()),
            None => None,
        };
        BinaryOpKind::from_spelling(&first.data, second)
    }

    /// Classify this operator as a unary operator using the token buffer it indexes.
    pub fn unary_kind(&self, tokens: &[Token]) -> Option<UnaryOpKind> {
        if self.second.is_some() {
            return None;
        }
        UnaryOpKind::from_spelling(&tokens.get(self.op)?.data)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub expr: Box<Expr>,
    pub op: Operator,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub lhs: Box<Expr>,
    pub op: Operator,
    pub rhs: Box<Expr>,
}

/// `if_expr if condition else else_expr`
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub if_expr: Box<Expr>,
    pub condition: Box<Expr>,
    pub else_expr: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncParam {
    pub name: TokenIndex,
    pub default_value: Option<Expr>,
}

/// `a, b=1, *rest, c, **named`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FuncParams {
    pub params: Vec<FuncParam>,
    pub tuple_rest_param: Option<FuncParam>,
    /// Parameters after `*rest`; they can only be passed by name.
    pub named_tuple_params: Vec<FuncParam>,
    pub named_tuple_rest_param: Option<FuncParam>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FuncBody {
    /// `lambda x: x + 1`
    Expr(Box<Expr>),
    /// `lambda x:` followed by an indented block
    Block(Vec<Statement>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncExpr {
    pub params: Option<FuncParams>,
    pub body: FuncBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DictEntry {
    /// `key: value`
    Pair { key: Expr, value: Expr },
    /// `**mapping`
    Rest(Expr),
}

/// Call argument: positional (`f(x)`, `f(*xs)`) or named (`f(x=1)`).
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub name: Option<TokenIndex>,
    pub value: Expr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComprehensionKind {
    /// `(x for x in xs)`
    Generator,
    /// `[x for x in xs]`
    List,
    /// `{x for x in xs}`
    Set,
}

/// `async? for targets in in_expr (where filter)*`
#[derive(Debug, Clone, PartialEq)]
pub struct ComprehensionFor {
    pub targets: Vec<TokenIndex>,
    pub in_expr: Box<Expr>,
    pub where_exprs: Vec<Expr>,
    pub is_async: bool,
}

/// A clause following the first `for` of a comprehension.
#[derive(Debug, Clone, PartialEq)]
pub enum ComprehensionIter {
    For(ComprehensionFor),
    /// Filter attached to the closest preceding `for`.
    Where(Expr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comprehension {
    pub kind: ComprehensionKind,
    pub expr: Box<Expr>,
    pub fors: Vec<ComprehensionFor>,
}

/// A comma-separated expression list, remembering whether it ended with a comma.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprList {
    pub exprs: Vec<Expr>,
    pub trailing_comma: bool,
}

impl ExprList {
    /// A single expression without a trailing comma stands for itself; anything else is a tuple.
    pub fn into_expr(mut self) -> Expr {
        if self.exprs.len() == 1 && !self.trailing_comma {
            if let Some(expr) = self.exprs.pop() {
                return expr;
            }
        }
        Expr::Tuple(self.exprs)
    }
}

/// Contents of a bracketed display: plain expressions or a comprehension.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprsOrComprehension {
    Exprs(ExprList),
    Comprehension { expr: Box<Expr>, fors: Vec<ComprehensionFor> },
}

// ============================================================================
// Operator kinds
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOpKind {
    Power,
    Mul,
    MatMul,
    Div,
    Mod,
    IntegerDiv,
    Plus,
    Minus,
    ShiftLeft,
    ShiftRight,
    BinaryAnd,
    BinaryXor,
    BinaryOr,
    LessThan,
    GreaterThan,
    Equal,
    LessEqual,
    GreaterEqual,
    NotEqual,
    In,
    NotIn,
    Is,
    IsNot,
    And,
    Or,
}

impl BinaryOpKind {
    pub fn from_spelling(op: &str, second: Option<&str>) -> Option<Self> {
        let kind = match (op, second) {
            ("^", None) => BinaryOpKind::Power,
            ("*", None) => BinaryOpKind::Mul,
            ("@", None) => BinaryOpKind::MatMul,
            ("/", None) => BinaryOpKind::Div,
            ("%", None) => BinaryOpKind::Mod,
            ("//", None) => BinaryOpKind::IntegerDiv,
            ("+", None) => BinaryOpKind::Plus,
            ("-", None) => BinaryOpKind::Minus,
            ("<<", None) => BinaryOpKind::ShiftLeft,
            (">>", None) => BinaryOpKind::ShiftRight,
            ("&", None) => BinaryOpKind::BinaryAnd,
            ("||", None) => BinaryOpKind::BinaryXor,
            ("|", None) => BinaryOpKind::BinaryOr,
            ("<", None) => BinaryOpKind::LessThan,
            (">", None) => BinaryOpKind::GreaterThan,
            ("==", None) => BinaryOpKind::Equal,
            ("<=", None) => BinaryOpKind::LessEqual,
            (">=", None) => BinaryOpKind::GreaterEqual,
            ("!=", None) => BinaryOpKind::NotEqual,
            ("in", None) => BinaryOpKind::In,
            ("not", Some("in")) => BinaryOpKind::NotIn,
            ("is", None) => BinaryOpKind::Is,
            ("is", Some("not")) => BinaryOpKind::IsNot,
            ("and", None) => BinaryOpKind::And,
            ("or", None) => BinaryOpKind::Or,
            _ => return None,
        };
        Some(kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOpKind {
    Plus,
    Minus,
    BinaryNot,
    Not,
    Square,
    Root,
}

impl UnaryOpKind {
    pub fn from_spelling(op: &str) -> Option<Self> {
        let kind = match op {
            "+" => UnaryOpKind::Plus,
            "-" => UnaryOpKind::Minus,
            "~" => UnaryOpKind::BinaryNot,
            "not" => UnaryOpKind::Not,
            "²" => UnaryOpKind::Square,
            "√" => UnaryOpKind::Root,
            _ => return None,
        };
        Some(kind)
    }
}
