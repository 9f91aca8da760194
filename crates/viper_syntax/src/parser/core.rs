/// Parser core types and constructors.
///
/// This chunk defines the [`Parser`] state, the [`Rule`] identities used as memo keys, and the public accessors
/// used by callers and tests to observe the cursor and the memo cache.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a single module.
/// - `cursor` is the index of the last consumed token; `-1` means nothing has been consumed yet.
///
/// Outcome of a grammar rule: a node, no match (`Ok(None)`), or a hard stop.
pub type ParseResult<T> = Result<Option<T>, ParseError>;

/// Identity of a memoized grammar rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    // Literals and layout
    Newline,
    Indent,
    Dedent,
    Identifier,
    Integer,
    Float,
    ImagInteger,
    ImagFloat,
    String,
    ByteString,
    PrefixedString,
    Constant,

    // Operands
    Atom,
    AtomExpr,
    Trailer,
    Arguments,
    Argument,
    DictEntries,
    DictEntry,

    // Precedence chain
    PowerExpr,
    UnaryExpr,
    MulExpr,
    SumExpr,
    ShiftExpr,
    AndExpr,
    XorExpr,
    OrExpr,
    ComparisonExpr,
    NotTest,
    AndTest,
    OrTest,
    Test,

    // Expression lists
    Expr,
    Exprs,
    RestExpr,
    RestExprs,
    IndentableExpr,
    IndentableExprs,
    RestIndentableExpr,
    RestIndentableExprs,
    IndentableExprsOrComprehension,
    YieldArgument,

    // Lambdas
    LambdaParam,
    LambdaParams,
    LambdaExprDef,
    LambdaBlockDef,

    // Comprehensions
    SyncComprehensionFor,
    ComprehensionFor,
    ComprehensionWhere,
    ComprehensionIter,

    // Statements
    Statement,
    SimpleStatement,
    CompoundStatement,
    Block,
    IfStmt,
    WhileStmt,
    ForStmt,
    DefStmt,
    ClassStmt,
    TryStmt,
    MatchStmt,
    MatchArm,
}

/// Parser limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum number of open brackets and indented blocks before parsing stops with
    /// `Maximum nesting depth exceeded`.
    pub max_depth: usize,
}

/// Remaining stack below which a rule continues on a fresh heap segment.
const STACK_RED_ZONE: usize = 32 * 1024;

/// Size of each heap stack segment.
const STACK_SEGMENT: usize = 256 * 1024;

impl Default for ParseOptions {
    fn default() -> Self {
        Self { max_depth: 512 }
    }
}

/// A memoized rule outcome: the node (if the rule matched) and the cursor after it.
struct MemoEntry {
    result: Option<Rc<dyn Any>>,
    end: isize,
}

/// Cursor and position to return to when an alternative fails.
#[derive(Debug, Clone, Copy)]
struct Snapshot {
    cursor: isize,
    row: usize,
    column: isize,
}

/// An operator accepted by a binary chain: one token, or two tokens spelled in sequence (`not in`).
#[derive(Debug, Clone, Copy)]
enum BinaryOperator {
    Single(&'static str),
    Pair(&'static str, &'static str),
}

/// A postfix applied to an atom.
#[derive(Debug, Clone)]
enum Trailer {
    Call(Vec<Argument>),
    Index(Expr),
    Field(TokenIndex),
}

/// Parser state.
///
/// ## Notes
/// - The token buffer is borrowed from the caller ([`Parser::new`]) or owned ([`Parser::from_code`]).
/// - The memo cache lives as long as the parser and is never evicted.
pub struct Parser<'a> {
    tokens: Cow<'a, [Token]>,
    cursor: isize,
    row: usize,
    column: isize,
    cache: HashMap<isize, HashMap<Rule, MemoEntry>>,
    cache_hits: usize,
    /// Brackets and indented blocks currently open.
    depth: usize,
    /// Index of the furthest token any rule looked at.
    furthest: usize,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    /// Create a parser over a token stream produced by [`crate::lexer`].
    pub fn new(tokens: &'a [Token]) -> Self {
        Self::with_options(tokens, ParseOptions::default())
    }

    pub fn with_options(tokens: &'a [Token], options: ParseOptions) -> Self {
        Self::from_tokens(Cow::Borrowed(tokens), options)
    }

    fn from_tokens(tokens: Cow<'a, [Token]>, options: ParseOptions) -> Self {
        Self {
            tokens,
            cursor: -1,
            row: 0,
            column: -1,
            cache: HashMap::new(),
            cache_hits: 0,
            depth: 0,
            furthest: 0,
            options,
        }
    }

    /// Index of the last consumed token, `-1` before the first.
    pub fn cursor(&self) -> isize {
        self.cursor
    }

    /// Row of the last consumed token.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column of the last consumed token.
    pub fn column(&self) -> isize {
        self.column
    }

    /// Number of rule invocations answered from the memo cache.
    pub fn cache_hits(&self) -> usize {
        self.cache_hits
    }

    /// End cursor recorded for `rule` when it was run with the cursor at `cursor`.
    ///
    /// Failed attempts are memoized too; their end is the start cursor.
    pub fn memoized_end(&self, cursor: isize, rule: Rule) -> Option<isize> {
        self.cache.get(&cursor)?.get(&rule).map(|entry| entry.end)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Move the cursor back to the start of the stream, keeping the memo cache.
    pub fn rewind(&mut self) {
        self.seek(-1);
    }
}

impl Parser<'static> {
    /// Lex `code` and create a parser that owns the resulting tokens.
    ///
    /// ## Errors
    /// Returns the [`LexError`] if `code` does not lex.
    pub fn from_code(code: &str) -> Result<Self, LexError> {
        let tokens = lexer::lex(code)?;
        Ok(Self::from_tokens(Cow::Owned(tokens), ParseOptions::default()))
    }
}
