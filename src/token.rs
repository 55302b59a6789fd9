use std::fmt;

/// Words the [`Lexer`](crate::lexer::Lexer) classifies as
/// [`TokenKind::Keyword`]. `case` is reserved but has no statement form yet.
pub const KEYWORDS: [&str; 5] =
    ["declare", "displayln", "if", "case", "otherwise"];

/// Operators that compare two operands in a condition.
pub const COMPARISON_OPERATORS: [&str; 3] = [">", "<", "=="];

/// Represents the kind of a [`Token`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum TokenKind {
    Keyword,
    Operator,
    Identifier,
    Number,
    String,
    EndOfInput,
    Error,
}

impl TokenKind {
    /// Whether a token of this kind can stand for a value.
    pub fn is_operand(self) -> bool {
        matches!(self, Self::Identifier | Self::Number | Self::String)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Keyword => "keyword",
            Self::Operator => "operator",
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::String => "string",
            Self::EndOfInput => "end of input",
            Self::Error => "invalid character",
        };

        write!(f, "{name}")
    }
}

/// KSM Token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) literal: String,
    pub(crate) line: usize,
    pub(crate) column: usize,
}

impl Token {
    /// Create a new [`Token`].
    pub fn new<S: Into<String>>(
        kind: TokenKind,
        literal: S,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            kind,
            literal: literal.into(),
            line,
            column,
        }
    }

    #[allow(missing_docs)]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Get a reference to the token's literal. String tokens hold their
    /// contents without quotes.
    pub fn literal(&self) -> &str {
        &self.literal
    }

    #[allow(missing_docs)]
    pub fn line(&self) -> usize {
        self.line
    }

    #[allow(missing_docs)]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Whether this is the keyword `keyword`.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Keyword && self.literal == keyword
    }

    /// Whether this is the operator `operator`.
    pub fn is_operator(&self, operator: &str) -> bool {
        self.kind == TokenKind::Operator && self.literal == operator
    }

    /// Whether this is one of [`COMPARISON_OPERATORS`].
    pub fn is_comparison(&self) -> bool {
        self.kind == TokenKind::Operator
            && COMPARISON_OPERATORS.contains(&self.literal.as_str())
    }

    /// The token as it would appear in source.
    pub fn lexeme(&self) -> String {
        match self.kind {
            TokenKind::String => format!("\"{}\"", self.literal),
            _ => self.literal.clone(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {:?} {:?}",
            self.line, self.column, self.kind, self.literal
        )
    }
}
