use crate::ast::visitor::Visitor;
use crate::token::Token;

/// [Node] accepts a [Visitor], according to the [Visitor pattern].
///
/// [Visitor pattern]: https://en.wikipedia.org/wiki/Visitor_pattern
pub trait Node<T>: std::fmt::Debug {
    /// Dispatches to the matching `visit_*` method of `visitor`.
    fn accept(&self, visitor: &mut dyn Visitor<T>) -> T;
}

/// Ordered sequence of statements. The root of every parsed program is a
/// [`Block`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Block {
    #[allow(missing_docs)]
    pub statements: Vec<Statement>,
}

impl Block {
    #[allow(missing_docs)]
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl<T> Node<T> for Block {
    fn accept(&self, visitor: &mut dyn Visitor<T>) -> T {
        visitor.visit_block(self)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Statement {
    /// `declare name = value`. The clause is every token after the keyword
    /// on the same line; it is validated when the statement runs.
    Declaration { keyword: Token, clause: Vec<Token> },
    /// `displayln(expression)`
    Print {
        keyword: Token,
        expression: Expression,
    },
    /// `if condition { ... }`, optionally followed by `otherwise { ... }`.
    If {
        keyword: Token,
        condition: Expression,
        then_block: Block,
        otherwise: Option<Block>,
    },
}

impl<T> Node<T> for Statement {
    fn accept(&self, visitor: &mut dyn Visitor<T>) -> T {
        visitor.visit_statement(self)
    }
}

/// The tokens between `displayln(` and `)`, or between `if` and `{`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    /// A single identifier, number or string.
    Operand(Token),
    /// `left op right`, with `op` one of `>`, `<` or `==`.
    Comparison {
        #[allow(missing_docs)]
        left: Token,
        #[allow(missing_docs)]
        operator: Token,
        #[allow(missing_docs)]
        right: Token,
    },
    /// Any other run of tokens, possibly empty.
    Text(Vec<Token>),
}

impl Expression {
    /// Classifies a run of expression tokens.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        match tokens.as_slice() {
            [token] if token.kind().is_operand() => {
                Expression::Operand(token.clone())
            }
            [left, operator, right]
                if left.kind().is_operand()
                    && operator.is_comparison()
                    && right.kind().is_operand() =>
            {
                Expression::Comparison {
                    left: left.clone(),
                    operator: operator.clone(),
                    right: right.clone(),
                }
            }
            _ => Expression::Text(tokens),
        }
    }

    /// The expression's literals, separated by single spaces.
    pub fn text(&self) -> String {
        match self {
            Expression::Operand(token) => token.literal().to_string(),
            Expression::Comparison {
                left,
                operator,
                right,
            } => format!(
                "{} {} {}",
                left.literal(),
                operator.literal(),
                right.literal()
            ),
            Expression::Text(tokens) => tokens
                .iter()
                .map(Token::literal)
                .collect::<Vec<&str>>()
                .join(" "),
        }
    }
}
