use crate::token::{Token, TokenKind};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
/// Error from the [parser](crate::ast::parser) module.
pub enum ParserError {
    /// Unexpected [`Token`].
    #[error(
        r#"Expected {expected}, got {} "{}" at {}:{}"#,
        .found.kind(), .found.literal(), .found.line(), .found.column()
    )]
    UnexpectedToken {
        /// What the grammar required at this position.
        expected: String,
        /// The offending token.
        found: Token,
    },

    /// Input ended inside a construct.
    #[error("Unexpected end of input at {line}:{column}, expected {expected}")]
    UnexpectedEndOfInput {
        /// What the grammar required at this position.
        expected: String,
        /// Line of the end of input.
        line: usize,
        /// Column of the end of input.
        column: usize,
    },

    /// The lexer did not recognize a character.
    #[error(r#"Invalid character "{character}" at {line}:{column}"#)]
    InvalidCharacter {
        /// The unrecognized character.
        character: String,
        /// Line of the character.
        line: usize,
        /// Column of the character.
        column: usize,
    },

    /// `otherwise` without an `if` block right before it.
    #[error("\"otherwise\" at {line}:{column} does not follow an if block")]
    UnpairedOtherwise {
        /// Line of the `otherwise` keyword.
        line: usize,
        /// Column of the `otherwise` keyword.
        column: usize,
    },

    /// Maximum nesting depth exceeded.
    #[error("Maximum nesting depth, {0}, exceeded!")]
    MaxDepth(u64),
}

impl ParserError {
    /// Creates the error for `found` appearing where `expected` should be.
    pub(crate) fn unexpected<S: Into<String>>(
        expected: S,
        found: Token,
    ) -> Self {
        match found.kind() {
            TokenKind::EndOfInput => Self::UnexpectedEndOfInput {
                expected: expected.into(),
                line: found.line(),
                column: found.column(),
            },
            TokenKind::Error => Self::InvalidCharacter {
                character: found.literal().to_string(),
                line: found.line(),
                column: found.column(),
            },
            _ => Self::UnexpectedToken {
                expected: expected.into(),
                found,
            },
        }
    }

    /// Whether input ended inside a block that is still waiting for its
    /// closing `}`. Nothing else can be completed by reading more lines.
    pub fn is_incomplete(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedEndOfInput { expected, .. } if expected == r#""}""#
        )
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
/// Error from the [interpreter](crate::visitors::interpreter) module.
pub enum InterpreterError {
    /// `declare` clause does not split into `name = value`.
    #[error(r#"Invalid variable declaration at {line}:{column}: "{clause}""#)]
    DeclarationFormat {
        /// The clause as written after `declare`.
        clause: String,
        /// Line of the `declare` keyword.
        line: usize,
        /// Column of the `declare` keyword.
        column: usize,
    },

    #[error("Parser error: {0}")]
    /// Source passed to [`Interpreter::run`] did not parse.
    ///
    /// [`Interpreter::run`]: crate::visitors::Interpreter::run
    Parser(#[from] ParserError),
}
