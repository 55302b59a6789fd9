use crate::ast::node::{Block, Expression, Statement};
use crate::error::ParserError;
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};
use buffered_iterator::{Buffered, BufferedIterator};
use log::trace;

type Result<T> = std::result::Result<T, ParserError>;

/// Reads a stream of [Token]s and builds an Abstract Syntax Tree.
pub struct Parser<I>
where
    I: Iterator<Item = Token>,
{
    tokens: BufferedIterator<I>,
    depth: u64,
    // Stands in for the stream's own end of input once it runs dry.
    end_of_input: Token,
}

impl<'a> Parser<Lexer<'a>> {
    /// Create a [`Parser<Lexer<'a>>`] from a string.
    pub fn from_string<S: AsRef<str> + ?Sized>(input_text: &'a S) -> Self {
        Self::new(Lexer::new(input_text))
    }
}

impl<I> Parser<I>
where
    I: Iterator<Item = Token>,
{
    /// Blocks nested deeper than this are rejected.
    pub const MAX_DEPTH: u64 = 48;

    /// Create a [Parser] from an [Iterator] returning [Token]s.
    pub fn new(iterator: I) -> Self {
        Self {
            tokens: iterator.buffered(),
            depth: 0,
            end_of_input: Token::new(TokenKind::EndOfInput, "", 1, 1),
        }
    }

    /// Run [Parser] to create an Abstract Syntax Tree.
    pub fn parse(&mut self) -> Result<Block> {
        let program = self.statements()?;

        let token = self.peek();

        if token.kind() == TokenKind::EndOfInput {
            Ok(program)
        } else {
            // Only an unmatched "}" stops the top level early.
            Err(ParserError::unexpected("statement", token.clone()))
        }
    }

    fn peek(&mut self) -> &Token {
        let end_of_input = &self.end_of_input;
        self.tokens.peek().unwrap_or(end_of_input)
    }

    /// Consumes the current token. End of input is never consumed.
    fn advance(&mut self) -> Token {
        let token = match self.tokens.next() {
            Some(token) => token,
            None => return self.end_of_input.clone(),
        };

        if token.kind() == TokenKind::EndOfInput {
            self.end_of_input = token.clone();
            self.tokens.unget(token.clone());
        } else {
            self.end_of_input = Token::new(
                TokenKind::EndOfInput,
                "",
                token.line(),
                token.column() + token.lexeme().chars().count(),
            );
        }

        token
    }

    fn consume(&mut self, operator: &str) -> Result<Token> {
        if self.peek().is_operator(operator) {
            Ok(self.advance())
        } else {
            Err(ParserError::unexpected(
                format!(r#""{operator}""#),
                self.peek().clone(),
            ))
        }
    }

    /// Depth Prefix
    fn dp(&self) -> String {
        (0..self.depth).map(|i| (i % 10).to_string()).collect()
    }

    // Grammar functions
    fn statements(&mut self) -> Result<Block> {
        // Statement*
        if self.depth >= Self::MAX_DEPTH {
            return Err(ParserError::MaxDepth(Self::MAX_DEPTH));
        }

        self.depth += 1;
        trace!("{} Block", self.dp());

        let statements = self.statement_list();

        self.depth -= 1;
        statements.map(Block::new)
    }

    fn statement_list(&mut self) -> Result<Vec<Statement>> {
        let mut statements = Vec::new();

        loop {
            let token = self.peek();

            if token.kind() == TokenKind::EndOfInput || token.is_operator("}")
            {
                break;
            }

            statements.push(self.statement()?);
        }

        Ok(statements)
    }

    fn braced_block(&mut self) -> Result<Block> {
        // "{" Statement* "}"
        self.consume("{")?;
        let block = self.statements()?;
        self.consume("}")?;

        Ok(block)
    }

    fn statement(&mut self) -> Result<Statement> {
        // Declaration | Print | If
        let token = self.advance();

        trace!(r#"{} Statement: "{}""#, self.dp(), token.literal());

        if token.kind() != TokenKind::Keyword {
            return Err(ParserError::unexpected("statement", token));
        }

        let keyword = token.literal().to_string();

        match keyword.as_str() {
            "declare" => self.declaration(token),
            "displayln" => self.print(token),
            "if" => self.if_statement(token),
            "otherwise" => Err(ParserError::UnpairedOtherwise {
                line: token.line(),
                column: token.column(),
            }),
            _ => Err(ParserError::unexpected("statement", token)),
        }
    }

    fn declaration(&mut self, keyword: Token) -> Result<Statement> {
        // "declare" Clause
        let mut clause = Vec::new();

        loop {
            let token = self.peek();

            if token.kind() == TokenKind::Error {
                return Err(ParserError::unexpected(
                    "declaration",
                    token.clone(),
                ));
            }

            if token.line() != keyword.line()
                || token.is_operator("}")
                || matches!(
                    token.kind(),
                    TokenKind::EndOfInput | TokenKind::Keyword
                )
            {
                break;
            }

            clause.push(self.advance());
        }

        trace!(
            "{} Declaration: {}",
            self.dp(),
            clause
                .iter()
                .map(Token::lexeme)
                .collect::<Vec<String>>()
                .join(" ")
        );

        Ok(Statement::Declaration { keyword, clause })
    }

    fn print(&mut self, keyword: Token) -> Result<Statement> {
        // "displayln" "(" Expression ")"
        self.consume("(")?;
        let expression = self.expression(")")?;
        self.consume(")")?;

        Ok(Statement::Print {
            keyword,
            expression,
        })
    }

    fn if_statement(&mut self, keyword: Token) -> Result<Statement> {
        // "if" Expression Block ( "otherwise" Block )?
        let condition = self.expression("{")?;
        let then_block = self.braced_block()?;

        let otherwise = if self.peek().is_keyword("otherwise") {
            self.advance();
            trace!("{} Otherwise", self.dp());
            Some(self.braced_block()?)
        } else {
            None
        };

        Ok(Statement::If {
            keyword,
            condition,
            then_block,
            otherwise,
        })
    }

    fn expression(&mut self, terminator: &str) -> Result<Expression> {
        // ( Identifier | Number | String | "=" | "==" | "<" | ">" )*
        let mut tokens = Vec::new();

        loop {
            let token = self.peek();

            if token.is_operator(terminator) {
                break;
            }

            let allowed = token.kind().is_operand()
                || token.is_operator("=")
                || token.is_comparison();

            if !allowed {
                return Err(ParserError::unexpected(
                    format!(r#"expression or "{terminator}""#),
                    token.clone(),
                ));
            }

            tokens.push(self.advance());
        }

        let expression = Expression::from_tokens(tokens);
        trace!("{} Expression: {}", self.dp(), expression.text());

        Ok(expression)
    }
}
