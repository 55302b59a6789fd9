use crate::token::{Token, TokenKind, KEYWORDS};
use buffered_iterator::{Buffered, BufferedIterator};
use log::{debug, trace};
use std::str::Chars;

/// Converts source text into [`Token`]s, one at a time.
///
/// Unrecognized characters do not stop the lexer; they are returned as
/// [`TokenKind::Error`] tokens and left for the parser to report.
pub struct Lexer<'a> {
    buffer: BufferedIterator<Chars<'a>>,
    line: usize,
    column: usize,
    exhausted: bool,
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    /// Yields every token up to and including the first
    /// [`TokenKind::EndOfInput`], then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let token = self.next_token();

        if token.kind == TokenKind::EndOfInput {
            self.exhausted = true;
        }

        Some(token)
    }
}

impl<'a> Lexer<'a> {
    /// Create a new [`Lexer`] over `input_text`.
    pub fn new<S: AsRef<str> + ?Sized>(input_text: &'a S) -> Self {
        let input_text = input_text.as_ref();
        debug!("Creating lexer:\n{}", input_text);

        Self {
            buffer: input_text.chars().buffered(),
            line: 1,
            column: 1,
            exhausted: false,
        }
    }

    /// Returns the next token. Once the input is exhausted this returns
    /// [`TokenKind::EndOfInput`] on every call.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let (line, column) = (self.line, self.column);

        let token = match self.advance() {
            None => Token::new(TokenKind::EndOfInput, "", line, column),
            Some('=') => {
                if self.buffer.next_if(|c| *c == '=').is_some() {
                    self.column += 1;
                    Token::new(TokenKind::Operator, "==", line, column)
                } else {
                    Token::new(TokenKind::Operator, "=", line, column)
                }
            }
            Some(c @ ('>' | '<' | '(' | ')' | '{' | '}')) => {
                Token::new(TokenKind::Operator, c, line, column)
            }
            Some('"') => {
                Token::new(TokenKind::String, self.string(), line, column)
            }
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                let word =
                    self.run(c, |c| c.is_ascii_alphanumeric() || *c == '_');

                let kind = if KEYWORDS.contains(&word.as_str()) {
                    TokenKind::Keyword
                } else {
                    TokenKind::Identifier
                };

                Token::new(kind, word, line, column)
            }
            Some(c) if c.is_ascii_digit() => {
                Token::new(
                    TokenKind::Number,
                    self.run(c, char::is_ascii_digit),
                    line,
                    column,
                )
            }
            Some(c) => Token::new(TokenKind::Error, c, line, column),
        };

        trace!("{}", token);
        token
    }

    fn advance(&mut self) -> Option<char> {
        let current = self.buffer.next();

        if current == Some('\n') {
            self.line += 1;
            self.column = 1;
        } else if current.is_some() {
            self.column += 1;
        }

        current
    }

    fn skip_whitespace(&mut self) {
        while self
            .buffer
            .peek()
            .map_or(false, |c| matches!(*c, ' ' | '\t' | '\n' | '\r'))
        {
            self.advance();
        }
    }

    /// Collects `first` and the run of characters after it matching
    /// `predicate`. The run never contains a newline.
    fn run<P>(&mut self, first: char, predicate: P) -> String
    where
        P: Fn(&char) -> bool,
    {
        let rest = self.buffer.next_while(predicate);
        self.column += rest.len();

        std::iter::once(first).chain(rest).collect()
    }

    /// Reads up to the closing quote, which is consumed. An unterminated
    /// string ends at the end of input.
    fn string(&mut self) -> String {
        let mut string = String::new();

        while let Some(c) = self.advance() {
            if c == '"' {
                break;
            }
            string.push(c);
        }

        string
    }
}
