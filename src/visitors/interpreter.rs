use crate::ast::node::{Block, Expression, Node};
use crate::ast::{Parser, Visitor};
use crate::environment::Environment;
use crate::error::InterpreterError;
use crate::output::{Echo, Output};
use crate::token::{Token, TokenKind};
use log::{debug, trace};

type Result<T> = std::result::Result<T, InterpreterError>;

/// Executes an [AST](Block) against a persistent [`Environment`], sending
/// printed text to an [`Output`].
///
/// The environment outlives individual calls to [`Interpreter::interpret`],
/// so a REPL session accumulates variables. A failing statement aborts the
/// call, but declarations made before it are kept.
pub struct Interpreter<O>
where
    O: Output,
{
    environment: Environment,
    output: O,
}

impl<O> Interpreter<O>
where
    O: Output,
{
    #[allow(missing_docs)]
    pub fn new(output: O) -> Self {
        Self {
            environment: Environment::new(),
            output,
        }
    }

    /// Runs every statement in `program`, stopping at the first error.
    pub fn interpret(&mut self, program: &Block) -> Result<()> {
        debug!("Interpreting {} statement(s)", program.statements.len());
        program.accept(self)
    }

    /// Parses and interprets `source`.
    pub fn run(&mut self, source: &str) -> Result<()> {
        let program = Parser::from_string(source).parse()?;
        self.interpret(&program)
    }

    #[allow(missing_docs)]
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    #[allow(missing_docs)]
    pub fn output(&self) -> &O {
        &self.output
    }

    #[allow(missing_docs)]
    pub fn into_output(self) -> O {
        self.output
    }

    fn evaluate(&self, expression: &Expression) -> String {
        self.environment.resolve(&expression.text()).to_string()
    }

    fn evaluate_condition(&self, condition: &Expression) -> bool {
        let Expression::Comparison {
            left,
            operator,
            right,
        } = condition
        else {
            return false;
        };

        let left = self.environment.resolve(left.literal()).parse::<i64>();
        let right = self.environment.resolve(right.literal()).parse::<i64>();

        match (left, right) {
            (Ok(left), Ok(right)) => match operator.literal() {
                ">" => left > right,
                "<" => left < right,
                "==" => left == right,
                _ => false,
            },
            _ => false,
        }
    }

    /// Splits a declaration clause into its name and value.
    fn split_declaration(
        keyword: &Token,
        clause: &[Token],
    ) -> Result<(String, String)> {
        let mut parts = clause.split(|t| t.is_operator("="));

        match (parts.next(), parts.next(), parts.next()) {
            (Some([name]), Some(value), None)
                if name.kind() == TokenKind::Identifier && !value.is_empty() =>
            {
                let value = value
                    .iter()
                    .map(Token::literal)
                    .collect::<Vec<&str>>()
                    .join(" ");

                Ok((name.literal().to_string(), value))
            }
            _ => Err(InterpreterError::DeclarationFormat {
                clause: clause
                    .iter()
                    .map(Token::lexeme)
                    .collect::<Vec<String>>()
                    .join(" "),
                line: keyword.line(),
                column: keyword.column(),
            }),
        }
    }
}

impl<O> Visitor<Result<()>> for Interpreter<O>
where
    O: Output,
{
    fn visit_block(&mut self, block: &Block) -> Result<()> {
        for statement in &block.statements {
            statement.accept(self)?;
        }

        Ok(())
    }

    fn visit_declaration(
        &mut self,
        keyword: &Token,
        clause: &[Token],
    ) -> Result<()> {
        let (name, value) = Self::split_declaration(keyword, clause)?;

        self.output.echo(&Echo::Declaration {
            name: &name,
            value: &value,
        });
        self.environment.declare(name, value);

        Ok(())
    }

    fn visit_print(
        &mut self,
        keyword: &Token,
        expression: &Expression,
    ) -> Result<()> {
        let text = self.evaluate(expression);
        trace!(
            r#"{}:{} Print: "{}""#,
            keyword.line(),
            keyword.column(),
            text
        );
        self.output.print(&text);

        Ok(())
    }

    fn visit_if(
        &mut self,
        keyword: &Token,
        condition: &Expression,
        then_block: &Block,
        otherwise: Option<&Block>,
    ) -> Result<()> {
        let holds = self.evaluate_condition(condition);
        let text = condition.text();

        trace!(
            r#"{}:{} If: "{}" is {}"#,
            keyword.line(),
            keyword.column(),
            text,
            holds
        );
        self.output.echo(&Echo::Condition { text: &text, holds });

        if holds {
            then_block.accept(self)
        } else if let Some(otherwise) = otherwise {
            self.output.echo(&Echo::Otherwise);
            otherwise.accept(self)
        } else {
            Ok(())
        }
    }
}
