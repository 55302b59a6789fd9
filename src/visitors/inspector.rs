use crate::ast::node::{Block, Expression, Node};
use crate::ast::Visitor;
use crate::token::Token;

const INDENT: &str = "  ";

/// Renders an AST as an indented tree, one node per line.
#[derive(Default)]
pub struct Inspector {
    depth: usize,
}

impl Inspector {
    /// Renders `program`.
    pub fn inspect(program: &Block) -> String {
        program.accept(&mut Inspector::default())
    }

    fn line(&self, text: &str) -> String {
        format!("{}{}\n", INDENT.repeat(self.depth), text)
    }

    fn nested(&mut self, block: &Block) -> String {
        self.depth += 1;
        let rendered = block.accept(self);
        self.depth -= 1;

        rendered
    }

    fn position(token: &Token) -> String {
        format!("{}:{}", token.line(), token.column())
    }
}

impl Visitor<String> for Inspector {
    fn visit_block(&mut self, block: &Block) -> String {
        let mut rendered = self.line("Block");

        self.depth += 1;
        for statement in &block.statements {
            rendered.push_str(&statement.accept(self));
        }
        self.depth -= 1;

        rendered
    }

    fn visit_declaration(
        &mut self,
        keyword: &Token,
        clause: &[Token],
    ) -> String {
        let clause = clause
            .iter()
            .map(Token::lexeme)
            .collect::<Vec<String>>()
            .join(" ");

        self.line(&format!(
            "Declaration ({}): {}",
            Self::position(keyword),
            clause
        ))
    }

    fn visit_print(
        &mut self,
        keyword: &Token,
        expression: &Expression,
    ) -> String {
        self.line(&format!(
            "Print ({}): {}",
            Self::position(keyword),
            describe(expression)
        ))
    }

    fn visit_if(
        &mut self,
        keyword: &Token,
        condition: &Expression,
        then_block: &Block,
        otherwise: Option<&Block>,
    ) -> String {
        let mut rendered = self.line(&format!(
            "If ({}): {}",
            Self::position(keyword),
            describe(condition)
        ));

        rendered.push_str(&self.nested(then_block));

        if let Some(otherwise) = otherwise {
            rendered.push_str(&self.line("Otherwise"));
            rendered.push_str(&self.nested(otherwise));
        }

        rendered
    }
}

fn describe(expression: &Expression) -> String {
    match expression {
        Expression::Operand(token) => format!("Operand {}", token.lexeme()),
        Expression::Comparison {
            left,
            operator,
            right,
        } => format!(
            "Comparison {} {} {}",
            left.lexeme(),
            operator.literal(),
            right.lexeme()
        ),
        Expression::Text(tokens) => format!(
            "Text [{}]",
            tokens
                .iter()
                .map(Token::lexeme)
                .collect::<Vec<String>>()
                .join(" ")
        ),
    }
}
