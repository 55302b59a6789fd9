use crate::ast::node::{Block, Expression, Statement};
use crate::token::Token;

/// [Visitor] visits [Node](crate::ast::Node)s and returns `T`.
pub trait Visitor<T> {
    #[allow(missing_docs)]
    fn visit_block(&mut self, block: &Block) -> T;

    #[allow(missing_docs)]
    fn visit_statement(&mut self, statement: &Statement) -> T {
        match statement {
            Statement::Declaration { keyword, clause } => {
                self.visit_declaration(keyword, clause)
            }
            Statement::Print {
                keyword,
                expression,
            } => self.visit_print(keyword, expression),
            Statement::If {
                keyword,
                condition,
                then_block,
                otherwise,
            } => self.visit_if(
                keyword,
                condition,
                then_block,
                otherwise.as_ref(),
            ),
        }
    }

    #[allow(missing_docs)]
    fn visit_declaration(&mut self, keyword: &Token, clause: &[Token]) -> T;

    #[allow(missing_docs)]
    fn visit_print(&mut self, keyword: &Token, expression: &Expression) -> T;

    #[allow(missing_docs)]
    fn visit_if(
        &mut self,
        keyword: &Token,
        condition: &Expression,
        then_block: &Block,
        otherwise: Option<&Block>,
    ) -> T;
}
