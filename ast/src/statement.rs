use std::fmt;

use lexer::Token;

use crate::expression::{Block, Expression, Identifier};

/// A top-level or block-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let {
        token: Token,
        name: Identifier,
        value: Expression,
    },
    Return {
        token: Token,
        value: Expression,
    },
    ExpressionStatement {
        token: Token,
        expression: Expression,
    },
    Block(Block),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { name, value, .. } => write!(f, "let {name} = {value};"),
            Statement::Return { value, .. } => write!(f, "return {value};"),
            Statement::ExpressionStatement { expression, .. } => write!(f, "{expression}"),
            Statement::Block(block) => write!(f, "{block}"),
        }
    }
}
