use std::fmt;

use lexer::Token;

use crate::statement::Statement;

/// A bare name — used both as an expression and, inside `let` bindings
/// and function parameter lists, as a binder.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub name: String,
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A brace-delimited sequence of statements — a function body or an
/// `if`/`else` branch.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub token: Token,
    pub statements: Vec<Statement>,
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

/// An expression node. Every variant retains its originating token so
/// diagnostics can point back at source text.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral {
        token: Token,
        value: i64,
    },
    BooleanLiteral {
        token: Token,
        value: bool,
    },
    StringLiteral {
        token: Token,
        value: String,
    },
    Prefix {
        token: Token,
        operator: String,
        right: Box<Expression>,
    },
    Infix {
        token: Token,
        left: Box<Expression>,
        operator: String,
        right: Box<Expression>,
    },
    If {
        token: Token,
        condition: Box<Expression>,
        consequence: Block,
        alternative: Option<Block>,
    },
    FunctionLiteral {
        token: Token,
        parameters: Vec<Identifier>,
        body: Block,
    },
    Call {
        token: Token,
        function: Box<Expression>,
        arguments: Vec<Expression>,
    },
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(identifier) => write!(f, "{identifier}"),
            Expression::IntegerLiteral { value, .. } => write!(f, "{value}"),
            Expression::BooleanLiteral { value, .. } => write!(f, "{value}"),
            Expression::StringLiteral { value, .. } => write!(f, "{value}"),
            Expression::Prefix {
                operator, right, ..
            } => write!(f, "({operator}{right})"),
            Expression::Infix {
                left,
                operator,
                right,
                ..
            } => write!(f, "({left} {operator} {right})"),
            Expression::If {
                condition,
                consequence,
                alternative,
                ..
            } => {
                write!(f, "if{condition} {{{consequence}}}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {{{alternative}}}")?;
                }
                Ok(())
            }
            Expression::FunctionLiteral {
                parameters, body, ..
            } => {
                let params: Vec<String> = parameters.iter().map(|p| p.to_string()).collect();
                write!(f, "func({}) {{{body}}}", params.join(", "))
            }
            Expression::Call {
                function,
                arguments,
                ..
            } => {
                let args: Vec<String> = arguments.iter().map(|a| a.to_string()).collect();
                write!(f, "{function}({})", args.join(", "))
            }
        }
    }
}
