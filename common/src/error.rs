use thiserror::Error;

/// A diagnostic produced by the lexer, parser or evaluator.
///
/// `Display` renders the bare message; callers that need the
/// `Error: <message>` form the REPL prints (see `Value::Error::inspect`)
/// add that prefix themselves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CantteError {
    /// Recorded by the parser on an unexpected token or a missing
    /// prefix-parse function. The program AST may still be partial.
    #[error("{message}")]
    Syntax { message: String },

    /// Produced by the evaluator; becomes a `Value::Error` and aborts
    /// evaluation of the enclosing program or block.
    #[error("{message}")]
    Runtime { message: String },
}

impl CantteError {
    pub fn syntax(message: impl Into<String>) -> Self {
        CantteError::Syntax {
            message: message.into(),
        }
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        CantteError::Runtime {
            message: message.into(),
        }
    }

    /// The message payload, independent of which variant this is.
    pub fn message(&self) -> &str {
        match self {
            CantteError::Syntax { message } | CantteError::Runtime { message } => message,
        }
    }
}
