use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use ast::{Block, Identifier};
use common::CantteError;

use crate::environment::Environment;

/// A function value: its parameter list and body are borrowed from the
/// AST by shared reference (the AST outlives every value produced from
/// it), and its captured environment is shared — not owned — so every
/// closure over the same scope sees the same bindings.
#[derive(Debug)]
pub struct FunctionValue {
    pub parameters: Vec<Identifier>,
    pub body: Block,
    pub env: Rc<RefCell<Environment>>,
}

/// A host-implemented function callable from user code.
#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub func: fn(&[Value]) -> Value,
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin").field("name", &self.name).finish()
    }
}

/// A runtime value produced by the evaluator.
///
/// `Return` is an internal wrapper used only while evaluating a
/// function body or nested block — it never escapes past the call
/// boundary that unwraps it. `Error` aborts evaluation of the
/// enclosing program or block the moment it appears.
#[derive(Debug, Clone)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    String(String),
    Null,
    Return(Box<Value>),
    Error(CantteError),
    Function(Rc<FunctionValue>),
    Builtin(Builtin),
}

impl Value {
    /// The type tag used in diagnostics (`Unknown operator: INTEGER...`)
    /// and by callers that branch on runtime type.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::String(_) => "STRING",
            Value::Null => "NULL",
            Value::Return(_) => "RETURN",
            Value::Error(_) => "ERROR",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
        }
    }

    /// `False` and `Null` are falsy; every other value is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false) | Value::Null)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Textual rendering used by the REPL and inside error messages.
    pub fn inspect(&self) -> String {
        match self {
            Value::Integer(value) => value.to_string(),
            Value::Boolean(value) => value.to_string(),
            Value::String(value) => value.clone(),
            Value::Null => "null".to_string(),
            Value::Return(value) => value.inspect(),
            Value::Error(error) => format!("Error: {}", error.message()),
            Value::Function(function) => {
                let params: Vec<String> =
                    function.parameters.iter().map(|p| p.name.clone()).collect();
                format!("func({}) {{\n{}\n}}", params.join(", "), function.body)
            }
            Value::Builtin(builtin) => format!("builtin function {}", builtin.name),
        }
    }
}
