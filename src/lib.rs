//! Wires the lexer, parser and evaluator into the single entry point
//! used by both the script runner and the REPL.

use std::cell::RefCell;
use std::rc::Rc;

use common::CantteError;
use eval::{eval_program, Environment, Value};
use lexer::Lexer;
use parser::Parser;

/// Lexes, parses and evaluates `source` against `env`.
///
/// Parse errors abort before evaluation ever runs; a source that parses
/// cleanly always produces a `Value`, possibly `Value::Error`.
pub fn run(source: &str, env: &Rc<RefCell<Environment>>) -> Result<Value, Vec<CantteError>> {
    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        return Err(parser.errors().to_vec());
    }

    tracing::trace!(%source, "evaluating program");
    Ok(eval_program(&program, env))
}
