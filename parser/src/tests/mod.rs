mod precedence;
mod stmt;

use ast::Program;
use lexer::Lexer;

use crate::core::Parser;

/// Parses `input` and asserts there are no parser errors before
/// returning the program — the shared entry point every test module
/// here builds on.
pub(crate) fn parse(input: &str) -> Program {
    let mut parser = Parser::new(Lexer::new(input));
    let program = parser.parse_program();
    assert!(
        parser.errors().is_empty(),
        "unexpected parser errors: {:?}",
        parser.errors()
    );
    program
}
