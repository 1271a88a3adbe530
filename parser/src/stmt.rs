//! Statement-level parsing: `let`, `return`, bare expression statements,
//! and brace-delimited blocks.

use ast::{Block, Identifier, Statement};
use lexer::TokenKind;

use crate::core::Parser;
use crate::precedence::Precedence;

impl Parser {
    pub(crate) fn parse_let_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::Identifier) {
            return None;
        }
        let name = Identifier {
            token: self.current.clone(),
            name: self.current.literal.clone(),
        };

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        Some(Statement::Let { token, name, value })
    }

    pub(crate) fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        Some(Statement::Return { token, value })
    }

    pub(crate) fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        Some(Statement::ExpressionStatement { token, expression })
    }

    /// Parses statements until `}` or `EOF`. Assumes `current` is the
    /// opening `{`.
    pub(crate) fn parse_block(&mut self) -> Block {
        let token = self.current.clone();
        self.advance();

        let mut statements = Vec::new();
        while !self.current_is(TokenKind::RBrace) && !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.advance();
        }

        Block { token, statements }
    }
}
