//! Expression parsing: the Pratt prefix/infix dispatch tables and the
//! `parse_expression` precedence-climbing loop (§4.2 of the spec this
//! crate implements).

use ast::{Expression, Identifier};
use common::CantteError;
use lexer::TokenKind;

use crate::core::Parser;
use crate::precedence::Precedence;

impl Parser {
    /// Parses an expression binding no looser than `precedence`.
    ///
    /// Looks up a prefix handler for `current`; if none exists, records
    /// "no prefix parse function for <kind> found" and returns `None`.
    /// Otherwise repeatedly looks ahead: while `peek` is not `;` and
    /// `precedence` is looser than `peek`'s precedence, consumes an
    /// infix operator and folds it into `left`.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            if !Self::has_infix(self.peek.kind) {
                return Some(left);
            }
            self.advance();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    fn has_infix(kind: TokenKind) -> bool {
        matches!(
            kind,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Multiplication
                | TokenKind::Division
                | TokenKind::LessThan
                | TokenKind::GreaterThan
                | TokenKind::Equal
                | TokenKind::NotEqual
                | TokenKind::LParen
        )
    }

    fn parse_prefix(&mut self) -> Option<Expression> {
        match self.current.kind {
            TokenKind::Identifier => Some(self.parse_identifier()),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::String => Some(self.parse_string_literal()),
            TokenKind::True | TokenKind::False => Some(self.parse_boolean_literal()),
            TokenKind::Negation | TokenKind::Minus => self.parse_prefix_expression(),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            kind => {
                self.push_error(CantteError::syntax(format!(
                    "no prefix parse function for {kind} found"
                )));
                None
            }
        }
    }

    fn parse_infix(&mut self, left: Expression) -> Option<Expression> {
        match self.current.kind {
            TokenKind::LParen => self.parse_call_expression(left),
            _ => self.parse_infix_expression(left),
        }
    }

    fn parse_identifier(&mut self) -> Expression {
        Expression::Identifier(Identifier {
            token: self.current.clone(),
            name: self.current.literal.clone(),
        })
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral { token, value }),
            Err(_) => {
                self.push_error(CantteError::syntax(format!(
                    "could not parse '{}' as integer",
                    token.literal
                )));
                None
            }
        }
    }

    fn parse_string_literal(&mut self) -> Expression {
        Expression::StringLiteral {
            token: self.current.clone(),
            value: self.current.literal.clone(),
        }
    }

    fn parse_boolean_literal(&mut self) -> Expression {
        Expression::BooleanLiteral {
            token: self.current.clone(),
            value: self.current_is(TokenKind::True),
        }
    }

    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        let operator = self.current.literal.clone();
        self.advance();
        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expression::Prefix {
            token,
            operator,
            right: Box::new(right),
        })
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.current.clone();
        let operator = self.current.literal.clone();
        let precedence = self.current_precedence();
        self.advance();
        let right = self.parse_expression(precedence)?;
        Some(Expression::Infix {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.advance();
        let expression = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(expression)
    }

    fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.advance();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block())
        } else {
            None
        };

        Some(Expression::If {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block();

        Some(Expression::FunctionLiteral {
            token,
            parameters,
            body,
        })
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut identifiers = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.advance();
            return Some(identifiers);
        }

        self.advance();
        identifiers.push(Identifier {
            token: self.current.clone(),
            name: self.current.literal.clone(),
        });

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.advance();
            identifiers.push(Identifier {
                token: self.current.clone(),
                name: self.current.literal.clone(),
            });
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(identifiers)
    }

    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let token = self.current.clone();
        let arguments = self.parse_call_arguments()?;
        Some(Expression::Call {
            token,
            function: Box::new(function),
            arguments,
        })
    }

    fn parse_call_arguments(&mut self) -> Option<Vec<Expression>> {
        let mut arguments = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.advance();
            return Some(arguments);
        }

        self.advance();
        arguments.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.advance();
            arguments.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(arguments)
    }
}
