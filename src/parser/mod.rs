pub mod types;

use anyhow::{Result, bail};
use colored::Colorize;

use crate::{
    lexer::token::{Token, TokenKind},
    model::Type,
};

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn current_token(&self) -> Token {
        if self.pos < self.tokens.len() {
            self.tokens[self.pos].clone()
        } else {
            Token::new(TokenKind::Eof, "")
        }
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    pub fn advance(&mut self) -> Token {
        let token = self.current_token();
        self.pos += 1;
        token
    }

    pub fn expect_error(&mut self, expected_kind: TokenKind, err: Option<String>) -> Result<Token> {
        let token = self.current_token();

        if token.kind != expected_kind {
            bail!(
                err.unwrap_or(format!(
                    "Expected {} but received {} instead.",
                    expected_kind, token.kind
                ))
                .red()
                .bold()
            );
        }

        Ok(self.advance())
    }

    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token> {
        self.expect_error(expected_kind, None)
    }
}

/// Parses a complete type expression; trailing tokens are an error.
pub fn parse(tokens: Vec<Token>) -> Result<Type> {
    let mut parser = Parser::new(tokens);
    let ty = types::parse_type(&mut parser)?;
    parser.expect_error(
        TokenKind::Eof,
        Some(format!(
            "Unexpected '{}' after the type expression.",
            parser.current_token().value
        )),
    )?;
    Ok(ty)
}
