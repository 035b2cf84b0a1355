//! Recursive-descent parser and evaluator for the calculator grammar.
//!
//! ```text
//! expr   = sum EOL
//! sum    = term  ( ('+' | '-') term )*
//! term   = factor ( ('*' | '/') factor )*
//! factor = '-' factor | '(' sum ')' | NUMBER
//! ```
//!
//! Evaluation happens inline with parsing — each production returns the
//! [`BigInt`] it computed, built entirely out of the core's public
//! operations. There is no separate AST.

use bignum::{BigInt, BignumError};
use thiserror::Error;

use crate::tokenizer::Token;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("unmatched parenthesis")]
    UnmatchedParen,
    #[error("trailing garbage after expression")]
    TrailingGarbage,
    #[error("invalid numeral: {0}")]
    Bignum(#[from] BignumError),
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

/// Parses and evaluates one line's worth of tokens, requiring every token
/// to be consumed (no trailing garbage).
pub fn parse(tokens: &[Token]) -> Result<BigInt, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::UnexpectedEnd);
    }
    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.sum()?;
    if parser.pos != parser.tokens.len() {
        return Err(ParseError::TrailingGarbage);
    }
    Ok(value)
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let tok = self.tokens.get(self.pos);
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn sum(&mut self) -> Result<BigInt, ParseError> {
        let mut value = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.advance();
                    value = value.add(&self.term()?);
                }
                Some(Token::Minus) => {
                    self.advance();
                    value = value.sub(&self.term()?);
                }
                _ => break,
            }
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<BigInt, ParseError> {
        let mut value = self.factor()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.advance();
                    value = value.mul(&self.factor()?);
                }
                Some(Token::Slash) => {
                    self.advance();
                    value = value.div(&self.factor()?)?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    fn factor(&mut self) -> Result<BigInt, ParseError> {
        match self.advance() {
            Some(Token::Minus) => Ok(self.factor()?.neg()),
            Some(Token::LParen) => {
                let value = self.sum()?;
                match self.advance() {
                    Some(Token::RParen) => Ok(value),
                    _ => Err(ParseError::UnmatchedParen),
                }
            }
            Some(Token::Number(digits)) => Ok(BigInt::create_from_decimal(digits)?),
            Some(_) => Err(ParseError::UnexpectedEnd),
            None => Err(ParseError::UnexpectedEnd),
        }
    }
}
