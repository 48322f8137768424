use thiserror::Error;

use crate::token::{Token, TokenType};

/// Lexical error, reported without a location hint.
#[derive(Debug, PartialEq, Clone, Error)]
#[error("[line {line}] Error: {message}")]
pub struct ScannerError {
    pub message: String,
    pub line: usize,
}

/// Syntax error, attributed to the token the parser was looking at.
#[derive(Debug, PartialEq, Clone, Error)]
#[error("[line {}] Error{}: {}", .token.line, location(.token), .message)]
pub struct ParseError {
    pub message: String,
    pub token: Token,
}

fn location(token: &Token) -> String {
    match token.typ {
        TokenType::Eof => String::from(" at end"),
        _ => format!(" at '{}'", token.lexeme),
    }
}

#[derive(Debug, PartialEq, Clone, Error)]
pub enum LoxError {
    #[error(transparent)]
    Scan(#[from] ScannerError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl LoxError {
    pub fn line(&self) -> usize {
        match self {
            LoxError::Scan(err) => err.line,
            LoxError::Parse(err) => err.token.line,
        }
    }
}
