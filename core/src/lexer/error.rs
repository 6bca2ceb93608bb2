//! Lexical errors.
//!
//! A lexical error never aborts scanning: the lexer records it, resumes
//! with the next unconsumed character and keeps producing tokens. Callers
//! must check [`Lexer::errors_reported`](super::Lexer::errors_reported)
//! before trusting the token stream.

use ecow::EcoString;
use thiserror::Error;

use crate::token::Position;

/// A recorded lexical error with its source location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{file}:{position}: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub file: EcoString,
    pub position: Position,
}

/// The closed set of lexical error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("Unknown escape sequence '\\{sequence}'")]
    UnknownEscape { sequence: char },

    #[error("Unterminated string literal")]
    UnterminatedString,

    #[error("Too many decimal points")]
    TooManyDecimalPoints,

    #[error("Unknown operator \"{text}\"")]
    UnknownOperator { text: EcoString },
}
