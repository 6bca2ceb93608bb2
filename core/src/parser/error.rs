//! Syntactic errors.

use ecow::EcoString;
use thiserror::Error;

use crate::token::{Position, Token, TokenKind};

/// A recorded parse error with the location of the offending token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{file}:{position}: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub file: EcoString,
    pub position: Position,
}

impl ParseError {
    pub(super) fn at(token: &Token, kind: ParseErrorKind) -> Self {
        Self {
            kind,
            file: token.file.clone(),
            position: token.position,
        }
    }
}

/// The closed set of syntactic error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A `consume` expectation failed. `message` is the prose expectation
    /// ("Expected ';' after variable declaration").
    #[error("{message} (found {found})")]
    UnexpectedToken {
        message: &'static str,
        found: TokenKind,
    },

    #[error("Not a primary expression (found {found})")]
    InvalidPrimary { found: TokenKind },

    #[error("Expected block or 'if' after 'else'")]
    InvalidElseBranch,

    /// Literal text that does not fit the value type (e.g. an integer
    /// literal beyond 64 bits).
    #[error("Invalid number literal '{text}'")]
    InvalidNumber { text: EcoString },
}
