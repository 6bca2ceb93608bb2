//! Runtime errors.
//!
//! Unlike lexical and syntactic errors these are not recovered: the first
//! runtime error aborts the remaining interpretation and is surfaced to
//! the driver as the run's overall failure.

use std::io;

use ecow::EcoString;
use thiserror::Error;

use crate::values::{OperatorError, Tag};

/// The closed set of runtime error conditions.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("'{name}' is undefined")]
    UndefinedIdentifier { name: EcoString },

    #[error("Redefinition of '{name}'")]
    Redefinition { name: EcoString },

    /// Incompatible or undefined operand/operator pairing.
    #[error(transparent)]
    Operator(#[from] OperatorError),

    #[error("Expected a bool condition, found {found}")]
    InvalidCondition { found: Tag },

    #[error("Variable '{name}' is declared without an initializer")]
    MissingInitializer { name: EcoString },

    /// Grammar accepts the construct but no evaluation is defined for it.
    #[error("{construct} is not supported yet")]
    Unsupported { construct: &'static str },

    #[error("Failed to write program output")]
    Output(#[from] io::Error),
}
