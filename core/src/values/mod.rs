//! The tagged runtime value and its operator semantics.

pub mod operators;

#[cfg(test)]
mod value_test;

pub use operators::{apply_binary, apply_unary, OperatorError};

use core::fmt;

use ecow::EcoString;

/// A runtime datum. Values are immutable once constructed; every operator
/// returns a fresh value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Str(EcoString),
}

/// The runtime type discriminator of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Integer,
    Float,
    Boolean,
    Str,
}

impl Value {
    pub fn tag(&self) -> Tag {
        match self {
            Value::Integer(_) => Tag::Integer,
            Value::Float(_) => Tag::Float,
            Value::Boolean(_) => Tag::Boolean,
            Value::Str(_) => Tag::Str,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tag::Integer => "int",
            Tag::Float => "float",
            Tag::Boolean => "bool",
            Tag::Str => "string",
        };
        f.write_str(name)
    }
}

/// The textual form `print` emits: decimal for numbers, `true`/`false`
/// for booleans, raw contents for strings.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
            Value::Boolean(value) => write!(f, "{value}"),
            Value::Str(value) => f.write_str(value),
        }
    }
}
