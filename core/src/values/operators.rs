//! Binary and unary operator implementations over [`Value`].
//!
//! Every binary operator requires both operands to carry the *same* tag;
//! a mismatch is an error, never an implicit coercion. Per-tag rules:
//!
//! - `int`: full arithmetic (wrapping, so overflow never panics; division
//!   truncates and a zero divisor is reported) and all comparisons.
//! - `float`: IEEE arithmetic (division by zero yields ±inf/NaN) and all
//!   comparisons.
//! - `string`: `+` concatenates; only `==`/`!=` compare.
//! - `bool`: `==`/`!=` only.
//!
//! Unary `-` is defined for `int`/`float`, unary `!` for `bool`, and
//! nothing else — notably not unary `+`, which the grammar accepts but no
//! operator backs.

use thiserror::Error;

use crate::parser::{BinaryOp, UnaryOp};
use crate::values::{Tag, Value};

/// Failure of a value operator. The evaluator turns these into runtime
/// errors; the variants stay structural so tests can match on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OperatorError {
    #[error("Incompatible operand types {left} and {right} for '{op}'")]
    Incompatible { op: BinaryOp, left: Tag, right: Tag },

    #[error("Operator '{op}' is not defined for {tag} operands")]
    UnsupportedBinary { op: BinaryOp, tag: Tag },

    #[error("Unary operator '{op}' is not defined for {tag} operands")]
    UnsupportedUnary { op: UnaryOp, tag: Tag },

    #[error("Division by zero")]
    DivisionByZero,
}

/// Apply a binary operator to two values of identical tag.
pub fn apply_binary(op: BinaryOp, left: &Value, right: &Value) -> Result<Value, OperatorError> {
    if left.tag() != right.tag() {
        return Err(OperatorError::Incompatible {
            op,
            left: left.tag(),
            right: right.tag(),
        });
    }
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => integer_binary(op, *l, *r),
        (Value::Float(l), Value::Float(r)) => float_binary(op, *l, *r),
        (Value::Boolean(l), Value::Boolean(r)) => match op {
            BinaryOp::Equal => Ok(Value::Boolean(l == r)),
            BinaryOp::NotEqual => Ok(Value::Boolean(l != r)),
            _ => Err(OperatorError::UnsupportedBinary {
                op,
                tag: Tag::Boolean,
            }),
        },
        (Value::Str(l), Value::Str(r)) => match op {
            BinaryOp::Add => {
                let mut joined = l.clone();
                joined.push_str(r);
                Ok(Value::Str(joined))
            }
            BinaryOp::Equal => Ok(Value::Boolean(l == r)),
            BinaryOp::NotEqual => Ok(Value::Boolean(l != r)),
            _ => Err(OperatorError::UnsupportedBinary { op, tag: Tag::Str }),
        },
        // Tags were checked equal above.
        _ => unreachable!("mismatched tags after tag check"),
    }
}

fn integer_binary(op: BinaryOp, left: i64, right: i64) -> Result<Value, OperatorError> {
    let value = match op {
        BinaryOp::Add => Value::Integer(left.wrapping_add(right)),
        BinaryOp::Sub => Value::Integer(left.wrapping_sub(right)),
        BinaryOp::Mul => Value::Integer(left.wrapping_mul(right)),
        BinaryOp::Div => {
            if right == 0 {
                return Err(OperatorError::DivisionByZero);
            }
            // wrapping_div covers i64::MIN / -1.
            Value::Integer(left.wrapping_div(right))
        }
        BinaryOp::Equal => Value::Boolean(left == right),
        BinaryOp::NotEqual => Value::Boolean(left != right),
        BinaryOp::Less => Value::Boolean(left < right),
        BinaryOp::LessEqual => Value::Boolean(left <= right),
        BinaryOp::Greater => Value::Boolean(left > right),
        BinaryOp::GreaterEqual => Value::Boolean(left >= right),
        BinaryOp::Assign => {
            return Err(OperatorError::UnsupportedBinary {
                op,
                tag: Tag::Integer,
            });
        }
    };
    Ok(value)
}

fn float_binary(op: BinaryOp, left: f64, right: f64) -> Result<Value, OperatorError> {
    let value = match op {
        BinaryOp::Add => Value::Float(left + right),
        BinaryOp::Sub => Value::Float(left - right),
        BinaryOp::Mul => Value::Float(left * right),
        // Division by zero produces inf/NaN, as the hardware does.
        BinaryOp::Div => Value::Float(left / right),
        BinaryOp::Equal => Value::Boolean(left == right),
        BinaryOp::NotEqual => Value::Boolean(left != right),
        BinaryOp::Less => Value::Boolean(left < right),
        BinaryOp::LessEqual => Value::Boolean(left <= right),
        BinaryOp::Greater => Value::Boolean(left > right),
        BinaryOp::GreaterEqual => Value::Boolean(left >= right),
        BinaryOp::Assign => {
            return Err(OperatorError::UnsupportedBinary {
                op,
                tag: Tag::Float,
            });
        }
    };
    Ok(value)
}

/// Apply a unary operator to a value.
pub fn apply_unary(op: UnaryOp, operand: &Value) -> Result<Value, OperatorError> {
    match (op, operand) {
        (UnaryOp::Neg, Value::Integer(value)) => Ok(Value::Integer(value.wrapping_neg())),
        (UnaryOp::Neg, Value::Float(value)) => Ok(Value::Float(-value)),
        (UnaryOp::Not, Value::Boolean(value)) => Ok(Value::Boolean(!value)),
        _ => Err(OperatorError::UnsupportedUnary {
            op,
            tag: operand.tag(),
        }),
    }
}
