use pretty_assertions::assert_eq;

use crate::parser::{BinaryOp, UnaryOp};
use crate::values::{apply_binary, apply_unary, OperatorError, Tag, Value};

const ALL_BINARY: [BinaryOp; 10] = [
    BinaryOp::Add,
    BinaryOp::Sub,
    BinaryOp::Mul,
    BinaryOp::Div,
    BinaryOp::Equal,
    BinaryOp::NotEqual,
    BinaryOp::Less,
    BinaryOp::LessEqual,
    BinaryOp::Greater,
    BinaryOp::GreaterEqual,
];

#[test]
fn mismatched_tags_never_coerce() {
    let samples = [
        Value::Integer(1),
        Value::Float(1.0),
        Value::Boolean(true),
        Value::Str("1".into()),
    ];
    for left in &samples {
        for right in &samples {
            if left.tag() == right.tag() {
                continue;
            }
            for op in ALL_BINARY {
                assert_eq!(
                    apply_binary(op, left, right),
                    Err(OperatorError::Incompatible {
                        op,
                        left: left.tag(),
                        right: right.tag(),
                    }),
                    "{left:?} {op} {right:?} must not coerce",
                );
            }
        }
    }
}

#[test]
fn integer_arithmetic() {
    let six = Value::Integer(6);
    let four = Value::Integer(4);
    assert_eq!(apply_binary(BinaryOp::Add, &six, &four), Ok(Value::Integer(10)));
    assert_eq!(apply_binary(BinaryOp::Sub, &six, &four), Ok(Value::Integer(2)));
    assert_eq!(apply_binary(BinaryOp::Mul, &six, &four), Ok(Value::Integer(24)));
    assert_eq!(apply_binary(BinaryOp::Div, &six, &four), Ok(Value::Integer(1)));
}

#[test]
fn integer_division_truncates() {
    assert_eq!(
        apply_binary(BinaryOp::Div, &Value::Integer(-7), &Value::Integer(2)),
        Ok(Value::Integer(-3))
    );
}

#[test]
fn integer_division_by_zero() {
    assert_eq!(
        apply_binary(BinaryOp::Div, &Value::Integer(1), &Value::Integer(0)),
        Err(OperatorError::DivisionByZero)
    );
}

#[test]
fn integer_overflow_wraps() {
    assert_eq!(
        apply_binary(BinaryOp::Add, &Value::Integer(i64::MAX), &Value::Integer(1)),
        Ok(Value::Integer(i64::MIN))
    );
    assert_eq!(
        apply_binary(BinaryOp::Div, &Value::Integer(i64::MIN), &Value::Integer(-1)),
        Ok(Value::Integer(i64::MIN))
    );
}

#[test]
fn integer_comparisons() {
    let one = Value::Integer(1);
    let two = Value::Integer(2);
    assert_eq!(apply_binary(BinaryOp::Less, &one, &two), Ok(Value::Boolean(true)));
    assert_eq!(apply_binary(BinaryOp::GreaterEqual, &one, &two), Ok(Value::Boolean(false)));
    assert_eq!(apply_binary(BinaryOp::Equal, &one, &one), Ok(Value::Boolean(true)));
    assert_eq!(apply_binary(BinaryOp::NotEqual, &one, &two), Ok(Value::Boolean(true)));
}

#[test]
fn float_division_by_zero_is_not_guarded() {
    let result = apply_binary(BinaryOp::Div, &Value::Float(1.0), &Value::Float(0.0));
    assert_eq!(result, Ok(Value::Float(f64::INFINITY)));
}

#[test]
fn float_arithmetic_and_comparisons() {
    let half = Value::Float(0.5);
    let two = Value::Float(2.0);
    assert_eq!(apply_binary(BinaryOp::Mul, &half, &two), Ok(Value::Float(1.0)));
    assert_eq!(apply_binary(BinaryOp::LessEqual, &half, &two), Ok(Value::Boolean(true)));
}

#[test]
fn string_concatenation_and_equality() {
    let ab = Value::Str("ab".into());
    let cd = Value::Str("cd".into());
    assert_eq!(
        apply_binary(BinaryOp::Add, &ab, &cd),
        Ok(Value::Str("abcd".into()))
    );
    assert_eq!(apply_binary(BinaryOp::Equal, &ab, &ab), Ok(Value::Boolean(true)));
    assert_eq!(apply_binary(BinaryOp::NotEqual, &ab, &cd), Ok(Value::Boolean(true)));
}

#[test]
fn string_arithmetic_and_ordering_are_errors() {
    let ab = Value::Str("ab".into());
    for op in [BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div, BinaryOp::Less, BinaryOp::Greater] {
        assert_eq!(
            apply_binary(op, &ab, &ab),
            Err(OperatorError::UnsupportedBinary { op, tag: Tag::Str })
        );
    }
}

#[test]
fn boolean_supports_equality_only() {
    let yes = Value::Boolean(true);
    let no = Value::Boolean(false);
    assert_eq!(apply_binary(BinaryOp::Equal, &yes, &no), Ok(Value::Boolean(false)));
    assert_eq!(apply_binary(BinaryOp::NotEqual, &yes, &no), Ok(Value::Boolean(true)));
    assert_eq!(
        apply_binary(BinaryOp::Less, &yes, &no),
        Err(OperatorError::UnsupportedBinary {
            op: BinaryOp::Less,
            tag: Tag::Boolean,
        })
    );
}

#[test]
fn unary_negation() {
    assert_eq!(apply_unary(UnaryOp::Neg, &Value::Integer(3)), Ok(Value::Integer(-3)));
    assert_eq!(apply_unary(UnaryOp::Neg, &Value::Float(2.5)), Ok(Value::Float(-2.5)));
}

#[test]
fn unary_not() {
    assert_eq!(
        apply_unary(UnaryOp::Not, &Value::Boolean(true)),
        Ok(Value::Boolean(false))
    );
}

#[test]
fn undefined_unary_pairings_are_errors() {
    assert_eq!(
        apply_unary(UnaryOp::Neg, &Value::Boolean(true)),
        Err(OperatorError::UnsupportedUnary {
            op: UnaryOp::Neg,
            tag: Tag::Boolean,
        })
    );
    assert_eq!(
        apply_unary(UnaryOp::Not, &Value::Integer(1)),
        Err(OperatorError::UnsupportedUnary {
            op: UnaryOp::Not,
            tag: Tag::Integer,
        })
    );
    // Unary '+' parses but no operator is defined for it.
    assert_eq!(
        apply_unary(UnaryOp::Pos, &Value::Integer(1)),
        Err(OperatorError::UnsupportedUnary {
            op: UnaryOp::Pos,
            tag: Tag::Integer,
        })
    );
}

#[test]
fn display_forms() {
    assert_eq!(Value::Integer(5).to_string(), "5");
    assert_eq!(Value::Float(2.5).to_string(), "2.5");
    assert_eq!(Value::Boolean(true).to_string(), "true");
    assert_eq!(Value::Str("raw".into()).to_string(), "raw");
}
