//! The abstract syntax tree.
//!
//! Both node categories are closed enums so that every consumer matches
//! exhaustively; adding a node kind without handling it everywhere is a
//! compile error. Nodes own their children exclusively (a strict tree),
//! are built once by the parser and are read-only afterwards.

use core::fmt;

use ecow::EcoString;

use crate::values::Value;

/// A value-producing node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Value),
    Identifier { name: EcoString },
    Unary { op: UnaryOp, operand: Box<Expr> },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

/// An effect-producing node.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// Ordered children; sequence order is execution order.
    Block(Vec<Stmt>),
    /// A bare expression terminated by `;`, evaluated for its effects.
    Expression(Expr),
    /// Parsed but never invoked; execution is a no-op.
    FunctionDeclaration { name: EcoString, body: Box<Stmt> },
    VariableDeclaration {
        name: EcoString,
        /// Declared type name, stored but never checked.
        ty: EcoString,
        /// `let` declares a constant, `var` a mutable binding. Constancy
        /// is recorded but not yet enforced.
        constant: bool,
        initializer: Option<Expr>,
    },
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        /// Restricted at parse time to a block or another `if`.
        else_branch: Option<Box<Stmt>>,
    },
    While { condition: Expr, body: Box<Stmt> },
    DoWhile { body: Box<Stmt>, condition: Expr },
    For {
        initializer: Box<Stmt>,
        condition: Expr,
        increment: Expr,
        body: Box<Stmt>,
    },
    Print(Expr),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `=`. Parses like any other binary operator (the left side is not
    /// validated as an lvalue) but has no defined evaluation.
    Assign,
    Add,
    Sub,
    Mul,
    Div,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `+`. Accepted by the grammar; no operator is defined for it.
    Pos,
    Neg,
    Not,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOp::Assign => "=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::Less => "<",
            BinaryOp::LessEqual => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEqual => ">=",
        };
        f.write_str(symbol)
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            UnaryOp::Pos => "+",
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
        };
        f.write_str(symbol)
    }
}
