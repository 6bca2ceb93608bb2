//! Statement execution and expression evaluation.

use std::io::{self, Write};

use tracing::{debug, trace};

use crate::evaluator::{Environment, RuntimeError};
use crate::parser::{BinaryOp, Expr, Stmt};
use crate::values::{apply_binary, apply_unary, Value};

/// Executes a parsed program. Owns the run's [`Environment`]; the first
/// runtime error aborts the remaining statements.
pub struct Interpreter<'a, W> {
    statements: &'a [Stmt],
    environment: Environment,
    output: W,
}

impl<'a> Interpreter<'a, io::Stdout> {
    /// Interpreter writing `print` output to stdout.
    pub fn new(statements: &'a [Stmt]) -> Self {
        Self::with_output(statements, io::stdout())
    }
}

impl<'a, W: Write> Interpreter<'a, W> {
    /// Interpreter writing `print` output to an arbitrary sink.
    pub fn with_output(statements: &'a [Stmt], output: W) -> Self {
        Self {
            statements,
            environment: Environment::new(),
            output,
        }
    }

    /// Execute every top-level statement in order. Stops at the first
    /// runtime error; there is no statement-level partial success.
    pub fn interpret(&mut self) -> Result<(), RuntimeError> {
        for statement in self.statements {
            self.execute(statement)?;
        }
        Ok(())
    }

    fn execute(&mut self, statement: &Stmt) -> Result<(), RuntimeError> {
        match statement {
            // Child statements run in the same environment; blocks do not
            // open a scope, so declarations leak into the rest of the run.
            Stmt::Block(statements) => {
                for statement in statements {
                    self.execute(statement)?;
                }
                Ok(())
            }

            Stmt::Expression(expression) => {
                self.evaluate(expression)?;
                Ok(())
            }

            Stmt::FunctionDeclaration { name, .. } => {
                trace!(%name, "function declarations are not invoked yet");
                Ok(())
            }

            Stmt::VariableDeclaration {
                name, initializer, ..
            } => match initializer {
                Some(initializer) => {
                    let value = self.evaluate(initializer)?;
                    self.environment.define(name, value)
                }
                None => Err(RuntimeError::MissingInitializer { name: name.clone() }),
            },

            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => match self.evaluate(condition)? {
                Value::Boolean(true) => self.execute(then_branch),
                Value::Boolean(false) => match else_branch {
                    Some(else_branch) => self.execute(else_branch),
                    None => Ok(()),
                },
                other => Err(RuntimeError::InvalidCondition { found: other.tag() }),
            },

            // Loop grammar is accepted but evaluation is deliberately
            // absent; the statement executes nothing.
            Stmt::While { .. } | Stmt::DoWhile { .. } | Stmt::For { .. } => {
                debug!("loop execution is not implemented; skipping statement");
                Ok(())
            }

            Stmt::Print(expression) => {
                let value = self.evaluate(expression)?;
                write!(self.output, "{value}")?;
                Ok(())
            }
        }
    }

    fn evaluate(&mut self, expression: &Expr) -> Result<Value, RuntimeError> {
        match expression {
            Expr::Literal(value) => Ok(value.clone()),

            Expr::Identifier { name } => self.environment.get(name),

            Expr::Unary { op, operand } => {
                let operand = self.evaluate(operand)?;
                Ok(apply_unary(*op, &operand)?)
            }

            // `=` parses as a binary operator but has no evaluation.
            Expr::Binary {
                op: BinaryOp::Assign,
                ..
            } => Err(RuntimeError::Unsupported {
                construct: "Assignment",
            }),

            Expr::Binary { op, left, right } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                Ok(apply_binary(*op, &left, &right)?)
            }
        }
    }
}
