//! Ibex is a small imperative scripting language: a hand-written lexer, a
//! recursive-descent parser and a tree-walking interpreter over a tagged
//! runtime value.
//!
//! The pipeline is strictly staged: the [`lexer::Lexer`] scans the whole
//! source eagerly, the [`parser::Parser`] turns the token stream into a
//! statement list, and the [`evaluator::Interpreter`] walks that list and
//! performs the program's effects. Each stage records its own errors; the
//! driver is expected to check `errors_reported()` before trusting a
//! stage's output.
//!
//! ```ignore
//! use ibex_core::{evaluator::Interpreter, lexer::Lexer, parser::Parser};
//!
//! let mut lexer = Lexer::new("demo.ibx", "var a: int = 2; print a + 3;");
//! assert_eq!(lexer.errors_reported(), 0);
//!
//! let mut parser = Parser::new(&mut lexer);
//! let program = parser.parse();
//! assert_eq!(parser.errors_reported(), 0);
//!
//! let mut out = Vec::new();
//! Interpreter::with_output(&program, &mut out).interpret()?;
//! assert_eq!(out, b"5");
//! ```

pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod values;
