//! Tree-walking interpreter for parsed Ibex programs.
//!
//! The interpreter executes the top-level statements in order, evaluating
//! expression nodes against a single flat [`Environment`] owned by the
//! run. `print` output goes to an injected [`std::io::Write`] sink so
//! tests can capture it; the default constructor writes to stdout.
//!
//! The statement list must come from a parse with zero reported errors;
//! the interpreter itself never re-checks syntax-level invariants (for
//! example the else-branch restriction, enforced at parse time).

mod environment;
mod error;
mod eval;


pub use environment::Environment;
pub use error::RuntimeError;
pub use eval::Interpreter;
