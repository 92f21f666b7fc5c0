//! Safe expression evaluation.
//!
//! Validates and computes the numeric value of a finished arithmetic string.
//! Pure and stateless: the evaluator holds nothing across calls and is
//! trivially safe to share between sessions. The state machine produces
//! well-formed input, but the evaluator defends against malformed text
//! anyway and reports every failure as a typed [`EvalError`].

mod error;
mod parser;

pub use error::EvalError;
pub use parser::evaluate;
