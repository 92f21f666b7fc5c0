//! Evaluation error types.

use thiserror::Error;

/// Errors that can occur while evaluating an expression.
///
/// All variants are recoverable, user-visible conditions. The state machine
/// only distinguishes success from failure; the specific kind is available
/// to embedders that want richer messaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A character outside the arithmetic alphabet was found
    #[error("invalid character '{0}' in expression")]
    InvalidCharacter(char),

    /// Opening and closing parenthesis counts differ
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,

    /// The expression does not match the arithmetic grammar
    #[error("malformed expression")]
    MalformedExpression,

    /// A division with a zero divisor was attempted
    #[error("division by zero")]
    DivisionByZero,

    /// The computation left the representable numeric range
    #[error("result is not a finite number")]
    NonFiniteResult,
}
