//! Calculation error types.

use super::command::UnaryFn;
use thiserror::Error;

/// Errors produced while evaluating an operation.
///
/// All of them are recoverable by the user: the reducer stores the error in
/// the state, the display shows its message, and the next digit, operator,
/// function or backspace dismisses it.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("Invalid input for {}", .function.domain_name())]
    InvalidDomain { function: UnaryFn },

    #[error("Result is too large")]
    ResultOverflow,
}
