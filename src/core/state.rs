//! Calculator input state.
//!
//! The state is a flat value. Every input event produces a new one via the
//! reducer; nothing here mutates in place or performs side effects.

use super::command::Operator;
use super::error::CalcError;

/// Operand shown after start-up, clear, or an error.
pub const INITIAL_OPERAND: &str = "0";

/// An operator together with its left-hand operand, waiting for the
/// right-hand one.
///
/// Keeping both in one value means a pending operator can never exist
/// without its operand, or the other way round.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingOperation {
    pub operand: String,
    pub operator: Operator,
}

/// Current input state of the calculator.
///
/// # Example
///
/// ```rust
/// use calcmaster::core::{reduce, CalculatorState, Command, Operator};
///
/// let state = CalculatorState::new();
/// assert_eq!(state.current_operand(), "0");
///
/// let state = reduce(&state, Command::Digit('7')).state;
/// let state = reduce(&state, Command::Operator(Operator::Multiply)).state;
///
/// let pending = state.pending().unwrap();
/// assert_eq!(pending.operand, "7");
/// assert_eq!(state.current_operand(), "0");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorState {
    pub(crate) current_operand: String,
    pub(crate) pending: Option<PendingOperation>,
    pub(crate) error: Option<CalcError>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Fresh state: operand `"0"`, nothing pending, no error.
    pub fn new() -> Self {
        Self {
            current_operand: INITIAL_OPERAND.to_string(),
            pending: None,
            error: None,
        }
    }

    pub(crate) fn showing(operand: String) -> Self {
        Self {
            current_operand: operand,
            pending: None,
            error: None,
        }
    }

    pub(crate) fn failed(error: CalcError) -> Self {
        Self {
            current_operand: INITIAL_OPERAND.to_string(),
            pending: None,
            error: Some(error),
        }
    }

    /// Copy of this state with any error dismissed.
    pub(crate) fn dismissed(&self) -> Self {
        Self {
            error: None,
            ..self.clone()
        }
    }

    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    pub fn error(&self) -> Option<&CalcError> {
        self.error.as_ref()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Text for the main display line: the error message while an error is
    /// active, otherwise the current operand.
    pub fn display(&self) -> String {
        match &self.error {
            Some(error) => error.to_string(),
            None => self.current_operand.clone(),
        }
    }
}
