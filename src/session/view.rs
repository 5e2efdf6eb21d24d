//! Display rendering.

use crate::core::{CalculatorState, INITIAL_OPERAND};

/// What the display bar shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayView {
    /// Small line above the result: `pending operator current`.
    pub expression_line: String,
    /// Large line: the error message or the current operand.
    pub main_line: String,
    pub has_error: bool,
}

impl DisplayView {
    pub fn render(state: &CalculatorState) -> Self {
        Self {
            expression_line: expression_line(state),
            main_line: state.display(),
            has_error: state.has_error(),
        }
    }
}

/// The current operand is left out while it is still `"0"`.
fn expression_line(state: &CalculatorState) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(3);
    if let Some(pending) = state.pending() {
        parts.push(&pending.operand);
        parts.push(pending.operator.symbol());
    }
    if state.current_operand() != INITIAL_OPERAND {
        parts.push(state.current_operand());
    }
    parts.join(" ")
}
