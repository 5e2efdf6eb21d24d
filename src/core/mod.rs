//! Pure calculator core.
//!
//! This module contains the input/evaluation state machine:
//! - `CalculatorState`, the flat record every input event transforms
//! - `Command`, the single vocabulary shared by buttons and keyboard
//! - `reduce`, the pure transition function
//!
//! Nothing in here touches storage, clocks or logging. The session shell
//! runs the reducer and then commits whatever it produced.

mod command;
mod error;
mod evaluation;
mod reducer;
mod state;

pub use command::{Command, Constant, Operator, UnaryFn};
pub use error::CalcError;
pub use evaluation::{
    evaluate_binary, evaluate_unary, format_number, parse_operand, round_result, RESULT_DECIMALS,
};
pub use reducer::{
    apply_unary, backspace, clear_all, enter_digit, enter_operator, equals, insert_constant,
    recall, reduce, resolve, Calculation, Step,
};
pub use state::{CalculatorState, PendingOperation, INITIAL_OPERAND};
