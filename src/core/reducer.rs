//! The pure input reducer.
//!
//! Each operation takes the current state by reference and returns the next
//! one. Operations that complete a calculation also return a `Calculation`
//! for the shell to stamp and record; the reducer itself never records it.

use super::command::{Command, Constant, Operator, UnaryFn};
use super::evaluation::{evaluate_binary, evaluate_unary, format_number, parse_operand};
use super::state::{CalculatorState, PendingOperation, INITIAL_OPERAND};

/// A completed calculation, before it is given an id and timestamp.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Calculation {
    /// e.g. `5 + 3` or `sqrt(4)`
    pub expression: String,
    pub result: String,
}

/// Outcome of one reducer transition.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub state: CalculatorState,
    pub calculation: Option<Calculation>,
}

impl Step {
    fn quiet(state: CalculatorState) -> Self {
        Self {
            state,
            calculation: None,
        }
    }

    fn completed(state: CalculatorState, calculation: Calculation) -> Self {
        Self {
            state,
            calculation: Some(calculation),
        }
    }
}

/// Apply one command to the state.
///
/// Digits, operators, functions and constants dismiss a visible error before
/// they run; backspace dismisses it instead of editing.
///
/// # Example
///
/// ```rust
/// use calcmaster::core::{reduce, CalculatorState, Command, Operator};
///
/// let commands = [
///     Command::Digit('5'),
///     Command::Operator(Operator::Add),
///     Command::Digit('3'),
///     Command::Equals,
/// ];
///
/// let mut state = CalculatorState::new();
/// let mut calculations = Vec::new();
/// for command in commands {
///     let step = reduce(&state, command);
///     calculations.extend(step.calculation);
///     state = step.state;
/// }
///
/// assert_eq!(state.current_operand(), "8");
/// assert_eq!(calculations[0].expression, "5 + 3");
/// assert_eq!(calculations[0].result, "8");
/// ```
pub fn reduce(state: &CalculatorState, command: Command) -> Step {
    match command {
        Command::Digit(digit) => Step::quiet(enter_digit(&state.dismissed(), digit)),
        Command::Operator(operator) => enter_operator(&state.dismissed(), operator),
        Command::Equals => equals(state),
        Command::Clear => Step::quiet(clear_all()),
        Command::Backspace => Step::quiet(backspace(state)),
        Command::Unary(function) => apply_unary(&state.dismissed(), function),
        Command::Constant(constant) => Step::quiet(insert_constant(&state.dismissed(), constant)),
        Command::Recall(value) => Step::quiet(recall(&value)),
    }
}

/// Append a digit or decimal point to the current operand.
///
/// A second point is ignored, and a leading `"0"` is replaced by the first
/// non-point digit. Characters other than `0`-`9` and `.` are ignored.
pub fn enter_digit(state: &CalculatorState, digit: char) -> CalculatorState {
    let mut next = state.clone();
    if digit == '.' {
        if !next.current_operand.contains('.') {
            next.current_operand.push('.');
        }
    } else if digit.is_ascii_digit() {
        if next.current_operand == INITIAL_OPERAND {
            next.current_operand = digit.to_string();
        } else {
            next.current_operand.push(digit);
        }
    }
    next
}

/// Set a pending operation, resolving the previous one first if needed.
///
/// When the chained resolve fails, its error state is returned as-is and the
/// new operator is dropped.
pub fn enter_operator(state: &CalculatorState, operator: Operator) -> Step {
    let (base, calculation) = if state.pending.is_some() {
        let step = resolve(state);
        if step.state.has_error() {
            return step;
        }
        (step.state, step.calculation)
    } else {
        (state.clone(), None)
    };

    let next = CalculatorState {
        current_operand: INITIAL_OPERAND.to_string(),
        pending: Some(PendingOperation {
            operand: base.current_operand,
            operator,
        }),
        error: None,
    };

    Step {
        state: next,
        calculation,
    }
}

/// Evaluate the pending operation against the current operand.
///
/// Without a pending operation the state is returned unchanged.
pub fn resolve(state: &CalculatorState) -> Step {
    let Some(pending) = &state.pending else {
        return Step::quiet(state.clone());
    };

    let lhs = parse_operand(&pending.operand);
    let rhs = parse_operand(&state.current_operand);

    match evaluate_binary(lhs, pending.operator, rhs) {
        Ok(value) => {
            let result = format_number(value);
            let calculation = Calculation {
                expression: format!(
                    "{} {} {}",
                    pending.operand,
                    pending.operator.symbol(),
                    state.current_operand
                ),
                result: result.clone(),
            };
            Step::completed(CalculatorState::showing(result), calculation)
        }
        Err(error) => Step::quiet(CalculatorState::failed(error)),
    }
}

/// The `=` key. Same as `resolve`.
pub fn equals(state: &CalculatorState) -> Step {
    resolve(state)
}

pub fn clear_all() -> CalculatorState {
    CalculatorState::new()
}

/// Remove the last character, or dismiss an active error.
pub fn backspace(state: &CalculatorState) -> CalculatorState {
    let mut next = state.dismissed();
    if state.has_error() {
        next.current_operand = INITIAL_OPERAND.to_string();
        return next;
    }

    next.current_operand.pop();
    if next.current_operand.is_empty() || next.current_operand == "-" {
        next.current_operand = INITIAL_OPERAND.to_string();
    }
    next
}

/// Apply a scientific function to the current operand.
///
/// The pending operation, if any, is left in place.
pub fn apply_unary(state: &CalculatorState, function: UnaryFn) -> Step {
    let operand = parse_operand(&state.current_operand);
    let mut next = state.clone();

    match evaluate_unary(function, operand) {
        Ok(value) => {
            let result = format_number(value);
            let calculation = Calculation {
                expression: format!("{}({})", function.label(), state.current_operand),
                result: result.clone(),
            };
            next.current_operand = result;
            Step::completed(next, calculation)
        }
        Err(error) => {
            next.current_operand = INITIAL_OPERAND.to_string();
            next.error = Some(error);
            Step::quiet(next)
        }
    }
}

/// Replace the current operand with a constant. Not a calculation.
pub fn insert_constant(state: &CalculatorState, constant: Constant) -> CalculatorState {
    CalculatorState {
        current_operand: constant.text(),
        ..state.clone()
    }
}

/// Start a new calculation from a previous result.
pub fn recall(value: &str) -> CalculatorState {
    let value = value.trim();
    if value.is_empty() {
        CalculatorState::new()
    } else {
        CalculatorState::showing(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CalcError;

    fn run(commands: impl IntoIterator<Item = Command>) -> (CalculatorState, Vec<Calculation>) {
        let mut state = CalculatorState::new();
        let mut calculations = Vec::new();
        for command in commands {
            let step = reduce(&state, command);
            calculations.extend(step.calculation);
            state = step.state;
        }
        (state, calculations)
    }

    fn digits(text: &str) -> Vec<Command> {
        text.chars().map(Command::Digit).collect()
    }

    #[test]
    fn leading_zero_is_replaced() {
        let (state, _) = run(digits("007"));
        assert_eq!(state.current_operand(), "7");
    }

    #[test]
    fn second_decimal_point_is_ignored() {
        let (state, _) = run(digits("1.2.3"));
        assert_eq!(state.current_operand(), "1.23");
    }

    #[test]
    fn point_after_zero_keeps_zero() {
        let (state, _) = run(digits(".5"));
        assert_eq!(state.current_operand(), "0.5");
    }

    #[test]
    fn non_digit_characters_are_ignored() {
        let state = enter_digit(&CalculatorState::new(), 'x');
        assert_eq!(state, CalculatorState::new());
    }

    #[test]
    fn addition_emits_record() {
        let (state, calculations) = run([
            Command::Digit('5'),
            Command::Operator(Operator::Add),
            Command::Digit('3'),
            Command::Equals,
        ]);

        assert_eq!(state.current_operand(), "8");
        assert!(state.pending().is_none());
        assert_eq!(
            calculations,
            vec![Calculation {
                expression: "5 + 3".to_string(),
                result: "8".to_string(),
            }]
        );
    }

    #[test]
    fn decimal_sum_is_rounded() {
        let mut commands = digits("0.1");
        commands.push(Command::Operator(Operator::Add));
        commands.extend(digits("0.2"));
        commands.push(Command::Equals);

        let (state, calculations) = run(commands);

        assert_eq!(state.current_operand(), "0.3");
        assert_eq!(calculations[0].expression, "0.1 + 0.2");
    }

    #[test]
    fn division_by_zero_sets_error_without_record() {
        let (state, calculations) = run([
            Command::Digit('8'),
            Command::Operator(Operator::Divide),
            Command::Digit('0'),
            Command::Equals,
        ]);

        assert_eq!(state.error(), Some(&CalcError::DivisionByZero));
        assert_eq!(state.current_operand(), "0");
        assert!(state.pending().is_none());
        assert!(calculations.is_empty());
    }

    #[test]
    fn resolve_without_pending_is_noop() {
        let (state, _) = run(digits("42"));
        let step = resolve(&state);
        assert_eq!(step.state, state);
        assert!(step.calculation.is_none());
    }

    #[test]
    fn chained_operators_resolve_left_to_right() {
        let (state, calculations) = run([
            Command::Digit('2'),
            Command::Operator(Operator::Add),
            Command::Digit('3'),
            Command::Operator(Operator::Multiply),
            Command::Digit('4'),
            Command::Equals,
        ]);

        assert_eq!(state.current_operand(), "20");
        assert_eq!(calculations.len(), 2);
        assert_eq!(calculations[0].expression, "2 + 3");
        assert_eq!(calculations[1].expression, "5 × 4");
    }

    #[test]
    fn failed_chain_keeps_error_state() {
        let (state, calculations) = run([
            Command::Digit('1'),
            Command::Operator(Operator::Divide),
            Command::Digit('0'),
            Command::Operator(Operator::Add),
        ]);

        assert_eq!(state.error(), Some(&CalcError::DivisionByZero));
        assert!(state.pending().is_none());
        assert!(calculations.is_empty());
    }

    #[test]
    fn digit_dismisses_error() {
        let (state, _) = run([
            Command::Digit('1'),
            Command::Operator(Operator::Divide),
            Command::Digit('0'),
            Command::Equals,
            Command::Digit('9'),
        ]);

        assert!(!state.has_error());
        assert_eq!(state.current_operand(), "9");
    }

    #[test]
    fn backspace_edits_operand() {
        let (state, _) = run(digits("12"));
        let state = backspace(&state);
        assert_eq!(state.current_operand(), "1");
        let state = backspace(&state);
        assert_eq!(state.current_operand(), "0");
        let state = backspace(&state);
        assert_eq!(state.current_operand(), "0");
    }

    #[test]
    fn backspace_on_negative_single_digit_resets() {
        let state = recall("-3");
        assert_eq!(backspace(&state).current_operand(), "0");
    }

    #[test]
    fn backspace_dismisses_error() {
        let state = CalculatorState::failed(CalcError::ResultOverflow);
        let next = backspace(&state);
        assert!(!next.has_error());
        assert_eq!(next.current_operand(), "0");
    }

    #[test]
    fn backspace_on_error_keeps_pending_operand() {
        let (state, calculations) = run([
            Command::Digit('5'),
            Command::Operator(Operator::Subtract),
            Command::Digit('0'),
            Command::Unary(UnaryFn::Ln),
            Command::Backspace,
        ]);

        assert!(!state.has_error());
        assert_eq!(state.current_operand(), "0");
        let pending = state.pending().unwrap();
        assert_eq!(pending.operand, "5");
        assert_eq!(pending.operator, Operator::Subtract);
        assert!(calculations.is_empty());
    }

    #[test]
    fn backspace_keeps_pending_operation() {
        let (state, _) = run([
            Command::Digit('4'),
            Command::Operator(Operator::Subtract),
            Command::Digit('2'),
            Command::Digit('5'),
            Command::Backspace,
        ]);

        assert_eq!(state.current_operand(), "2");
        assert_eq!(state.pending().unwrap().operand, "4");
    }

    #[test]
    fn sqrt_of_negative_is_invalid() {
        let state = recall("-4");
        let step = apply_unary(&state, UnaryFn::Sqrt);
        assert_eq!(
            step.state.error(),
            Some(&CalcError::InvalidDomain {
                function: UnaryFn::Sqrt
            })
        );
        assert_eq!(step.state.current_operand(), "0");
        assert!(step.calculation.is_none());
    }

    #[test]
    fn sqrt_emits_record() {
        let (_, calculations) = run([Command::Digit('4'), Command::Unary(UnaryFn::Sqrt)]);
        let calculation = &calculations[0];
        assert_eq!(
            format!("{} = {}", calculation.expression, calculation.result),
            "sqrt(4) = 2"
        );
    }

    #[test]
    fn unary_keeps_pending_operation() {
        let (state, calculations) = run([
            Command::Digit('2'),
            Command::Operator(Operator::Add),
            Command::Digit('9'),
            Command::Unary(UnaryFn::Sqrt),
            Command::Equals,
        ]);

        assert_eq!(state.current_operand(), "5");
        assert_eq!(calculations.len(), 2);
        assert_eq!(calculations[1].expression, "2 + 3");
    }

    #[test]
    fn constant_does_not_record() {
        let (state, calculations) = run([Command::Constant(Constant::Pi)]);
        assert_eq!(state.current_operand(), "3.141592653589793");
        assert!(calculations.is_empty());
    }

    #[test]
    fn recall_starts_fresh_calculation() {
        let (state, _) = run([
            Command::Digit('6'),
            Command::Operator(Operator::Multiply),
            Command::Recall("1.5".to_string()),
        ]);

        assert_eq!(state.current_operand(), "1.5");
        assert!(state.pending().is_none());
    }

    #[test]
    fn clear_all_is_idempotent() {
        let (state, _) = run(digits("123"));
        let once = reduce(&state, Command::Clear).state;
        let twice = reduce(&once, Command::Clear).state;
        assert_eq!(once, CalculatorState::new());
        assert_eq!(once, twice);
    }
}
