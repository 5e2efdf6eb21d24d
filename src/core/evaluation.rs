//! Floating-point evaluation and result formatting.

use super::command::{Operator, UnaryFn};
use super::error::CalcError;

/// Number of decimal places results are rounded to.
pub const RESULT_DECIMALS: usize = 8;

/// Parse operand text. Text that is not a number evaluates as NaN, which
/// every operation then reports as a non-finite result.
pub fn parse_operand(text: &str) -> f64 {
    text.trim().parse().unwrap_or(f64::NAN)
}

/// Round to `RESULT_DECIMALS` places and fold `-0` into `0`.
pub fn round_result(value: f64) -> f64 {
    let rounded = format!("{:.*}", RESULT_DECIMALS, value)
        .parse::<f64>()
        .unwrap_or(value);
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Minimal decimal string for a result, e.g. `8`, `0.3`, `-2.5`.
pub fn format_number(value: f64) -> String {
    value.to_string()
}

/// Evaluate `lhs op rhs`, returning the rounded result.
pub fn evaluate_binary(lhs: f64, operator: Operator, rhs: f64) -> Result<f64, CalcError> {
    let raw = match operator {
        Operator::Add => lhs + rhs,
        Operator::Subtract => lhs - rhs,
        Operator::Multiply => lhs * rhs,
        Operator::Divide => {
            if rhs == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            lhs / rhs
        }
    };
    finite(raw)
}

/// Evaluate a unary function, returning the rounded result.
pub fn evaluate_unary(function: UnaryFn, operand: f64) -> Result<f64, CalcError> {
    let raw = match function {
        UnaryFn::Sin => operand.to_radians().sin(),
        UnaryFn::Cos => operand.to_radians().cos(),
        UnaryFn::Tan => operand.to_radians().tan(),
        UnaryFn::Sqrt => {
            if operand < 0.0 {
                return Err(CalcError::InvalidDomain { function });
            }
            operand.sqrt()
        }
        UnaryFn::Square => operand.powi(2),
        UnaryFn::Cube => operand.powi(3),
        UnaryFn::Log10 => {
            if operand <= 0.0 {
                return Err(CalcError::InvalidDomain { function });
            }
            operand.log10()
        }
        UnaryFn::Ln => {
            if operand <= 0.0 {
                return Err(CalcError::InvalidDomain { function });
            }
            operand.ln()
        }
        UnaryFn::Reciprocal => {
            if operand == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            1.0 / operand
        }
        UnaryFn::Negate => -operand,
    };
    finite(raw)
}

fn finite(raw: f64) -> Result<f64, CalcError> {
    if raw.is_finite() {
        Ok(round_result(raw))
    } else {
        Err(CalcError::ResultOverflow)
    }
}
