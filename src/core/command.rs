//! Commands accepted by the reducer.
//!
//! Buttons and keys are two input sources for the same operations. Both are
//! translated into a `Command` before anything else happens.

/// The four binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Symbol used in the display and in history expressions.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Parse an operator from its keyboard character (`+ - * /`).
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            _ => None,
        }
    }
}

/// Single-argument scientific functions.
///
/// Trigonometric functions take their argument in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryFn {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Square,
    Cube,
    Log10,
    Ln,
    Reciprocal,
    Negate,
}

impl UnaryFn {
    /// Name used in history expressions, e.g. `sqrt(4)`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sqrt => "sqrt",
            Self::Square => "square",
            Self::Cube => "cube",
            Self::Log10 => "log",
            Self::Ln => "ln",
            Self::Reciprocal => "1/x",
            Self::Negate => "+/-",
        }
    }

    pub(crate) fn domain_name(&self) -> &'static str {
        match self {
            Self::Sqrt => "square root",
            Self::Log10 => "logarithm",
            Self::Ln => "natural logarithm",
            other => other.label(),
        }
    }
}

/// Named constants that can be inserted as the current operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    pub fn value(&self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        }
    }

    /// Full-precision decimal text, e.g. `3.141592653589793`.
    pub fn text(&self) -> String {
        self.value().to_string()
    }
}

/// One input event, independent of where it came from.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// A digit `0`-`9` or the decimal point `.`.
    Digit(char),
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
    Unary(UnaryFn),
    Constant(Constant),
    /// Start a fresh calculation from a previous result.
    Recall(String),
}
