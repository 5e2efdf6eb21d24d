//! On-screen button grid.

use crate::core::{Command, Constant, Operator, UnaryFn};

/// The twelve buttons shown in scientific mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScientificButton {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Square,
    Cube,
    Log,
    Ln,
    Reciprocal,
    Negate,
    Pi,
    E,
}

impl ScientificButton {
    /// Grid order.
    pub const ALL: [Self; 12] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Sqrt,
        Self::Square,
        Self::Cube,
        Self::Log,
        Self::Ln,
        Self::Reciprocal,
        Self::Negate,
        Self::Pi,
        Self::E,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sqrt => "√",
            Self::Square => "x²",
            Self::Cube => "x³",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Reciprocal => "1/x",
            Self::Negate => "+/-",
            Self::Pi => "π",
            Self::E => "e",
        }
    }

    pub fn command(&self) -> Command {
        match self {
            Self::Sin => Command::Unary(UnaryFn::Sin),
            Self::Cos => Command::Unary(UnaryFn::Cos),
            Self::Tan => Command::Unary(UnaryFn::Tan),
            Self::Sqrt => Command::Unary(UnaryFn::Sqrt),
            Self::Square => Command::Unary(UnaryFn::Square),
            Self::Cube => Command::Unary(UnaryFn::Cube),
            Self::Log => Command::Unary(UnaryFn::Log10),
            Self::Ln => Command::Unary(UnaryFn::Ln),
            Self::Reciprocal => Command::Unary(UnaryFn::Reciprocal),
            Self::Negate => Command::Unary(UnaryFn::Negate),
            Self::Pi => Command::Constant(Constant::Pi),
            Self::E => Command::Constant(Constant::E),
        }
    }
}

/// Any button on the calculator screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    /// `0`-`9` or `.`
    Digit(char),
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
    Scientific(ScientificButton),
    ToggleTheme,
    ToggleScientific,
    ShowHistory,
}

/// What pressing a button does.
#[derive(Clone, Debug, PartialEq)]
pub enum ButtonAction {
    Command(Command),
    ToggleTheme,
    ToggleScientific,
    ShowHistory,
}

/// Number pad, in grid order.
pub const KEYPAD: [Button; 11] = [
    Button::Digit('7'),
    Button::Digit('8'),
    Button::Digit('9'),
    Button::Digit('4'),
    Button::Digit('5'),
    Button::Digit('6'),
    Button::Digit('1'),
    Button::Digit('2'),
    Button::Digit('3'),
    Button::Digit('0'),
    Button::Digit('.'),
];

impl Button {
    pub fn action(&self) -> ButtonAction {
        match self {
            Self::Digit(digit) => ButtonAction::Command(Command::Digit(*digit)),
            Self::Operator(operator) => ButtonAction::Command(Command::Operator(*operator)),
            Self::Equals => ButtonAction::Command(Command::Equals),
            Self::Clear => ButtonAction::Command(Command::Clear),
            Self::Backspace => ButtonAction::Command(Command::Backspace),
            Self::Scientific(button) => ButtonAction::Command(button.command()),
            Self::ToggleTheme => ButtonAction::ToggleTheme,
            Self::ToggleScientific => ButtonAction::ToggleScientific,
            Self::ShowHistory => ButtonAction::ShowHistory,
        }
    }

    /// The command this button issues, if it issues one.
    pub fn command(&self) -> Option<Command> {
        match self.action() {
            ButtonAction::Command(command) => Some(command),
            _ => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Digit(digit) => digit.to_string(),
            Self::Operator(operator) => operator.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "AC".to_string(),
            Self::Backspace => "⌫".to_string(),
            Self::Scientific(button) => button.label().to_string(),
            Self::ToggleTheme => "Theme".to_string(),
            Self::ToggleScientific => "Scientific".to_string(),
            Self::ShowHistory => "History".to_string(),
        }
    }
}
