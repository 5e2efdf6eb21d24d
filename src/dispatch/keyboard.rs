//! Keyboard bindings.
//!
//! Keys are identified by their DOM-style names: `"7"`, `"+"`, `"Enter"`,
//! `"Backspace"`, `"Escape"`, `"s"`.

use super::buttons::ScientificButton;
use crate::core::{Command, Operator};

/// Result of mapping one key press.
#[derive(Clone, Debug, PartialEq)]
pub enum KeyAction {
    Command(Command),
    ToggleShortcuts,
    Ignored,
}

/// Letter that shows or hides the shortcuts overlay, in any mode.
pub const SHORTCUTS_KEY: char = 'h';

/// Letter bindings active in scientific mode (matched case-insensitively).
pub const SCIENTIFIC_KEYS: [(char, ScientificButton); 8] = [
    ('s', ScientificButton::Sin),
    ('c', ScientificButton::Cos),
    ('t', ScientificButton::Tan),
    ('r', ScientificButton::Sqrt),
    ('l', ScientificButton::Log),
    ('n', ScientificButton::Ln),
    ('p', ScientificButton::Pi),
    ('e', ScientificButton::E),
];

/// One line of the shortcuts overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shortcut {
    pub action: &'static str,
    pub keys: &'static str,
}

pub const BASIC_SHORTCUTS: [Shortcut; 8] = [
    Shortcut { action: "Numbers", keys: "0-9" },
    Shortcut { action: "Decimal", keys: "." },
    Shortcut { action: "Add", keys: "+" },
    Shortcut { action: "Subtract", keys: "-" },
    Shortcut { action: "Multiply", keys: "*" },
    Shortcut { action: "Divide", keys: "/" },
    Shortcut { action: "Equal", keys: "Enter" },
    Shortcut { action: "Clear", keys: "Escape" },
];

pub const SCIENTIFIC_SHORTCUTS: [Shortcut; 8] = [
    Shortcut { action: "Sin", keys: "s" },
    Shortcut { action: "Cos", keys: "c" },
    Shortcut { action: "Tan", keys: "t" },
    Shortcut { action: "Square Root", keys: "r" },
    Shortcut { action: "Log", keys: "l" },
    Shortcut { action: "Ln", keys: "n" },
    Shortcut { action: "Pi", keys: "p" },
    Shortcut { action: "Euler's number", keys: "e" },
];

/// Map a key to an action.
///
/// # Example
///
/// ```rust
/// use calcmaster::core::{Command, Operator, UnaryFn};
/// use calcmaster::dispatch::{map_key, KeyAction};
///
/// assert_eq!(map_key("*", false), KeyAction::Command(Command::Operator(Operator::Multiply)));
/// assert_eq!(map_key("s", false), KeyAction::Ignored);
/// assert_eq!(map_key("S", true), KeyAction::Command(Command::Unary(UnaryFn::Sin)));
/// ```
pub fn map_key(key: &str, scientific: bool) -> KeyAction {
    let letter = single_char(key).map(|c| c.to_ascii_lowercase());

    if letter == Some(SHORTCUTS_KEY) {
        return KeyAction::ToggleShortcuts;
    }

    if let Some(c) = single_char(key) {
        if c.is_ascii_digit() || c == '.' {
            return KeyAction::Command(Command::Digit(c));
        }
    }

    if let Some(operator) = Operator::from_key(key) {
        return KeyAction::Command(Command::Operator(operator));
    }

    match key {
        "Enter" | "=" => KeyAction::Command(Command::Equals),
        "Backspace" => KeyAction::Command(Command::Backspace),
        "Escape" => KeyAction::Command(Command::Clear),
        _ if scientific => letter
            .and_then(scientific_binding)
            .map(|button| KeyAction::Command(button.command()))
            .unwrap_or(KeyAction::Ignored),
        _ => KeyAction::Ignored,
    }
}

/// Scientific button bound to a lowercase letter.
pub fn scientific_binding(letter: char) -> Option<ScientificButton> {
    SCIENTIFIC_KEYS
        .iter()
        .find(|(key, _)| *key == letter)
        .map(|(_, button)| *button)
}

/// Keys whose browser default action must be suppressed.
pub fn prevents_default(key: &str) -> bool {
    matches!(key, "Enter" | "=" | "Escape")
}

fn single_char(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Constant, UnaryFn};

    #[test]
    fn digits_and_point_enter_digits() {
        for key in ["0", "5", "9", "."] {
            let expected = Command::Digit(key.chars().next().unwrap());
            assert_eq!(map_key(key, false), KeyAction::Command(expected));
        }
    }

    #[test]
    fn special_keys() {
        assert_eq!(map_key("Enter", false), KeyAction::Command(Command::Equals));
        assert_eq!(map_key("=", false), KeyAction::Command(Command::Equals));
        assert_eq!(
            map_key("Backspace", false),
            KeyAction::Command(Command::Backspace)
        );
        assert_eq!(map_key("Escape", true), KeyAction::Command(Command::Clear));
    }

    #[test]
    fn shortcuts_toggle_in_any_mode() {
        assert_eq!(map_key("h", false), KeyAction::ToggleShortcuts);
        assert_eq!(map_key("H", true), KeyAction::ToggleShortcuts);
    }

    #[test]
    fn scientific_letters_need_scientific_mode() {
        assert_eq!(map_key("r", false), KeyAction::Ignored);
        assert_eq!(
            map_key("r", true),
            KeyAction::Command(Command::Unary(UnaryFn::Sqrt))
        );
        assert_eq!(
            map_key("L", true),
            KeyAction::Command(Command::Unary(UnaryFn::Log10))
        );
        assert_eq!(
            map_key("p", true),
            KeyAction::Command(Command::Constant(Constant::Pi))
        );
        assert_eq!(
            map_key("e", true),
            KeyAction::Command(Command::Constant(Constant::E))
        );
    }

    #[test]
    fn unknown_keys_are_ignored() {
        assert_eq!(map_key("Tab", true), KeyAction::Ignored);
        assert_eq!(map_key("x", true), KeyAction::Ignored);
        assert_eq!(map_key("", false), KeyAction::Ignored);
        assert_eq!(map_key("Shift", false), KeyAction::Ignored);
    }

    #[test]
    fn default_prevented_for_submit_keys() {
        assert!(prevents_default("Enter"));
        assert!(prevents_default("="));
        assert!(prevents_default("Escape"));
        assert!(!prevents_default("Backspace"));
    }

    #[test]
    fn overlay_lists_every_scientific_key() {
        for (key, _) in SCIENTIFIC_KEYS {
            assert!(SCIENTIFIC_SHORTCUTS
                .iter()
                .any(|s| s.keys == key.to_string()));
        }
    }
}
