//! Input dispatch.
//!
//! Buttons and keys are the two input surfaces. Each only translates raw
//! input into a `Command` (or a UI-only action); the session runs it.

mod buttons;
mod keyboard;

pub use buttons::{Button, ButtonAction, ScientificButton, KEYPAD};
pub use keyboard::{
    map_key, prevents_default, scientific_binding, KeyAction, Shortcut, BASIC_SHORTCUTS,
    SCIENTIFIC_KEYS, SCIENTIFIC_SHORTCUTS, SHORTCUTS_KEY,
};
