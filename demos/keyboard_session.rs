//! Keyboard Session
//!
//! This demo drives a calculator session the way a front end would:
//! key names go in, display lines and history come out.
//!
//! Key concepts:
//! - Keys and buttons share one command vocabulary
//! - History and theme are persisted to a directory after every change
//! - Errors replace the display and are dismissed by the next input
//!
//! Run with: RUST_LOG=calcmaster=debug cargo run --example keyboard_session

use calcmaster::config::CalculatorConfig;
use calcmaster::dispatch::{Button, BASIC_SHORTCUTS, SCIENTIFIC_SHORTCUTS};
use calcmaster::session::Session;
use calcmaster::storage::FileStore;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Keyboard Session ===\n");

    let config = CalculatorConfig::default_path()
        .map(|path| CalculatorConfig::load_or_default(&path))
        .unwrap_or_default();
    let data_dir = std::env::temp_dir().join("calcmaster-demo");
    println!("Storing history in {}\n", data_dir.display());

    let mut session = Session::open(FileStore::new(&data_dir), config);
    println!(
        "Loaded {} previous calculation(s), theme: {}\n",
        session.history().len(),
        session.preferences().theme_name()
    );

    type_keys(&mut session, &["1", "2", ".", "5", "*", "4", "Enter"]);
    type_keys(&mut session, &["Escape", "0", ".", "1", "+", "0", ".", "2", "="]);
    type_keys(&mut session, &["Escape", "8", "/", "0", "Enter"]);
    type_keys(&mut session, &["Backspace"]);

    println!("\nSwitching to scientific mode");
    session.press_button(Button::ToggleScientific);
    type_keys(&mut session, &["Escape", "3", "0", "s"]);
    type_keys(&mut session, &["1", "0", "0", "0", "l"]);
    type_keys(&mut session, &["p"]);

    println!("\nShortcuts:");
    for shortcut in BASIC_SHORTCUTS.iter().chain(SCIENTIFIC_SHORTCUTS.iter()) {
        println!("  {:<16} {}", shortcut.action, shortcut.keys);
    }

    println!("\nHistory (newest first):");
    for line in session.history_lines() {
        println!("  {line}");
    }
}

fn type_keys(session: &mut Session<FileStore>, keys: &[&str]) {
    for key in keys {
        session.press_key(key);
    }
    let view = session.view();
    println!(
        "{:<40} | {:>12} | {}",
        keys.join(" "),
        view.expression_line,
        view.main_line
    );
}
