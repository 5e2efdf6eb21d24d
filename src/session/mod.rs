//! The imperative shell around the pure core.
//!
//! A `Session` owns everything that lives for one run of the widget: the
//! calculator state, the history store, preferences, and the view flags a
//! front end needs (current screen, scientific mode, shortcuts overlay,
//! active-key highlight). Each input runs the reducer, then commits whatever
//! it produced to storage.

mod view;

pub use view::DisplayView;

use crate::config::CalculatorConfig;
use crate::core::{reduce, CalculatorState, Command};
use crate::dispatch::{map_key, Button, ButtonAction, KeyAction};
use crate::history::{HistoryLog, HistoryStore, RecordId};
use crate::preferences::Preferences;
use crate::storage::KeyValueStore;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

/// Which screen is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Calculator,
    History,
}

/// Command issued by the most recent key press, for button highlighting.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveKey {
    pub command: Command,
    pub pressed_at: DateTime<Utc>,
}

/// One calculator session.
///
/// # Example
///
/// ```rust
/// use calcmaster::config::CalculatorConfig;
/// use calcmaster::session::Session;
/// use calcmaster::storage::MemoryStore;
///
/// let mut session = Session::open(MemoryStore::new(), CalculatorConfig::default());
/// for key in ["9", "/", "4", "Enter"] {
///     session.press_key(key);
/// }
///
/// assert_eq!(session.view().main_line, "2.25");
/// assert_eq!(session.history_lines(), vec!["9 ÷ 4 = 2.25".to_string()]);
/// ```
pub struct Session<K: KeyValueStore> {
    storage: K,
    config: CalculatorConfig,
    state: CalculatorState,
    history: HistoryStore,
    preferences: Preferences,
    screen: Screen,
    scientific: bool,
    shortcuts_visible: bool,
    active_key: Option<ActiveKey>,
}

impl<K: KeyValueStore> Session<K> {
    /// Start a session, loading preferences and history from `storage`.
    pub fn open(storage: K, config: CalculatorConfig) -> Self {
        let preferences =
            Preferences::load(&storage, &config.theme_key, config.default_dark_mode);
        let history = HistoryStore::load(&storage, config.history_key.clone());
        info!(theme = preferences.theme_name(), "calculator session opened");

        Self {
            storage,
            config,
            state: CalculatorState::new(),
            history,
            preferences,
            screen: Screen::Calculator,
            scientific: false,
            shortcuts_visible: false,
            active_key: None,
        }
    }

    /// Run one command through the reducer and commit its calculation.
    ///
    /// Returns the id of the history record created, if any.
    pub fn execute(&mut self, command: Command) -> Option<RecordId> {
        debug!(?command, "executing command");
        let step = reduce(&self.state, command);
        self.state = step.state;
        step.calculation.map(|calculation| self.history.append(&mut self.storage, calculation))
    }

    /// Handle a key press now.
    pub fn press_key(&mut self, key: &str) -> KeyAction {
        self.press_key_at(key, Utc::now())
    }

    /// Handle a key press at `now`.
    ///
    /// Keys are ignored while the history screen is showing.
    pub fn press_key_at(&mut self, key: &str, now: DateTime<Utc>) -> KeyAction {
        if self.screen != Screen::Calculator {
            return KeyAction::Ignored;
        }

        let action = map_key(key, self.scientific);
        match &action {
            KeyAction::Command(command) => {
                self.active_key = Some(ActiveKey {
                    command: command.clone(),
                    pressed_at: now,
                });
                self.execute(command.clone());
            }
            KeyAction::ToggleShortcuts => self.toggle_shortcuts(),
            KeyAction::Ignored => {}
        }
        action
    }

    /// Handle a button click. Scientific buttons do nothing unless
    /// scientific mode is on.
    pub fn press_button(&mut self, button: Button) {
        if matches!(button, Button::Scientific(_)) && !self.scientific {
            return;
        }
        match button.action() {
            ButtonAction::Command(command) => {
                self.execute(command);
            }
            ButtonAction::ToggleTheme => self.toggle_theme(),
            ButtonAction::ToggleScientific => self.toggle_scientific(),
            ButtonAction::ShowHistory => self.show_history(),
        }
    }

    /// Flip the theme and persist it.
    pub fn toggle_theme(&mut self) {
        self.preferences = self.preferences.toggled();
        if let Err(error) = self.preferences.save(&mut self.storage, &self.config.theme_key) {
            warn!(%error, "failed to persist theme preference");
        }
    }

    pub fn toggle_scientific(&mut self) {
        self.scientific = !self.scientific;
    }

    pub fn toggle_shortcuts(&mut self) {
        self.shortcuts_visible = !self.shortcuts_visible;
    }

    pub fn show_history(&mut self) {
        self.screen = Screen::History;
    }

    /// Return to the calculator screen.
    pub fn back(&mut self) {
        self.screen = Screen::Calculator;
    }

    /// "Use" a history entry: continue from its result on the calculator
    /// screen. Returns `false` when `id` is unknown.
    pub fn use_entry(&mut self, id: RecordId) -> bool {
        let Some(value) = self
            .history
            .log()
            .find(id)
            .map(|record| self.history.reuse(record))
        else {
            return false;
        };
        self.execute(Command::Recall(value));
        self.back();
        true
    }

    pub fn delete_entry(&mut self, id: RecordId) {
        self.history.remove(&mut self.storage, id);
    }

    pub fn clear_history(&mut self) {
        self.history.clear(&mut self.storage);
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn history(&self) -> &HistoryLog {
        self.history.log()
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_scientific(&self) -> bool {
        self.scientific
    }

    pub fn shortcuts_visible(&self) -> bool {
        self.shortcuts_visible
    }

    pub fn active_key(&self) -> Option<&ActiveKey> {
        self.active_key.as_ref()
    }

    /// Whether `button` should render highlighted at `now`.
    pub fn is_highlighted(&self, button: &Button, now: DateTime<Utc>) -> bool {
        let Some(active) = &self.active_key else {
            return false;
        };
        if now - active.pressed_at >= self.config.highlight_delay() {
            return false;
        }
        button.command().as_ref() == Some(&active.command)
    }

    pub fn view(&self) -> DisplayView {
        DisplayView::render(&self.state)
    }

    /// `expression = result` for each record, newest first.
    pub fn history_lines(&self) -> Vec<String> {
        self.history
            .log()
            .entries()
            .iter()
            .map(|record| record.summary())
            .collect()
    }

    pub fn storage(&self) -> &K {
        &self.storage
    }

    pub fn into_storage(self) -> K {
        self.storage
    }
}
