//! Theme preference, persisted separately from the history.

use crate::storage::{read_json, write_json, KeyValueStore, StorageError};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// User preferences. Stored as a bare JSON boolean (`true` = dark).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Preferences {
    pub dark_mode: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

impl Preferences {
    /// Read preferences from `key`, falling back to `default_dark_mode`
    /// when the key is missing or unreadable.
    pub fn load<K: KeyValueStore + ?Sized>(
        storage: &K,
        key: &str,
        default_dark_mode: bool,
    ) -> Self {
        let fallback = Self {
            dark_mode: default_dark_mode,
        };
        match read_json::<Preferences, _>(storage, key) {
            Ok(Some(preferences)) => preferences,
            Ok(None) => fallback,
            Err(error) => {
                warn!(%error, "ignoring unreadable theme preference");
                fallback
            }
        }
    }

    pub fn save<K: KeyValueStore + ?Sized>(
        &self,
        storage: &mut K,
        key: &str,
    ) -> Result<(), StorageError> {
        write_json(storage, key, self)
    }

    /// Preferences with the theme flipped.
    pub fn toggled(self) -> Self {
        Self {
            dark_mode: !self.dark_mode,
        }
    }

    pub fn theme_name(&self) -> &'static str {
        if self.dark_mode {
            "dark"
        } else {
            "light"
        }
    }
}
