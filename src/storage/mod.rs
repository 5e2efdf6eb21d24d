//! Key-value persistence.
//!
//! The calculator persists two values: the theme preference and the history
//! log, each JSON-encoded under its own key. `KeyValueStore` is the seam to
//! whatever backs that storage; `MemoryStore` and `FileStore` are provided.

mod error;
mod file;
mod memory;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Default key for the theme preference.
pub const THEME_KEY: &str = "calculatorTheme";

/// Default key for the calculation history.
pub const HISTORY_KEY: &str = "calculatorHistory";

/// String key-value store.
///
/// Reads of a missing key return `Ok(None)`. Removing a missing key is not
/// an error.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Read and decode a JSON value.
pub fn read_json<T, K>(store: &K, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    K: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StorageError::DeserializationFailed {
            key: key.to_string(),
            message: e.to_string(),
        })
}

/// Encode and write a JSON value.
pub fn write_json<T, K>(store: &mut K, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    K: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|e| StorageError::SerializationFailed {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    store.set(key, &raw)
}
