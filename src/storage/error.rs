//! Storage error types.

use thiserror::Error;

/// Errors that can occur while reading or writing persisted values
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying file I/O failed
    #[error("I/O failed for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Encoding a value to JSON failed
    #[error("Serialization failed for key '{key}': {message}")]
    SerializationFailed { key: String, message: String },

    /// A stored value could not be decoded
    #[error("Deserialization failed for key '{key}': {message}")]
    DeserializationFailed { key: String, message: String },

    /// Key cannot be mapped onto the backing store
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),
}
