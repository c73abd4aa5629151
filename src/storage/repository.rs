//! Storage traits and error types.

use crate::domain::Note;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a storage medium when it rejects a read or write.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The write would push the medium past its byte quota.
    #[error("storage quota exceeded writing '{key}': {needed} bytes needed, quota is {quota}")]
    QuotaExceeded { key: String, needed: u64, quota: u64 },

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The collection could not be serialized.
    #[error("failed to serialize notes: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The key cannot be used with this medium.
    #[error("invalid storage key '{key}'")]
    InvalidKey { key: String },

    /// The medium is disabled or otherwise unreachable.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Persistence adapter for the whole note collection.
///
/// The collection is read and written wholesale: there are no partial
/// updates. `load` never fails; missing or unreadable data is an empty
/// collection. `save` must report every rejected write.
pub trait NoteStorage {
    /// Loads every stored note in storage order.
    fn load(&self) -> Vec<Note>;

    /// Replaces the stored collection.
    fn save(&mut self, notes: &[Note]) -> StorageResult<()>;
}

/// A string key-value medium scoped to one origin, in the manner of
/// browser `localStorage`.
///
/// Values are raw strings; encoding is the caller's concern.
pub trait KeyValueStore {
    /// Reads the value under `key`, or `None` if the key is absent.
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove_item(&mut self, key: &str) -> StorageResult<()>;
}

/// Checks that storing `key`/`value` next to `others` bytes of existing
/// entries stays within `quota`.
///
/// An entry costs the byte length of its key plus its value.
pub(crate) fn check_quota(
    key: &str,
    value: &str,
    others: u64,
    quota: Option<u64>,
) -> StorageResult<()> {
    let Some(quota) = quota else {
        return Ok(());
    };
    let needed = others + (key.len() + value.len()) as u64;
    if needed > quota {
        return Err(StorageError::QuotaExceeded {
            key: key.to_string(),
            needed,
            quota,
        });
    }
    Ok(())
}
