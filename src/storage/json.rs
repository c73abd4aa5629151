//! JSON persistence adapter over any key-value medium.

use serde_json::Value;

use crate::domain::Note;

use super::repository::{KeyValueStore, NoteStorage, StorageResult};

/// The well-known key holding the serialized collection.
pub const NOTES_KEY: &str = "notes";

/// Stores the note collection as one JSON array under [`NOTES_KEY`].
///
/// A missing key, an unreadable medium, or a value that is not a JSON array
/// all load as an empty collection. The next save then overwrites whatever
/// was there, so corrupt data is lost rather than blocking the app. Inside a
/// valid array, records that are not notes are skipped one by one and the
/// rest load normally.
#[derive(Debug, Clone, Default)]
pub struct JsonStorage<K> {
    medium: K,
}

impl<K: KeyValueStore> JsonStorage<K> {
    pub fn new(medium: K) -> Self {
        Self { medium }
    }

    /// Returns the underlying medium.
    pub fn medium(&self) -> &K {
        &self.medium
    }
}

impl<K: KeyValueStore> NoteStorage for JsonStorage<K> {
    fn load(&self) -> Vec<Note> {
        let raw = match self.medium.get_item(NOTES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read notes; treating as empty");
                return Vec::new();
            }
        };

        let records = match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, "stored notes are corrupt; treating as empty");
                return Vec::new();
            }
        };

        records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value::<Note>(record) {
                Ok(note) => Some(note),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping malformed note record");
                    None
                }
            })
            .collect()
    }

    fn save(&mut self, notes: &[Note]) -> StorageResult<()> {
        let raw = serde_json::to_string(notes)?;
        self.medium.set_item(NOTES_KEY, &raw)?;
        tracing::debug!(count = notes.len(), bytes = raw.len(), "saved notes");
        Ok(())
    }
}
