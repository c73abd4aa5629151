//! Persistence: the note storage adapter and the key-value media behind it

mod file;
mod json;
mod memory;
mod repository;

pub use file::FileStore;
pub use json::{JsonStorage, NOTES_KEY};
pub use memory::MemoryStore;
pub use repository::{KeyValueStore, NoteStorage, StorageError, StorageResult};
