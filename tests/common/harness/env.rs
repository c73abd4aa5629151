//! Isolated test environment with temp directory.

// Not every test binary uses every helper
#![allow(dead_code)]

use super::StickiesCommand;
use std::path::{Path, PathBuf};
use stickies::domain::Note;
use stickies::storage::{FileStore, JsonStorage, KeyValueStore, NOTES_KEY, NoteStorage};
use tempfile::TempDir;

/// Isolated test environment with a temporary storage directory.
///
/// The config file path points inside the temp directory so a developer's
/// own `~/.config/stickies/config.toml` never leaks into tests.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    temp_dir: TempDir,
    /// Path to the storage directory
    store_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store_dir = temp_dir.path().join("store");
        Self {
            temp_dir,
            store_dir,
        }
    }

    /// Returns the root of the temp directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Returns the path to the storage directory.
    pub fn store_dir(&self) -> &Path {
        &self.store_dir
    }

    /// Returns the path the CLI will read its config from.
    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.toml")
    }

    /// Writes the config file.
    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.config_path(), contents).expect("Failed to write config");
    }

    /// Replaces the stored collection directly.
    pub fn seed(&self, notes: &[Note]) {
        JsonStorage::new(FileStore::new(&self.store_dir))
            .save(notes)
            .expect("Failed to seed notes");
    }

    /// Writes a raw value under the notes key.
    pub fn seed_raw(&self, raw: &str) {
        FileStore::new(&self.store_dir)
            .set_item(NOTES_KEY, raw)
            .expect("Failed to write raw notes");
    }

    /// Loads the stored collection in storage order.
    pub fn stored_notes(&self) -> Vec<Note> {
        JsonStorage::new(FileStore::new(&self.store_dir)).load()
    }

    /// Creates a command configured for this test environment.
    pub fn cmd(&self) -> StickiesCommand {
        StickiesCommand::new()
            .config(&self.config_path())
            .dir(&self.store_dir)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
