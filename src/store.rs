//! NoteStore: note operations over an injected persistence adapter.

use crate::domain::{Note, NoteId};
use crate::export::render_csv;
use crate::search::{matches, normalize_query};
use crate::storage::{NoteStorage, StorageResult};

/// Create/read/update/delete, pinning, search, and export over a note
/// collection.
///
/// The store keeps no copy of the collection. Every operation loads the full
/// collection from storage, works on it, and (for mutations) saves the full
/// collection back.
///
/// # Concurrency
///
/// Other processes sharing the same storage (another terminal, another
/// browser tab in the web build) are not coordinated with. There is no
/// locking or versioning: two overlapping load-modify-save cycles race, and
/// the later save overwrites the whole collection written by the earlier one
/// (last write wins).
///
/// # Errors
///
/// An id that matches no note is reported through a `false`/`None` return,
/// never as an error, since the note may simply have been deleted
/// elsewhere. Only storage write failures surface as `Err`. When a save
/// fails the operation's result is discarded, because it no longer reflects
/// what is stored.
#[derive(Debug)]
pub struct NoteStore<S> {
    storage: S,
}

impl<S: NoteStorage> NoteStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Returns the underlying storage adapter.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns every note, pinned notes first.
    ///
    /// Within each group the storage order is kept.
    pub fn list_notes(&self) -> Vec<Note> {
        display_order(self.storage.load())
    }

    /// Looks up a note by exact id.
    pub fn get_note(&self, id: &NoteId) -> Option<Note> {
        self.storage.load().into_iter().find(|n| n.id() == id)
    }

    /// Creates an unpinned note from trimmed `content`.
    ///
    /// Returns `Ok(None)` without touching storage when the trimmed content
    /// is empty.
    pub fn create_note(&mut self, content: &str) -> StorageResult<Option<Note>> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            tracing::debug!("ignoring blank note");
            return Ok(None);
        }

        let mut notes = self.storage.load();
        let note = Note::new(NoteId::new(), trimmed);
        notes.push(note.clone());
        self.storage.save(&notes)?;

        tracing::debug!(id = %note.id(), "created note");
        Ok(Some(note))
    }

    /// Replaces a note's content verbatim. Empty content is allowed.
    ///
    /// Returns `Ok(false)` if no note has this id.
    pub fn update_content(&mut self, id: &NoteId, new_content: &str) -> StorageResult<bool> {
        self.modify(id, |note| note.set_content(new_content))
    }

    /// Flips a note's pin flag.
    ///
    /// Returns `Ok(false)` if no note has this id.
    pub fn toggle_pin(&mut self, id: &NoteId) -> StorageResult<bool> {
        self.modify(id, Note::toggle_fixed)
    }

    /// Removes a note permanently.
    ///
    /// Returns whether a note was removed. Storage is left untouched when
    /// nothing matched.
    pub fn delete_note(&mut self, id: &NoteId) -> StorageResult<bool> {
        let mut notes = self.storage.load();
        let before = notes.len();
        notes.retain(|n| n.id() != id);
        if notes.len() == before {
            tracing::debug!(%id, "delete skipped, note not found");
            return Ok(false);
        }

        self.storage.save(&notes)?;
        tracing::debug!(%id, "deleted note");
        Ok(true)
    }

    /// Appends an unpinned copy of a note under a fresh id.
    ///
    /// The copy is unpinned even if the source is pinned. Returns `Ok(None)`
    /// if no note has this id.
    pub fn duplicate_note(&mut self, id: &NoteId) -> StorageResult<Option<Note>> {
        let mut notes = self.storage.load();
        let Some(copy) = notes.iter().find(|n| n.id() == id).map(Note::duplicate) else {
            tracing::debug!(%id, "duplicate skipped, note not found");
            return Ok(None);
        };

        notes.push(copy.clone());
        self.storage.save(&notes)?;

        tracing::debug!(source = %id, id = %copy.id(), "duplicated note");
        Ok(Some(copy))
    }

    /// Returns notes whose content contains `query`, ignoring case.
    ///
    /// A blank query returns the full list. Results keep the pinned-first
    /// display order.
    pub fn search(&self, query: &str) -> Vec<Note> {
        let notes = self.list_notes();
        match normalize_query(query) {
            None => notes,
            Some(q) => notes.into_iter().filter(|n| matches(n.content(), &q)).collect(),
        }
    }

    /// Renders every note as CSV in display order.
    pub fn export_csv(&self) -> String {
        render_csv(&self.list_notes())
    }

    /// Applies `f` to the note with `id` and saves.
    fn modify(&mut self, id: &NoteId, f: impl FnOnce(&mut Note)) -> StorageResult<bool> {
        let mut notes = self.storage.load();
        let Some(note) = notes.iter_mut().find(|n| n.id() == id) else {
            tracing::debug!(%id, "update skipped, note not found");
            return Ok(false);
        };
        f(note);

        self.storage.save(&notes)?;
        tracing::debug!(%id, "updated note");
        Ok(true)
    }
}

/// Stable sort putting pinned notes first.
fn display_order(mut notes: Vec<Note>) -> Vec<Note> {
    notes.sort_by_key(|n| !n.is_fixed());
    notes
}
