//! Core types: Note and NoteId (ULID for new notes, opaque for loaded ones)

mod note;
mod note_id;

pub use note::Note;
pub use note_id::{NoteId, ParseNoteIdError};
