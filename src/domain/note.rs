//! Note record: identity, text content, and pin flag.

use crate::domain::NoteId;
use serde::{Deserialize, Deserializer, Serialize};

/// A short text note.
///
/// Notes are flat records persisted as part of a single collection. The
/// three fields are independent: editing content never touches the pin
/// flag and pinning never touches content.
///
/// # Examples
///
/// ```
/// use stickies::domain::{Note, NoteId};
///
/// let note = Note::new(NoteId::new(), "buy milk");
/// assert_eq!(note.content(), "buy milk");
/// assert!(!note.is_fixed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    id: NoteId,
    #[serde(default, deserialize_with = "null_as_default")]
    content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    fixed: bool,
}

/// Reads an explicit `null` as the field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Note {
    /// Creates an unpinned note.
    ///
    /// Content is stored as given; callers decide whether to trim.
    pub fn new(id: NoteId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            fixed: false,
        }
    }

    /// Returns a copy of this note with the pin flag set.
    pub fn pinned(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }

    /// Returns the note's unique identifier.
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the note's text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns whether the note is pinned.
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    pub(crate) fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub(crate) fn toggle_fixed(&mut self) {
        self.fixed = !self.fixed;
    }

    /// Creates an unpinned copy with a fresh id.
    pub(crate) fn duplicate(&self) -> Self {
        Self::new(NoteId::new(), self.content.clone())
    }
}
