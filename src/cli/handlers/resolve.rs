//! Note resolution utilities.

use crate::domain::{Note, NoteId};
use crate::storage::NoteStorage;
use crate::store::NoteStore;

/// Result of resolving a note identifier.
#[derive(Debug)]
pub enum ResolveResult {
    /// Exactly one note matched.
    Unique(Note),
    /// Multiple notes matched (ambiguous).
    Ambiguous(Vec<Note>),
    /// No notes matched.
    NotFound,
}

/// Resolves a full id or an id prefix to a note.
///
/// An exact id match wins outright. Otherwise every note whose id starts
/// with `query` (ASCII case-insensitive) is a candidate.
pub fn resolve_note<S: NoteStorage>(store: &NoteStore<S>, query: &str) -> ResolveResult {
    let query = query.trim();
    if query.is_empty() {
        return ResolveResult::NotFound;
    }

    if let Some(note) = query
        .parse::<NoteId>()
        .ok()
        .and_then(|id| store.get_note(&id))
    {
        return ResolveResult::Unique(note);
    }

    let mut matches: Vec<Note> = store
        .list_notes()
        .into_iter()
        .filter(|n| {
            n.id()
                .as_str()
                .get(..query.len())
                .is_some_and(|p| p.eq_ignore_ascii_case(query))
        })
        .collect();

    match matches.len() {
        0 => ResolveResult::NotFound,
        1 => ResolveResult::Unique(matches.remove(0)),
        _ => ResolveResult::Ambiguous(matches),
    }
}

/// Prints the candidates of an ambiguous prefix.
pub(crate) fn print_ambiguous_notes(identifier: &str, notes: &[Note]) {
    eprintln!("Ambiguous: '{}' matches {} notes:", identifier, notes.len());
    for note in notes {
        eprintln!(
            "  {} - {}",
            note.id(),
            super::truncate_str(&super::one_line(note.content()), 50)
        );
    }
    eprintln!();
    eprintln!("Use more characters of the ID to pick one.");
}
