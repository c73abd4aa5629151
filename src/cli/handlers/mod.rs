//! Command handlers for the CLI.

mod export;
mod list;
mod modify;
mod new;
mod resolve;


use anyhow::{Result, bail};

use crate::domain::Note;
use crate::storage::NoteStorage;
use crate::store::NoteStore;

// Re-export public items
pub use export::{export_destination, handle_export};
pub use list::{format_table, handle_list, handle_search};
pub use modify::{handle_dup, handle_edit, handle_pin, handle_rm, handle_show};
pub use new::handle_new;
pub use resolve::{ResolveResult, resolve_note};

// ===========================================
// Shared Utilities
// ===========================================

/// Resolves `query` for a command that targets one note.
///
/// Returns `Ok(None)` after telling the user when nothing matches; a
/// missing note is not an error.
pub(crate) fn resolve_or_report<S: NoteStorage>(
    store: &NoteStore<S>,
    query: &str,
) -> Result<Option<Note>> {
    match resolve_note(store, query) {
        ResolveResult::Unique(note) => Ok(Some(note)),
        ResolveResult::Ambiguous(notes) => {
            resolve::print_ambiguous_notes(query, &notes);
            bail!("ambiguous note identifier '{}'", query);
        }
        ResolveResult::NotFound => {
            print_not_found(query);
            Ok(None)
        }
    }
}

pub(crate) fn print_not_found(query: &str) {
    println!("No note matching '{}'", query);
}

/// Collapses line breaks so content fits on one table row.
pub(crate) fn one_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
