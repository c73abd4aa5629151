//! New note command handler.

use anyhow::{Context, Result};

use super::{one_line, truncate_str};
use crate::cli::NewArgs;
use crate::storage::NoteStorage;
use crate::store::NoteStore;

pub fn handle_new<S: NoteStorage>(args: &NewArgs, store: &mut NoteStore<S>) -> Result<()> {
    let content = args.content.join(" ");

    let created = store
        .create_note(&content)
        .with_context(|| "failed to save new note")?;

    match created {
        Some(note) => {
            println!(
                "Created: [{}] {}",
                note.id(),
                truncate_str(&one_line(note.content()), 60)
            );
        }
        None => println!("Nothing to add: note is empty"),
    }

    Ok(())
}
