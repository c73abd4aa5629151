//! Handlers for commands that target a single note.
//!
//! Each resolves the note first, then calls the store by full id. The note
//! can vanish between the two steps (another process deleted it); the store
//! then reports `false`/`None` and the handler treats it like any other
//! missing note.

use anyhow::{Context, Result};

use super::{print_not_found, resolve_or_report};
use crate::cli::{EditArgs, NoteArgs};
use crate::storage::NoteStorage;
use crate::store::NoteStore;

pub fn handle_show<S: NoteStorage>(args: &NoteArgs, store: &NoteStore<S>) -> Result<()> {
    let Some(note) = resolve_or_report(store, &args.note)? else {
        return Ok(());
    };

    let pin = if note.is_fixed() { "  (pinned)" } else { "" };
    match note.id().timestamp() {
        Some(created) => println!(
            "ID: {}  Created: {}{}",
            note.id(),
            created.format("%Y-%m-%d %H:%M"),
            pin
        ),
        None => println!("ID: {}{}", note.id(), pin),
    }
    println!();
    if !note.content().is_empty() {
        println!("{}", note.content());
    }
    Ok(())
}

pub fn handle_edit<S: NoteStorage>(args: &EditArgs, store: &mut NoteStore<S>) -> Result<()> {
    let Some(note) = resolve_or_report(store, &args.note)? else {
        return Ok(());
    };

    let updated = store
        .update_content(note.id(), &args.content)
        .with_context(|| format!("failed to save note {}", note.id()))?;

    if updated {
        println!("Updated: [{}]", note.id());
    } else {
        print_not_found(&args.note);
    }
    Ok(())
}

pub fn handle_pin<S: NoteStorage>(args: &NoteArgs, store: &mut NoteStore<S>) -> Result<()> {
    let Some(note) = resolve_or_report(store, &args.note)? else {
        return Ok(());
    };

    let toggled = store
        .toggle_pin(note.id())
        .with_context(|| format!("failed to save note {}", note.id()))?;

    if !toggled {
        print_not_found(&args.note);
        return Ok(());
    }

    let pinned = store.get_note(note.id()).is_some_and(|n| n.is_fixed());
    let verb = if pinned { "Pinned" } else { "Unpinned" };
    println!("{}: [{}]", verb, note.id());
    Ok(())
}

pub fn handle_rm<S: NoteStorage>(args: &NoteArgs, store: &mut NoteStore<S>) -> Result<()> {
    let Some(note) = resolve_or_report(store, &args.note)? else {
        return Ok(());
    };

    let removed = store
        .delete_note(note.id())
        .with_context(|| format!("failed to delete note {}", note.id()))?;

    if removed {
        println!("Deleted: [{}]", note.id());
    } else {
        print_not_found(&args.note);
    }
    Ok(())
}

pub fn handle_dup<S: NoteStorage>(args: &NoteArgs, store: &mut NoteStore<S>) -> Result<()> {
    let Some(note) = resolve_or_report(store, &args.note)? else {
        return Ok(());
    };

    let copy = store
        .duplicate_note(note.id())
        .with_context(|| format!("failed to duplicate note {}", note.id()))?;

    match copy {
        Some(copy) => println!("Duplicated: [{}] -> [{}]", note.id(), copy.id()),
        None => print_not_found(&args.note),
    }
    Ok(())
}
