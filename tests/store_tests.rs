//! NoteStore behaviour over the directory-backed medium.

use pretty_assertions::assert_eq;
use stickies::cli::config::Config;
use stickies::domain::NoteId;
use stickies::open_store;
use stickies::storage::{FileStore, JsonStorage, NoteStorage, StorageError};
use stickies::store::NoteStore;
use tempfile::TempDir;

fn config() -> Config {
    Config::default()
}

#[test]
fn notes_survive_reopening() {
    let temp = TempDir::new().unwrap();
    let created = {
        let mut store = open_store(temp.path(), &config());
        store.create_note("persist me").unwrap().unwrap()
    };

    let reopened = open_store(temp.path(), &config());
    assert_eq!(reopened.list_notes(), vec![created]);
}

#[test]
fn every_operation_reads_fresh_state() {
    let temp = TempDir::new().unwrap();
    let mut first = open_store(temp.path(), &config());
    let second = open_store(temp.path(), &config());

    let note = first.create_note("seen by both").unwrap().unwrap();
    assert_eq!(second.get_note(note.id()), Some(note));
}

#[test]
fn overlapping_writers_last_write_wins() {
    let temp = TempDir::new().unwrap();
    let medium = FileStore::new(temp.path());

    let mut seed = NoteStore::new(JsonStorage::new(medium.clone()));
    let shared = seed.create_note("shared").unwrap().unwrap();

    // Both sides read the same collection before either writes.
    let mut storage_a = JsonStorage::new(medium.clone());
    let mut storage_b = JsonStorage::new(medium.clone());
    let mut view_a = storage_a.load();
    let mut view_b = storage_b.load();

    view_a.retain(|n| n.id() != shared.id());
    view_b.push(stickies::domain::Note::new(NoteId::new(), "added by b"));

    storage_a.save(&view_a).unwrap();
    storage_b.save(&view_b).unwrap();

    let store = NoteStore::new(JsonStorage::new(medium));
    let contents: Vec<String> = store
        .list_notes()
        .iter()
        .map(|n| n.content().to_string())
        .collect();
    assert_eq!(
        contents,
        vec!["shared".to_string(), "added by b".to_string()],
        "the later save replaces the whole collection"
    );
}

#[test]
fn quota_failure_leaves_store_untouched() {
    let temp = TempDir::new().unwrap();
    let limited = Config {
        dir: None,
        quota_bytes: Some(120),
    };
    let mut store = open_store(temp.path(), &limited);
    let kept = store.create_note("small").unwrap().unwrap();

    let err = store.duplicate_note(kept.id()).unwrap_err();
    assert!(matches!(err, StorageError::QuotaExceeded { .. }));
    assert_eq!(store.list_notes(), vec![kept]);
}

#[test]
fn ids_are_unique_across_many_creates_and_duplicates() {
    let temp = TempDir::new().unwrap();
    let mut store = open_store(temp.path(), &config());
    let first = store.create_note("seed").unwrap().unwrap();
    for _ in 0..50 {
        store.duplicate_note(first.id()).unwrap();
        store.create_note("more").unwrap();
    }

    let notes = store.list_notes();
    let ids: std::collections::HashSet<_> = notes.iter().map(|n| n.id().clone()).collect();
    assert_eq!(notes.len(), 101);
    assert_eq!(ids.len(), 101);
}

#[test]
fn export_matches_listing_order() {
    let temp = TempDir::new().unwrap();
    let mut store = open_store(temp.path(), &config());
    let a = store.create_note("alpha").unwrap().unwrap();
    let b = store.create_note("beta").unwrap().unwrap();
    store.toggle_pin(b.id()).unwrap();

    let csv = store.export_csv();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], r#""ID","Content","Pinned?""#);
    assert_eq!(lines[1], format!(r#""{}","beta","true""#, b.id()));
    assert_eq!(lines[2], format!(r#""{}","alpha","false""#, a.id()));
}
