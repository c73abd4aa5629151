//! List and search command handlers.

use anyhow::Result;

use super::{one_line, truncate_str};
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::cli::{ListArgs, SearchArgs};
use crate::domain::Note;
use crate::storage::NoteStorage;
use crate::store::NoteStore;

const CONTENT_WIDTH: usize = 60;
const MIN_ID_WIDTH: usize = 10;

pub fn handle_list<S: NoteStorage>(args: &ListArgs, store: &NoteStore<S>) -> Result<()> {
    let notes = store.list_notes();
    print_notes(&notes, args.format, "No notes yet.")
}

pub fn handle_search<S: NoteStorage>(args: &SearchArgs, store: &NoteStore<S>) -> Result<()> {
    let notes = store.search(&args.query);
    print_notes(&notes, args.format, "No matching notes found.")
}

fn print_notes(notes: &[Note], format: OutputFormat, empty_message: &str) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("{}", empty_message);
            } else {
                print!("{}", format_table(notes));
                println!();
                println!("{} note(s)", notes.len());
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes.iter().map(NoteListing::from).collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

/// Renders notes as a fixed-width table, one line per note.
///
/// Pinned notes are marked with `*` in the pin column. The id column is as
/// wide as needed for every shown id to be a distinct prefix.
pub fn format_table(notes: &[Note]) -> String {
    let width = id_width(notes);
    let mut out = String::new();
    out.push_str(&format!("{:<width$}  {:<3}  {}\n", "ID", "Pin", "Content"));
    out.push_str(&format!(
        "{:<width$}  {:<3}  {}\n",
        "-".repeat(width),
        "---",
        "-".repeat(CONTENT_WIDTH)
    ));
    for note in notes {
        let pin = if note.is_fixed() { "*" } else { "" };
        let content = truncate_str(&one_line(note.content()), CONTENT_WIDTH);
        out.push_str(&format!(
            "{:<width$}  {:<3}  {}\n",
            note.id().short(width),
            pin,
            content
        ));
    }
    out
}

/// Shortest id length, never below `MIN_ID_WIDTH`, at which no two ids
/// share a prefix. Prefix lookup ignores case, so the comparison does too.
fn id_width(notes: &[Note]) -> usize {
    let mut ids: Vec<String> = notes
        .iter()
        .map(|note| note.id().as_str().to_lowercase())
        .collect();
    ids.sort_unstable();
    ids.windows(2)
        .map(|pair| common_prefix_len(&pair[0], &pair[1]) + 1)
        .fold(MIN_ID_WIDTH, usize::max)
}

fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}
