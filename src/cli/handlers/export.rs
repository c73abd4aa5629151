//! Handler for the `export` command.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::cli::ExportArgs;
use crate::export::{CSV_FILE_NAME, render_csv};
use crate::storage::NoteStorage;
use crate::store::NoteStore;

/// Returns where the CSV file goes: `--output`, or `notes.csv` in the
/// current directory.
pub fn export_destination(args: &ExportArgs) -> PathBuf {
    args.output
        .clone()
        .unwrap_or_else(|| PathBuf::from(CSV_FILE_NAME))
}

/// Handle the `export` command.
///
/// The document and the reported count come from one read of the store.
pub fn handle_export<S: NoteStorage>(args: &ExportArgs, store: &NoteStore<S>) -> Result<()> {
    let notes = store.list_notes();
    let csv = render_csv(&notes);

    if args.stdout {
        println!("{}", csv);
        return Ok(());
    }

    let path = export_destination(args);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(&path, &csv)
        .with_context(|| format!("failed to write {}", path.display()))?;

    println!("Exported {} note(s) to {}", notes.len(), path.display());
    Ok(())
}
