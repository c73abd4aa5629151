//! Export of the note collection for download.

mod csv;

pub use csv::{CSV_FILE_NAME, escape_field, render as render_csv};
