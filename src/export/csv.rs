//! CSV rendering of the note collection.

use crate::domain::Note;

/// Default file name for a CSV download.
pub const CSV_FILE_NAME: &str = "notes.csv";

const HEADER: [&str; 3] = ["ID", "Content", "Pinned?"];

/// Quotes a single field, doubling any embedded quote characters.
///
/// # Example
///
/// ```
/// use stickies::export::escape_field;
///
/// assert_eq!(escape_field(r#"He said "hi""#), r#""He said ""hi""""#);
/// ```
pub fn escape_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Renders notes as CSV in the order given.
///
/// Every field is quoted, rows are separated by `\n`, and the last row has
/// no terminator. Newlines inside content stay inside their quoted field.
pub fn render(notes: &[Note]) -> String {
    let header = HEADER.map(escape_field).join(",");
    let rows = notes.iter().map(|note| {
        [
            escape_field(note.id().as_str()),
            escape_field(note.content()),
            escape_field(if note.is_fixed() { "true" } else { "false" }),
        ]
        .join(",")
    });

    std::iter::once(header)
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}
