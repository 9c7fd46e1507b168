//! Notes index document

use crate::error::{NotesError, Result};
use notekeeper_domain::NoteMetadata;
use std::fs;
use std::path::Path;
use tracing::info;

/// Title line of the index document
pub const INDEX_TITLE: &str = "= Notes Index";

/// Render the index: a title, a blank line, then one bullet per note.
///
/// Each bullet links the note and appends topic, date and tags when they
/// are present. Missing fields leave no trace on the line.
pub fn render_index(notes: &[NoteMetadata]) -> String {
    let mut out = String::new();
    out.push_str(INDEX_TITLE);
    out.push_str("\n\n");

    for meta in notes {
        out.push_str(&format!("* link:{}[{}] ", meta.file, meta.display_name()));
        if let Some(topic) = meta.topic_label() {
            out.push_str(&format!("({}) ", topic));
        }
        if let Some(date) = meta.date_label() {
            out.push_str(&format!("[{}] ", date));
        }
        if !meta.tags.is_empty() {
            out.push_str(&format!("tags: {} ", meta.tags.join(", ")));
        }
        out.push('\n');
    }

    out
}

/// Write the index to `out_path`, replacing any existing file.
pub fn write_index(notes: &[NoteMetadata], out_path: &Path) -> Result<()> {
    fs::write(out_path, render_index(notes)).map_err(|e| NotesError::io(out_path, e))?;
    info!(path = %out_path.display(), notes = notes.len(), "Index written");
    Ok(())
}
