//! Note discovery

use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Recursively collect every file under `root` whose name ends with one of
/// `extensions`.
///
/// Paths come back in traversal order, which is whatever the directory
/// listings yield; nothing is sorted. Symlinked directories are not entered.
/// Entries that cannot be read are logged and skipped, and a missing root
/// yields no notes.
pub fn find_notes<S: AsRef<str>>(root: &Path, extensions: &[S]) -> Vec<PathBuf> {
    let mut notes = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(root = %root.display(), error = %e, "Skipping unreadable entry");
                continue;
            }
        };

        if entry.file_type().is_dir() || !entry.path().is_file() {
            continue;
        }

        if has_note_extension(&entry.file_name().to_string_lossy(), extensions) {
            notes.push(entry.into_path());
        }
    }

    notes
}

/// True when `name` ends with any of `extensions`
pub fn has_note_extension<S: AsRef<str>>(name: &str, extensions: &[S]) -> bool {
    extensions.iter().any(|ext| name.ends_with(ext.as_ref()))
}
