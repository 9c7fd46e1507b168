//! Detect integrated notes that ended up with more than one document title

use crate::error::{NotesError, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^= ").unwrap());

/// A note with several `= ` title lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleReport {
    /// File name inside the scanned directory
    pub file: String,
    /// Number of title lines
    pub count: usize,
}

/// Number of lines starting with `= `
pub fn count_titles(content: &str) -> usize {
    TITLE_RE.find_iter(content).count()
}

/// Scan the `*.adoc` files directly inside `notes_dir` and report those with
/// more than one title line, in directory-listing order.
pub fn detect_multiple_titles(notes_dir: &Path) -> Result<Vec<TitleReport>> {
    let mut reports = Vec::new();

    for entry in fs::read_dir(notes_dir).map_err(|e| NotesError::io(notes_dir, e))? {
        let entry = entry.map_err(|e| NotesError::io(notes_dir, e))?;
        let file = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();
        if !file.ends_with(".adoc") || !path.is_file() {
            continue;
        }

        let content = fs::read_to_string(&path).map_err(|e| NotesError::io(&path, e))?;
        let count = count_titles(&content);
        if count > 1 {
            reports.push(TitleReport { file, count });
        }
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_count_titles() {
        assert_eq!(count_titles("= One\ntext\n= Two\n== Section\n =x\n"), 2);
        assert_eq!(count_titles("no titles"), 0);
    }

    #[test]
    fn test_detect_multiple_titles() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("single.adoc"), "= One\nbody\n").unwrap();
        fs::write(dir.path().join("merged.adoc"), "= A\n// ---- b.adoc ----\n= B\n= C\n").unwrap();
        fs::write(dir.path().join("other.md"), "= A\n= B\n").unwrap();

        let reports = detect_multiple_titles(dir.path()).unwrap();
        assert_eq!(
            reports,
            vec![TitleReport {
                file: "merged.adoc".to_string(),
                count: 3
            }]
        );
    }

    #[test]
    fn test_missing_dir() {
        let dir = tempdir().unwrap();
        assert!(detect_multiple_titles(&dir.path().join("nope")).is_err());
    }
}
