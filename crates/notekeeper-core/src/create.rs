//! Creating new notes
//!
//! Two entry points with different collision behavior:
//!
//! - [`create_diary`] leaves an existing note alone and reports it.
//! - [`create_file`] appends to whatever is already at the path.
//!
//! [`create_draft`] writes a fresh AsciiDoc draft from a template.

use crate::error::{NotesError, Result};
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Title used when a draft is created without one
pub const DEFAULT_DRAFT_TITLE: &str = "Draft Note";

/// Result of asking for today's diary note
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiaryOutcome {
    /// A new note was written
    Created(PathBuf),
    /// A note with the same timestamped name exists; it was not touched
    AlreadyExists(PathBuf),
}

/// Render the draft template
pub fn draft_content<Tz: TimeZone>(title: &str, now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!(
        "= {}\n:toc:\n:icons: font\n:date: {}\n:tags: draft\n\nWrite your note here.\n",
        title,
        now.format("%Y-%m-%d")
    )
}

/// Write a new draft to `<draft_base>/<draft_dir>/note_<YYYYmmdd_HHMMSS>.adoc`.
///
/// Missing directories are created. A draft with the same name is
/// overwritten.
pub fn create_draft<Tz: TimeZone>(
    draft_base: &Path,
    draft_dir: &Path,
    title: Option<&str>,
    now: &DateTime<Tz>,
) -> Result<PathBuf>
where
    Tz::Offset: Display,
{
    let dir = draft_base.join(draft_dir);
    fs::create_dir_all(&dir).map_err(|e| NotesError::io(&dir, e))?;

    let path = dir.join(format!("note_{}.adoc", now.format("%Y%m%d_%H%M%S")));
    let content = draft_content(title.unwrap_or(DEFAULT_DRAFT_TITLE), now);
    fs::write(&path, content).map_err(|e| NotesError::io(&path, e))?;

    info!(path = %path.display(), "Draft created");
    Ok(path)
}

/// Diary timestamp, used both in the file name and as the note heading
pub fn diary_stamp<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    now.format("%Y-%m-%d_%H%M%S").to_string()
}

/// Render the diary template
pub fn diary_content(stamp: &str) -> String {
    format!(
        "# {}\n\nThis is a temporary note for my daily learning.\nContents will be moved to other places later.\n",
        stamp
    )
}

/// Create `<diary_dir>/note_<YYYY-mm-dd_HHMMSS>.md` unless it already exists.
///
/// Calling this twice within the same second is a no-op the second time.
pub fn create_diary<Tz: TimeZone>(diary_dir: &Path, now: &DateTime<Tz>) -> Result<DiaryOutcome>
where
    Tz::Offset: Display,
{
    if !diary_dir.exists() {
        debug!(dir = %diary_dir.display(), "Creating diary directory");
        fs::create_dir_all(diary_dir).map_err(|e| NotesError::io(diary_dir, e))?;
    }

    let stamp = diary_stamp(now);
    let path = diary_dir.join(format!("note_{}.md", stamp));
    if path.exists() {
        info!(path = %path.display(), "Diary note already exists");
        return Ok(DiaryOutcome::AlreadyExists(path));
    }

    create_file(Some(&path), &diary_content(&stamp))?;
    Ok(DiaryOutcome::Created(path))
}

/// Append `content` to `path`, creating the file if needed.
///
/// Existing content is kept: a second call with the same path appends
/// again. A missing path is rejected as invalid input.
pub fn create_file(path: Option<&Path>, content: &str) -> Result<()> {
    let path =
        path.ok_or_else(|| NotesError::InvalidInput("Filename must be provided.".to_string()))?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| NotesError::io(path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| NotesError::io(path, e))?;

    debug!(path = %path.display(), bytes = content.len(), "Wrote note");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use tempfile::tempdir;

    fn fixed_now() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-03-01T09:05:07+01:00").unwrap()
    }

    #[test]
    fn test_draft_with_title() {
        let dir = tempdir().unwrap();
        let path = create_draft(dir.path(), Path::new("rust"), Some("Lifetimes"), &fixed_now()).unwrap();

        assert_eq!(path, dir.path().join("rust/note_20240301_090507.adoc"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "= Lifetimes\n:toc:\n:icons: font\n:date: 2024-03-01\n:tags: draft\n\nWrite your note here.\n"
        );
    }

    #[test]
    fn test_draft_default_title() {
        let dir = tempdir().unwrap();
        let path = create_draft(dir.path(), Path::new("a/b"), None, &fixed_now()).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("= Draft Note\n"));
    }

    #[test]
    fn test_draft_front_matter_is_extractable() {
        let meta = crate::metadata::parse_front_matter("d.adoc", &draft_content("T", &fixed_now()));
        assert_eq!(meta.date.as_deref(), Some("2024-03-01"));
        assert_eq!(meta.tags, vec!["draft"]);
    }

    #[test]
    fn test_diary_created() {
        let dir = tempdir().unwrap();
        let diary_dir = dir.path().join("diary_notes");

        let outcome = create_diary(&diary_dir, &fixed_now()).unwrap();
        let path = diary_dir.join("note_2024-03-01_090507.md");
        assert_eq!(outcome, DiaryOutcome::Created(path.clone()));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# 2024-03-01_090507\n\nThis is a temporary note for my daily learning.\nContents will be moved to other places later.\n"
        );
    }

    #[test]
    fn test_diary_same_tick_is_noop() {
        let dir = tempdir().unwrap();
        let now = fixed_now();

        let first = create_diary(dir.path(), &now).unwrap();
        let DiaryOutcome::Created(path) = first else {
            panic!("first call should create the note");
        };
        let original = fs::read_to_string(&path).unwrap();

        let second = create_diary(dir.path(), &now).unwrap();
        assert_eq!(second, DiaryOutcome::AlreadyExists(path.clone()));
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_diary_with_utc_clock() {
        let dir = tempdir().unwrap();
        let outcome = create_diary(dir.path(), &Utc::now()).unwrap();
        assert!(matches!(outcome, DiaryOutcome::Created(_)));
    }

    #[test]
    fn test_create_file_appends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("entry.md");

        create_file(Some(&path), "# Diary Entry\n").unwrap();
        create_file(Some(&path), "# Diary Entry\n").unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# Diary Entry\n# Diary Entry\n"
        );
    }

    #[test]
    fn test_create_file_requires_name() {
        let err = create_file(None, "x").unwrap_err();
        assert!(matches!(err, NotesError::InvalidInput(_)));
        assert_eq!(err.to_string(), "Invalid input: Filename must be provided.");
    }
}
