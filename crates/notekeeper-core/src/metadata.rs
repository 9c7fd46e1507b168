//! Front-matter extraction
//!
//! Notes declare metadata with AsciiDoc-style attribute lines at column 0:
//!
//! ```text
//! :date: 2024-03-01
//! :tags: rust, parsing
//! :topic: compilers
//! :related: lexer, parser.adoc
//! ```
//!
//! Only the first `read_limit` bytes of a note are inspected. Attributes that
//! appear later in the file are not seen.

use crate::config::DEFAULT_READ_LIMIT;
use notekeeper_domain::{split_list, NoteMetadata};
use regex::Regex;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, warn};

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^:date:\s*(.*)$").unwrap());
static TAGS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^:tags:\s*(.*)$").unwrap());
static TOPIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^:topic:\s*(.*)$").unwrap());
static RELATED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^:related:\s*(.*)$").unwrap());

/// Extract metadata from the first 2048 bytes of `path`.
///
/// `file` is set to `path` relative to `root`. A note that cannot be read is
/// logged and returned with only `file` set.
pub fn extract_metadata(path: &Path, root: &Path) -> NoteMetadata {
    extract_metadata_with_limit(path, root, DEFAULT_READ_LIMIT)
}

/// Extract metadata from the first `limit` bytes of `path`.
pub fn extract_metadata_with_limit(path: &Path, root: &Path, limit: usize) -> NoteMetadata {
    let file = relative_path(path, root);

    match read_prefix(path, limit) {
        Ok(text) => parse_front_matter(file, &text),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Error reading note, using empty metadata");
            NoteMetadata::new(file)
        }
    }
}

/// Parse front-matter lines out of already-loaded text.
///
/// Each key is matched independently and only its first occurrence counts.
pub fn parse_front_matter(file: impl Into<String>, text: &str) -> NoteMetadata {
    let mut meta = NoteMetadata::new(file);

    meta.date = first_value(&DATE_RE, text);
    meta.topic = first_value(&TOPIC_RE, text);
    if let Some(tags) = first_value(&TAGS_RE, text) {
        meta.tags = split_list(&tags);
    }
    if let Some(related) = first_value(&RELATED_RE, text) {
        meta.related = split_list(&related);
    }

    debug!(file = %meta.file, tags = meta.tags.len(), related = meta.related.len(), "Parsed front-matter");
    meta
}

/// `path` relative to `root`, or `path` itself when it is not under `root`
pub fn relative_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

fn first_value(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Read at most `limit` bytes and decode them as UTF-8.
///
/// A character cut in half by the limit is dropped. Any other invalid UTF-8
/// is an error.
fn read_prefix(path: &Path, limit: usize) -> io::Result<String> {
    let file = File::open(path)?;
    // `take` bounds the read, and the limit may be far larger than the file.
    let mut bytes = Vec::with_capacity(limit.min(DEFAULT_READ_LIMIT));
    file.take(limit as u64).read_to_end(&mut bytes)?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) if e.utf8_error().error_len().is_none() => {
            let valid = e.utf8_error().valid_up_to();
            Ok(String::from_utf8_lossy(&e.as_bytes()[..valid]).into_owned())
        }
        Err(e) => Err(io::Error::new(io::ErrorKind::InvalidData, e)),
    }
}
