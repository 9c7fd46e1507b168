//! Topic integration: fold a directory of fragments into one document

use crate::error::{NotesError, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Fragment always placed first in the integrated document
pub const MAIN_FRAGMENT: &str = "main.adoc";

const FRAGMENT_EXTENSION: &str = ".adoc";

/// Result of integrating one topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrationOutcome {
    /// Fragments were concatenated into `output`
    Integrated {
        /// The `<topic>.adoc` document that was written
        output: PathBuf,
        /// Number of fragments concatenated
        fragments: usize,
    },
    /// The topic directory held no fragments; nothing was written
    NothingToIntegrate,
}

/// Topic name of a fragment directory: its last path component
pub fn topic_name(topic_dir: &Path) -> Result<String> {
    topic_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            NotesError::InvalidInput(format!(
                "Cannot derive a topic name from '{}'",
                topic_dir.display()
            ))
        })
}

/// Fragments of `topic_dir` in integration order.
///
/// `main.adoc` comes first when present, then every other visible `*.adoc`
/// file in directory-listing order.
pub fn collect_fragments(topic_dir: &Path) -> Result<Vec<PathBuf>> {
    let main = topic_dir.join(MAIN_FRAGMENT);
    let mut fragments = Vec::new();
    if main.exists() {
        fragments.push(main.clone());
    }

    let entries = fs::read_dir(topic_dir).map_err(|e| NotesError::io(topic_dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| NotesError::io(topic_dir, e))?;
        let path = entry.path();
        let name = entry.file_name();
        let name = name.to_string_lossy();

        if name.starts_with('.') || !name.ends_with(FRAGMENT_EXTENSION) || !path.is_file() {
            continue;
        }
        if path != main {
            fragments.push(path);
        }
    }

    Ok(fragments)
}

/// Concatenate the fragments of `topic_dir` into `<notes_dir>/<topic>.adoc`.
///
/// Each fragment is preceded by a `// ---- <name> ----` marker and followed
/// by a blank line. An existing document is replaced. `notes_dir` must
/// already exist.
pub fn integrate_topic(topic_dir: &Path, notes_dir: &Path) -> Result<IntegrationOutcome> {
    let topic = topic_name(topic_dir)?;
    let fragments = collect_fragments(topic_dir)?;

    if fragments.is_empty() {
        info!(topic = %topic, "No .adoc files found to integrate");
        return Ok(IntegrationOutcome::NothingToIntegrate);
    }

    let output = notes_dir.join(format!("{}{}", topic, FRAGMENT_EXTENSION));
    let file = File::create(&output).map_err(|e| NotesError::io(&output, e))?;
    let mut out = BufWriter::new(file);

    for fragment in &fragments {
        let content = fs::read_to_string(fragment).map_err(|e| NotesError::io(fragment, e))?;
        let name = fragment
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        debug!(fragment = %fragment.display(), "Appending fragment");
        write!(out, "// ---- {} ----\n{}\n\n", name, content)
            .map_err(|e| NotesError::io(&output, e))?;
    }
    out.flush().map_err(|e| NotesError::io(&output, e))?;

    info!(topic = %topic, output = %output.display(), fragments = fragments.len(), "Topic integrated");
    Ok(IntegrationOutcome::Integrated {
        output,
        fragments: fragments.len(),
    })
}

/// Integrate every immediate subdirectory of `notes_root` into
/// `<notes_root>/<subdir>.adoc`.
///
/// Returns each topic name with its outcome, in directory-listing order.
pub fn integrate_all(notes_root: &Path) -> Result<Vec<(String, IntegrationOutcome)>> {
    let mut results = Vec::new();

    let entries = fs::read_dir(notes_root).map_err(|e| NotesError::io(notes_root, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| NotesError::io(notes_root, e))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let topic = topic_name(&path)?;
        let outcome = integrate_topic(&path, notes_root)?;
        results.push((topic, outcome));
    }

    Ok(results)
}
