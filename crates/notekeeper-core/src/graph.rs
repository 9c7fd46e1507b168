//! Knowledge graph documents

use crate::error::{NotesError, Result};
use notekeeper_domain::{KnowledgeGraph, NoteMetadata};
use std::fs;
use std::path::Path;
use tracing::info;

/// Absolute-path variant of the graph: where to write it and the path of
/// each note, in the same order as the metadata.
pub struct AbsoluteGraph<'a, S: AsRef<str>> {
    /// Output document
    pub out_path: &'a Path,
    /// One absolute path per note
    pub files: &'a [S],
}

/// Serialize `graph` as pretty JSON to `out_path`, replacing any existing file.
pub fn write_graph(graph: &KnowledgeGraph, out_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(graph)?;
    fs::write(out_path, json).map_err(|e| NotesError::io(out_path, e))?;
    Ok(())
}

/// Build the graph for `notes` and write it to `out_path`.
///
/// When `absolute` is given with a non-empty path list, a second document is
/// written with the same nodes and edges but absolute file paths. The list
/// must have one entry per note.
pub fn generate_knowledge_graph<S: AsRef<str>>(
    notes: &[NoteMetadata],
    out_path: &Path,
    absolute: Option<AbsoluteGraph<'_, S>>,
) -> Result<KnowledgeGraph> {
    let graph = KnowledgeGraph::build(notes);
    write_graph(&graph, out_path)?;
    info!(
        path = %out_path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Knowledge graph written"
    );

    if let Some(absolute) = absolute.filter(|a| !a.files.is_empty()) {
        let absolute_graph = graph.with_files(absolute.files)?;
        write_graph(&absolute_graph, absolute.out_path)?;
        info!(path = %absolute.out_path.display(), "Absolute path knowledge graph written");
    }

    Ok(graph)
}
