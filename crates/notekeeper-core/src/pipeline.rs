//! End-to-end index and knowledge graph generation for a notes tree

use crate::config::NotesConfig;
use crate::discovery::find_notes;
use crate::error::{NotesError, Result};
use crate::graph::{generate_knowledge_graph, AbsoluteGraph};
use crate::index::write_index;
use crate::metadata::extract_metadata_with_limit;
use notekeeper_domain::{KnowledgeGraph, NoteMetadata};
use std::path::{Path, PathBuf};
use tracing::info;

/// What a build produced
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Metadata of every discovered note, in discovery order
    pub notes: Vec<NoteMetadata>,
    /// The graph written to `graph_path`
    pub graph: KnowledgeGraph,
    /// Index document
    pub index_path: PathBuf,
    /// Graph with relative paths
    pub graph_path: PathBuf,
    /// Graph with absolute paths, if one was written
    pub absolute_graph_path: Option<PathBuf>,
}

/// Discover the notes under `root`, extract their metadata and write the
/// index and both knowledge graph documents into `root`.
///
/// Everything is recomputed from scratch; running twice over an unchanged
/// tree rewrites identical files.
pub fn build_all(root: &Path, config: &NotesConfig) -> Result<BuildReport> {
    config.validate().map_err(NotesError::Config)?;

    let root = root.canonicalize().map_err(|e| NotesError::io(root, e))?;
    let index_path = root.join(&config.outputs.index);
    let graph_path = root.join(&config.outputs.graph);
    let absolute_path = root.join(&config.outputs.absolute_graph);

    // The index is itself a note-shaped file under the root
    let paths: Vec<PathBuf> = find_notes(&root, &config.metadata.extensions)
        .into_iter()
        .filter(|path| *path != index_path)
        .collect();
    info!(root = %root.display(), notes = paths.len(), "Discovered notes");

    let notes: Vec<NoteMetadata> = paths
        .iter()
        .map(|path| extract_metadata_with_limit(path, &root, config.metadata.read_limit))
        .collect();
    let absolute_files: Vec<String> = paths
        .iter()
        .map(|path| path.to_string_lossy().into_owned())
        .collect();

    write_index(&notes, &index_path)?;
    let graph = generate_knowledge_graph(
        &notes,
        &graph_path,
        Some(AbsoluteGraph {
            out_path: &absolute_path,
            files: absolute_files.as_slice(),
        }),
    )?;

    Ok(BuildReport {
        absolute_graph_path: (!absolute_files.is_empty()).then_some(absolute_path),
        notes,
        graph,
        index_path,
        graph_path,
    })
}
