//! Knowledge graph module - notes as nodes, `:related:` references as edges

use crate::metadata::NoteMetadata;
use serde::{Deserialize, Serialize};

/// Node identifier: the note's 0-based position in discovery order.
///
/// Not stable across runs when discovery order changes.
pub type NodeId = usize;

/// A note in the knowledge graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Position of the note in the input sequence
    pub id: NodeId,

    /// Relative path, or an absolute one in the absolute-path variant
    pub file: String,

    /// Declared topic
    pub topic: Option<String>,

    /// Declared tags
    pub tags: Vec<String>,
}

/// A directed edge from a note to a note it references
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Note declaring the `:related:` reference
    pub from: NodeId,

    /// Note whose path contains the reference token
    pub to: NodeId,
}

/// Nodes and edges for a set of notes.
///
/// Serializes as `{"nodes": [...], "edges": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeGraph {
    /// One node per note, indexed by id
    pub nodes: Vec<GraphNode>,

    /// Edges in resolution order, duplicates kept
    pub edges: Vec<GraphEdge>,
}

/// Returned by [`KnowledgeGraph::with_files`] when the replacement paths do
/// not line up with the nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileCountMismatch {
    /// Number of nodes in the graph
    pub nodes: usize,
    /// Number of replacement paths supplied
    pub files: usize,
}

impl std::fmt::Display for FileCountMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "expected {} file paths, got {}",
            self.nodes, self.files
        )
    }
}

impl std::error::Error for FileCountMismatch {}

impl KnowledgeGraph {
    /// Build the graph for `notes`.
    ///
    /// Each `:related:` token of each note is matched against the `file` of
    /// every note, the owner included. Any note whose path contains the token
    /// as a case-sensitive substring gets an edge from the owner. Edges are
    /// not deduplicated and self-loops are kept, so a token like `notes`
    /// links to every file under `notes/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use notekeeper_domain::{GraphEdge, KnowledgeGraph, NoteMetadata};
    ///
    /// let mut a = NoteMetadata::new("a.adoc");
    /// a.related = vec!["b".to_string()];
    /// let b = NoteMetadata::new("b.adoc");
    ///
    /// let graph = KnowledgeGraph::build(&[a, b]);
    /// assert_eq!(graph.edges, vec![GraphEdge { from: 0, to: 1 }]);
    /// ```
    pub fn build(notes: &[NoteMetadata]) -> Self {
        let nodes = notes
            .iter()
            .enumerate()
            .map(|(id, meta)| GraphNode {
                id,
                file: meta.file.clone(),
                topic: meta.topic.clone(),
                tags: meta.tags.clone(),
            })
            .collect();

        let mut edges = Vec::new();
        for (from, meta) in notes.iter().enumerate() {
            for token in &meta.related {
                for (to, other) in notes.iter().enumerate() {
                    if other.file.contains(token.as_str()) {
                        edges.push(GraphEdge { from, to });
                    }
                }
            }
        }

        Self { nodes, edges }
    }

    /// Same nodes and edges with each node's `file` replaced by `files[id]`.
    ///
    /// Used for the absolute-path sibling of the graph document.
    pub fn with_files<S: AsRef<str>>(&self, files: &[S]) -> Result<Self, FileCountMismatch> {
        if files.len() != self.nodes.len() {
            return Err(FileCountMismatch {
                nodes: self.nodes.len(),
                files: files.len(),
            });
        }

        let nodes = self
            .nodes
            .iter()
            .zip(files)
            .map(|(node, file)| GraphNode {
                file: file.as_ref().to_string(),
                ..node.clone()
            })
            .collect();

        Ok(Self {
            nodes,
            edges: self.edges.clone(),
        })
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges, duplicates included
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(file: &str, related: &[&str]) -> NoteMetadata {
        let mut meta = NoteMetadata::new(file);
        meta.related = related.iter().map(|r| r.to_string()).collect();
        meta
    }

    #[test]
    fn test_single_reference() {
        let graph = KnowledgeGraph::build(&[note("a.adoc", &["b"]), note("b.adoc", &[])]);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edges, vec![GraphEdge { from: 0, to: 1 }]);
    }

    #[test]
    fn test_ids_follow_input_order() {
        let graph = KnowledgeGraph::build(&[note("z.md", &[]), note("a.md", &[])]);
        assert_eq!(graph.nodes[0].id, 0);
        assert_eq!(graph.nodes[0].file, "z.md");
        assert_eq!(graph.nodes[1].id, 1);
        assert_eq!(graph.nodes[1].file, "a.md");
    }

    #[test]
    fn test_substring_matches_every_candidate() {
        let notes = [
            note("index.adoc", &["rust"]),
            note("rust.adoc", &[]),
            note("rust-async.adoc", &[]),
        ];
        let graph = KnowledgeGraph::build(&notes);
        assert_eq!(
            graph.edges,
            vec![GraphEdge { from: 0, to: 1 }, GraphEdge { from: 0, to: 2 }]
        );
    }

    #[test]
    fn test_self_loop_is_kept() {
        let graph = KnowledgeGraph::build(&[note("rust.adoc", &["rust"])]);
        assert_eq!(graph.edges, vec![GraphEdge { from: 0, to: 0 }]);
    }

    #[test]
    fn test_duplicate_matches_are_not_collapsed() {
        let notes = [note("a.adoc", &["b", "b.adoc"]), note("b.adoc", &[])];
        let graph = KnowledgeGraph::build(&notes);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.edges.iter().all(|e| *e == GraphEdge { from: 0, to: 1 }));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let graph = KnowledgeGraph::build(&[note("a.adoc", &["B"]), note("b.adoc", &[])]);
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn test_unresolved_reference_adds_nothing() {
        let graph = KnowledgeGraph::build(&[note("a.adoc", &["missing"])]);
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn test_with_files_replaces_paths_only() {
        let mut a = note("a.adoc", &["b"]);
        a.topic = Some("rust".to_string());
        let graph = KnowledgeGraph::build(&[a, note("b.adoc", &[])]);

        let absolute = graph
            .with_files(&["/home/me/a.adoc", "/home/me/b.adoc"])
            .unwrap();
        assert_eq!(absolute.nodes[0].file, "/home/me/a.adoc");
        assert_eq!(absolute.nodes[0].topic.as_deref(), Some("rust"));
        assert_eq!(absolute.nodes[1].file, "/home/me/b.adoc");
        assert_eq!(absolute.edges, graph.edges);
    }

    #[test]
    fn test_with_files_length_mismatch() {
        let graph = KnowledgeGraph::build(&[note("a.adoc", &[])]);
        let err = graph.with_files::<&str>(&[]).unwrap_err();
        assert_eq!(err, FileCountMismatch { nodes: 1, files: 0 });
    }

    #[test]
    fn test_json_shape() {
        let mut a = note("a.adoc", &["b"]);
        a.tags = vec!["x".to_string()];
        let graph = KnowledgeGraph::build(&[a, note("b.adoc", &[])]);

        let json = serde_json::to_string(&graph).unwrap();
        assert_eq!(
            json,
            r#"{"nodes":[{"id":0,"file":"a.adoc","topic":null,"tags":["x"]},{"id":1,"file":"b.adoc","topic":null,"tags":[]}],"edges":[{"from":0,"to":1}]}"#
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_note() -> impl Strategy<Value = NoteMetadata> {
        ("[a-c]{1,3}\\.adoc", prop::collection::vec("[a-c]{1,2}", 0..3)).prop_map(
            |(file, related)| {
                let mut meta = NoteMetadata::new(file);
                meta.related = related;
                meta
            },
        )
    }

    proptest! {
        /// Property: one node per note, ids equal positions
        #[test]
        fn test_node_count_matches_input(notes in prop::collection::vec(arb_note(), 0..8)) {
            let graph = KnowledgeGraph::build(&notes);
            prop_assert_eq!(graph.node_count(), notes.len());
            for (idx, node) in graph.nodes.iter().enumerate() {
                prop_assert_eq!(node.id, idx);
            }
        }

        /// Property: every edge endpoint is a valid node id
        #[test]
        fn test_edges_in_range(notes in prop::collection::vec(arb_note(), 0..8)) {
            let graph = KnowledgeGraph::build(&notes);
            for edge in &graph.edges {
                prop_assert!(edge.from < graph.node_count());
                prop_assert!(edge.to < graph.node_count());
            }
        }

        /// Property: building twice gives the same graph
        #[test]
        fn test_build_is_deterministic(notes in prop::collection::vec(arb_note(), 0..8)) {
            prop_assert_eq!(KnowledgeGraph::build(&notes), KnowledgeGraph::build(&notes));
        }
    }
}
