//! Notekeeper Domain Layer
//!
//! This crate contains the data model shared by the rest of the workspace:
//! the metadata extracted from a note's front-matter and the knowledge graph
//! built from the declared relationships between notes.
//!
//! ## Key Concepts
//!
//! - **NoteMetadata**: the `:date:`, `:tags:`, `:topic:` and `:related:` lines of one note
//! - **KnowledgeGraph**: one node per note, directed edges resolved from `:related:`
//!
//! ## Architecture
//!
//! Nothing in here touches the filesystem. Reading notes and writing the
//! generated documents lives in `notekeeper-core`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod graph;
pub mod metadata;

// Re-exports for convenience
pub use graph::{FileCountMismatch, GraphEdge, GraphNode, KnowledgeGraph, NodeId};
pub use metadata::{split_list, NoteMetadata};
