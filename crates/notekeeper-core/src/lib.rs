//! Notekeeper Core
//!
//! Filesystem operations over a tree of AsciiDoc and Markdown notes.
//!
//! # Overview
//!
//! ```text
//! discovery → metadata (per note) → { index, graph }
//! integrate (independent, per topic directory)
//! create    (drafts, diary notes)
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use notekeeper_core::{build_all, NotesConfig};
//! use std::path::Path;
//!
//! # fn example() -> notekeeper_core::Result<()> {
//! let config = NotesConfig::default();
//! let report = build_all(Path::new("."), &config)?;
//!
//! println!("Indexed {} notes", report.notes.len());
//! println!("Graph edges: {}", report.graph.edge_count());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod create;
pub mod discovery;
pub mod error;
pub mod graph;
pub mod index;
pub mod integrate;
pub mod metadata;
pub mod pipeline;
pub mod titles;

pub use config::{MetadataConfig, NotesConfig, OutputsConfig, DEFAULT_READ_LIMIT};
pub use create::{create_diary, create_draft, create_file, DiaryOutcome};
pub use discovery::find_notes;
pub use error::{NotesError, Result};
pub use graph::{generate_knowledge_graph, write_graph, AbsoluteGraph};
pub use index::{render_index, write_index};
pub use integrate::{integrate_all, integrate_topic, IntegrationOutcome};
pub use metadata::{extract_metadata, extract_metadata_with_limit, parse_front_matter};
pub use pipeline::{build_all, BuildReport};
pub use titles::{detect_multiple_titles, TitleReport};

pub use notekeeper_domain::{GraphEdge, GraphNode, KnowledgeGraph, NoteMetadata};
