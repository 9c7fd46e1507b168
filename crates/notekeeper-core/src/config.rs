//! Configuration for note operations

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Bytes read from the start of a note when looking for front-matter
pub const DEFAULT_READ_LIMIT: usize = 2048;

/// Directories and output names used by the note commands.
///
/// Nothing here is global: callers pass the config (or the relevant field)
/// into each operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesConfig {
    /// Where integrated topic documents are written
    pub notes_dir: PathBuf,

    /// Base directory for draft notes
    pub draft_dir: PathBuf,

    /// Directory for daily diary notes
    pub diary_dir: PathBuf,

    /// Root scanned when building the index and knowledge graph
    pub root_dir: PathBuf,

    /// Front-matter extraction settings
    pub metadata: MetadataConfig,

    /// Generated file names, relative to `root_dir`
    pub outputs: OutputsConfig,
}

/// Front-matter extraction settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataConfig {
    /// Bytes read from the start of each note
    pub read_limit: usize,

    /// File name suffixes recognized as notes
    pub extensions: Vec<String>,
}

/// Names of the generated documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputsConfig {
    /// Notes index document
    pub index: String,

    /// Knowledge graph with relative paths
    pub graph: String,

    /// Knowledge graph with absolute paths
    pub absolute_graph: String,
}

impl NotesConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.metadata.read_limit == 0 {
            return Err("metadata.read_limit must be greater than 0".to_string());
        }
        if self.metadata.extensions.is_empty() {
            return Err("metadata.extensions must not be empty".to_string());
        }
        if self.metadata.extensions.iter().any(|ext| ext.is_empty()) {
            return Err("metadata.extensions must not contain empty entries".to_string());
        }
        for (name, value) in [
            ("outputs.index", &self.outputs.index),
            ("outputs.graph", &self.outputs.graph),
            ("outputs.absolute_graph", &self.outputs.absolute_graph),
        ] {
            if value.is_empty() {
                return Err(format!("{} must not be empty", name));
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            notes_dir: PathBuf::from("notes"),
            draft_dir: PathBuf::from("draft"),
            diary_dir: PathBuf::from("diary_notes"),
            root_dir: PathBuf::from("."),
            metadata: MetadataConfig::default(),
            outputs: OutputsConfig::default(),
        }
    }
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            read_limit: DEFAULT_READ_LIMIT,
            extensions: vec![".adoc".to_string(), ".md".to_string()],
        }
    }
}

impl Default for OutputsConfig {
    fn default() -> Self {
        Self {
            index: "index.adoc".to_string(),
            graph: "knowledge-graph.json".to_string(),
            absolute_graph: ".knowledge-graph-abs.json".to_string(),
        }
    }
}
