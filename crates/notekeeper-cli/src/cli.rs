//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Notekeeper - create, integrate and index personal notes.
/// Runs the interactive menu when no subcommand is given.
#[derive(Debug, Parser)]
#[command(name = "notekeeper")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format for reports
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "NOTEKEEPER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (file names only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a draft note
    Draft(DraftArgs),

    /// Create today's diary note
    Diary(DiaryArgs),

    /// Integrate a topic directory into a single document
    Integrate(IntegrateArgs),

    /// Integrate every topic directory under the notes root
    IntegrateAll(IntegrateAllArgs),

    /// Build the notes index and knowledge graph
    Index(IndexArgs),

    /// Report notes with more than one document title
    Titles(TitlesArgs),

    /// Enter the interactive menu (default when no subcommand is given)
    Interactive,
}

/// Arguments for the draft command.
#[derive(Debug, Parser)]
pub struct DraftArgs {
    /// Directory under the draft base (e.g., mytopic)
    pub dir: PathBuf,

    /// Note title
    pub title: Option<String>,
}

/// Arguments for the diary command.
#[derive(Debug, Parser)]
pub struct DiaryArgs {
    /// Diary directory (defaults to the configured one)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
}

/// Arguments for the integrate command.
#[derive(Debug, Parser)]
pub struct IntegrateArgs {
    /// Topic directory holding the fragments (e.g., draft/mytopic)
    pub topic_dir: PathBuf,

    /// Output notes directory (defaults to the configured one)
    pub notes_dir: Option<PathBuf>,
}

/// Arguments for the integrate-all command.
#[derive(Debug, Parser)]
pub struct IntegrateAllArgs {
    /// Directory whose subdirectories are topics (defaults to the notes directory)
    pub notes_root: Option<PathBuf>,
}

/// Arguments for the index command.
#[derive(Debug, Parser)]
pub struct IndexArgs {
    /// Root of the notes tree (defaults to the configured root)
    pub root: Option<PathBuf>,
}

/// Arguments for the titles command.
#[derive(Debug, Parser)]
pub struct TitlesArgs {
    /// Directory to scan (defaults to the notes directory)
    pub notes_dir: Option<PathBuf>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
