//! Index command implementation.

use crate::cli::IndexArgs;
use crate::error::Result;
use crate::output::Formatter;
use notekeeper_core::{build_all, BuildReport, NotesConfig};

/// Execute the index command.
pub fn execute_index(args: IndexArgs, config: &NotesConfig, formatter: &Formatter) -> Result<BuildReport> {
    let root = args.root.unwrap_or_else(|| config.root_dir.clone());
    let report = build_all(&root, config)?;

    println!("{}", formatter.build_report(&report));

    Ok(report)
}
