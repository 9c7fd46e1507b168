//! Titles command implementation.

use crate::cli::TitlesArgs;
use crate::error::Result;
use crate::output::Formatter;
use notekeeper_core::{detect_multiple_titles, NotesConfig};

/// Execute the titles command.
pub fn execute_titles(args: TitlesArgs, config: &NotesConfig, formatter: &Formatter) -> Result<()> {
    let dir = args.notes_dir.unwrap_or_else(|| config.notes_dir.clone());
    let reports = detect_multiple_titles(&dir)?;

    println!("{}", formatter.title_reports(&reports)?);

    Ok(())
}
