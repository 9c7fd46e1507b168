//! Draft command implementation.

use crate::cli::DraftArgs;
use crate::error::Result;
use crate::output::Formatter;
use chrono::Local;
use notekeeper_core::{create_draft, NotesConfig};
use std::path::PathBuf;

/// Execute the draft command.
pub fn execute_draft(args: DraftArgs, config: &NotesConfig, formatter: &Formatter) -> Result<PathBuf> {
    let title = args.title.as_deref().filter(|t| !t.trim().is_empty());
    let path = create_draft(&config.draft_dir, &args.dir, title, &Local::now())?;

    println!("{}", formatter.draft_created(&path));

    Ok(path)
}
