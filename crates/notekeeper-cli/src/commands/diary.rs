//! Diary command implementation.

use crate::cli::DiaryArgs;
use crate::error::Result;
use crate::output::Formatter;
use chrono::Local;
use notekeeper_core::{create_diary, DiaryOutcome, NotesConfig};

/// Execute the diary command.
///
/// An existing note for the same timestamp is reported, not an error.
pub fn execute_diary(args: DiaryArgs, config: &NotesConfig, formatter: &Formatter) -> Result<DiaryOutcome> {
    let dir = args.dir.unwrap_or_else(|| config.diary_dir.clone());
    let outcome = create_diary(&dir, &Local::now())?;

    println!("{}", formatter.diary(&outcome));

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use tempfile::tempdir;

    #[test]
    fn test_diary_in_explicit_dir() {
        let dir = tempdir().unwrap();
        let formatter = Formatter::new(OutputFormat::Table, false);

        let outcome = execute_diary(
            DiaryArgs {
                dir: Some(dir.path().join("journal")),
            },
            &NotesConfig::default(),
            &formatter,
        )
        .unwrap();

        match outcome {
            DiaryOutcome::Created(path) => assert!(path.starts_with(dir.path().join("journal"))),
            DiaryOutcome::AlreadyExists(_) => panic!("fresh directory should not collide"),
        }
    }
}
