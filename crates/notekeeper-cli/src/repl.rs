//! Interactive menu mode.

use crate::cli::{DraftArgs, IntegrateArgs};
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Create a draft note
    Draft,
    /// Integrate a topic
    Integrate,
    /// Leave the menu
    Exit,
}

/// Map a menu selection to a choice.
pub fn parse_menu_choice(input: &str) -> Option<MenuChoice> {
    match input.trim() {
        "1" => Some(MenuChoice::Draft),
        "2" => Some(MenuChoice::Integrate),
        "3" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// Run the interactive menu until the user exits.
pub fn run_interactive(config: &Config, formatter: &Formatter) -> Result<()> {
    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)
        .map(|builder| builder.build());
    let mut editor = editor_config
        .and_then(DefaultEditor::with_config)
        .map_err(|e| {
            CliError::Io(std::io::Error::other(format!(
                "Failed to initialize editor: {}",
                e
            )))
        })?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        print_menu();

        let choice = match editor.readline("Select an option: ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use '3' to exit"));
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        };

        match parse_menu_choice(&choice) {
            Some(MenuChoice::Draft) => {
                let Some(dir) = prompt(&mut editor, "Draft topic directory (e.g., mytopic): ")? else {
                    break;
                };
                let Some(title) = prompt(&mut editor, "Note title (optional): ")? else {
                    break;
                };

                let args = DraftArgs {
                    dir: PathBuf::from(dir),
                    title: non_empty(title),
                };
                if let Err(e) = commands::execute_draft(args, &config.notes, formatter) {
                    eprintln!("{}", formatter.error(&e.to_string()));
                }
            }
            Some(MenuChoice::Integrate) => {
                let Some(topic_dir) =
                    prompt(&mut editor, "Draft topic directory to integrate (e.g., draft/mytopic): ")?
                else {
                    break;
                };
                let default_notes = config.notes.notes_dir.display().to_string();
                let Some(notes_dir) =
                    prompt(&mut editor, &format!("Output notes directory [{}]: ", default_notes))?
                else {
                    break;
                };

                let args = IntegrateArgs {
                    topic_dir: PathBuf::from(topic_dir),
                    notes_dir: non_empty(notes_dir).map(PathBuf::from),
                };
                if let Err(e) = commands::execute_integrate(args, &config.notes, formatter) {
                    eprintln!("{}", formatter.error(&e.to_string()));
                }
            }
            Some(MenuChoice::Exit) => {
                println!("{}", formatter.info("Goodbye!"));
                break;
            }
            None => {
                println!("{}", formatter.warning("Invalid option. Please try again."));
            }
        }

        editor.add_history_entry(choice.trim()).ok();
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// Read one answer; `None` when input ends.
fn prompt(editor: &mut DefaultEditor, message: &str) -> Result<Option<String>> {
    match editor.readline(message) {
        Ok(line) => Ok(Some(line.trim().to_string())),
        Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
        Err(err) => Err(CliError::Io(std::io::Error::other(err.to_string()))),
    }
}

/// `None` for a blank answer
fn non_empty(answer: String) -> Option<String> {
    if answer.trim().is_empty() {
        None
    } else {
        Some(answer)
    }
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::home_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_menu() {
    println!();
    println!("Note Manager - Interactive Mode");
    println!("1. Create a draft note");
    println!("2. Integrate a topic");
    println!("3. Exit");
    println!();
}
