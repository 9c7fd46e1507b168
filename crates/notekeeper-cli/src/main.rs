//! Notekeeper CLI - create, integrate and index personal notes.

use anyhow::Context;
use clap::Parser;
use notekeeper_cli::commands;
use notekeeper_cli::repl;
use notekeeper_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Load or create config
    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().context("Failed to load config from ~/.notekeeper/config.toml")?,
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    tracing::debug!(?format, color_enabled, "Loaded configuration");

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    match cli.command {
        None | Some(Command::Interactive) => {
            repl::run_interactive(&config, &formatter)?;
        }
        Some(Command::Draft(args)) => {
            commands::execute_draft(args, &config.notes, &formatter)?;
        }
        Some(Command::Diary(args)) => {
            commands::execute_diary(args, &config.notes, &formatter)?;
        }
        Some(Command::Integrate(args)) => {
            commands::execute_integrate(args, &config.notes, &formatter)?;
        }
        Some(Command::IntegrateAll(args)) => {
            commands::execute_integrate_all(args, &config.notes, &formatter)?;
        }
        Some(Command::Index(args)) => {
            commands::execute_index(args, &config.notes, &formatter)?;
        }
        Some(Command::Titles(args)) => {
            commands::execute_titles(args, &config.notes, &formatter)?;
        }
    }

    Ok(())
}

/// Initialize tracing (log to stderr).
///
/// `NOTEKEEPER_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env("NOTEKEEPER_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
