//! Integrate command implementations.

use crate::cli::{IntegrateAllArgs, IntegrateArgs};
use crate::error::Result;
use crate::output::Formatter;
use notekeeper_core::{integrate_all, integrate_topic, IntegrationOutcome, NotesConfig};

/// Execute the integrate command.
pub fn execute_integrate(
    args: IntegrateArgs,
    config: &NotesConfig,
    formatter: &Formatter,
) -> Result<IntegrationOutcome> {
    let notes_dir = args.notes_dir.unwrap_or_else(|| config.notes_dir.clone());
    let outcome = integrate_topic(&args.topic_dir, &notes_dir)?;

    println!("{}", formatter.integration(&outcome));

    Ok(outcome)
}

/// Execute the integrate-all command.
pub fn execute_integrate_all(
    args: IntegrateAllArgs,
    config: &NotesConfig,
    formatter: &Formatter,
) -> Result<usize> {
    let root = args.notes_root.unwrap_or_else(|| config.notes_dir.clone());
    let results = integrate_all(&root)?;

    let mut integrated = 0;
    for (topic, outcome) in &results {
        match outcome {
            IntegrationOutcome::Integrated { .. } => {
                integrated += 1;
                println!("{}", formatter.integration(outcome));
            }
            IntegrationOutcome::NothingToIntegrate => {
                println!("{}", formatter.info(&format!("Skipped '{}': no .adoc files", topic)));
            }
        }
    }

    Ok(integrated)
}
