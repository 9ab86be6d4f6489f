//! Deploy command entry point

use anyhow::{Context, Result};
use redeploy::application::{RunOutcome, StatePaths};
use redeploy::presentation::factory;

use crate::ui::console::ConsoleEventSink;
use crate::ui::context::UiContext;

pub fn cmd_deploy(paths: StatePaths, ui: &UiContext) -> Result<()> {
    let sink = ConsoleEventSink::new(*ui);
    let workflow = factory::create_deploy_workflow(paths, &sink);
    let mut prompter = factory::create_prompter(ui.color);

    let outcome = workflow
        .execute(prompter.as_mut())
        .context("Could not deploy due to error")?;

    if let RunOutcome::Deployed(summary) = outcome {
        tracing::debug!(
            steps = summary.steps,
            config_updated = summary.config_updated,
            durations = ?summary.step_durations,
            "deploy run complete"
        );
    }
    Ok(())
}
