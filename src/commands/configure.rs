//! Configure command entry point

use anyhow::{Context, Result};
use redeploy::application::StatePaths;
use redeploy::presentation::factory;

use crate::ui::console::ConsoleEventSink;
use crate::ui::context::UiContext;

/// Wizard, then the first deploy if the user agrees.
pub fn cmd_configure(paths: StatePaths, ui: &UiContext) -> Result<()> {
    let sink = ConsoleEventSink::new(*ui);
    let wizard = factory::create_configure_wizard(paths, &sink);
    let mut prompter = factory::create_prompter(ui.color);

    wizard
        .execute(prompter.as_mut())
        .context("Could not configure due to error")?;
    Ok(())
}
