//! Command handlers for the CLI

pub mod configure;
pub mod deploy;

use anyhow::{Context, Result};
use redeploy::application::{Mode, StatePaths};
use redeploy::presentation::Cli;

use crate::ui::context::UiContext;

/// Pick the mode for the current directory and run it.
pub fn run(cli: &Cli, ui: &UiContext) -> Result<()> {
    let cwd = std::env::current_dir().context("Could not determine the current directory")?;
    let paths = StatePaths::in_dir(cwd);

    let mode = paths.detect_mode(cli.configure);
    tracing::debug!(?mode, config = %paths.config.display(), "selected mode");

    match mode {
        Mode::Wizard => configure::cmd_configure(paths, ui),
        Mode::Workflow => deploy::cmd_deploy(paths, ui),
    }
}
