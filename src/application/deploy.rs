//! Cloud Deploy
//!
//! Runs `gcloud app deploy` against the synced working copy.

use std::path::Path;

use crate::config::DeployConfig;
use crate::domain::ports::{CommandRunner, CommandSpec};
use crate::domain::services::classifier::DEPLOY_QUIET_LIMIT;
use crate::domain::services::is_quiet;
use crate::error::{DeployError, DeployResult};

/// Outcome of a deploy command that exited successfully
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployReport {
    /// Output of a deploy that was not quiet; not fatal
    pub warning: Option<String>,
}

pub fn deploy_app<R: CommandRunner>(
    runner: &R,
    config: &DeployConfig,
    working_copy: &Path,
) -> DeployResult<DeployReport> {
    let spec = CommandSpec::new(format!(
        "gcloud --quiet app deploy --project={}",
        config.app_name
    ))
    .in_dir(working_copy);

    let output = runner.run(&spec).map_err(|e| {
        DeployError::in_step("Could not execute google cloud from the command line", e)
    })?;

    let combined = output.combined();
    if is_quiet(&combined, DEPLOY_QUIET_LIMIT) {
        return Ok(DeployReport::default());
    }

    tracing::warn!(output = combined.trim(), "gcloud returned unexpected output");
    Ok(DeployReport {
        warning: Some(combined.trim().to_string()),
    })
}
