//! Preflight Checks
//!
//! Make sure `git` and `gcloud` can be executed before touching the
//! working copy.

use std::path::Path;
use std::time::Duration;

use crate::config::DeployConfig;
use crate::domain::ports::{CommandRunner, CommandSpec};
use crate::domain::services::classifier::{GCLOUD_VERSIONS, GIT_VERSION};
use crate::domain::services::{classify, looks_not_installed, Verdict};
use crate::error::{DeployError, DeployResult};

/// Limit for the version and status queries
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(10);

pub const GIT_DOWNLOAD_HINT: &str = "To download it, use this link: https://git-scm.com/downloads";
pub const GCLOUD_DOWNLOAD_HINT: &str =
    "To install it, follow https://cloud.google.com/sdk/docs/install";

const GIT_ACTION: &str = "Could not assert the existence of git on this machine";
const GCLOUD_ACTION: &str = "Could not execute gcloud from the command line";

/// Map a failed tool invocation to "not installed" or "check failed".
///
/// Only the shell's own "no such command" answers count as not installed;
/// anything the tool itself printed is a failed check.
fn tool_failure(tool: &str, hint: &str, err: DeployError) -> DeployError {
    match err {
        DeployError::CommandFailed {
            exit_code, stderr, ..
        } if looks_not_installed(exit_code, &stderr) => DeployError::ToolNotInstalled {
            tool: tool.to_string(),
            hint: Some(hint.to_string()),
        },
        DeployError::CommandFailed {
            exit_code,
            stdout,
            stderr,
            ..
        } => DeployError::ToolCheckFailed {
            tool: tool.to_string(),
            reason: match exit_code {
                Some(code) => format!("exited with code {code}"),
                None => "could not be started".to_string(),
            },
            output: format!("{stdout}{stderr}").trim().to_string(),
        },
        other => other,
    }
}

/// `git --version` must run and not complain.
pub fn assert_git_available<R: CommandRunner>(runner: &R) -> DeployResult<()> {
    let spec = CommandSpec::new("git --version").with_timeout(QUERY_TIMEOUT);
    let output = runner
        .run(&spec)
        .map_err(|e| {
            DeployError::in_step(
                GIT_ACTION,
                tool_failure(GIT_VERSION.tool, GIT_DOWNLOAD_HINT, e),
            )
        })?;

    match classify(&output.combined(), &GIT_VERSION) {
        Verdict::Ok => {
            tracing::debug!(version = output.stdout.trim(), "git available");
            Ok(())
        }
        verdict => {
            tracing::debug!(?verdict, "git version output rejected");
            Err(DeployError::in_step(
                GIT_ACTION,
                DeployError::ToolNotInstalled {
                    tool: GIT_VERSION.tool.to_string(),
                    hint: Some(GIT_DOWNLOAD_HINT.to_string()),
                },
            ))
        }
    }
}

/// `gcloud app versions list` must answer for the configured project.
pub fn assert_cloud_tool_available<R: CommandRunner>(
    runner: &R,
    config: &DeployConfig,
    working_copy: &Path,
) -> DeployResult<()> {
    let spec = CommandSpec::new(format!(
        "gcloud app versions list --project={} --format=text",
        config.app_name
    ))
    .in_dir(working_copy);

    let output = runner.run(&spec).map_err(|e| {
        DeployError::in_step(
            GCLOUD_ACTION,
            tool_failure(GCLOUD_VERSIONS.tool, GCLOUD_DOWNLOAD_HINT, e),
        )
    })?;
    let combined = output.combined();

    let reason = match classify(&combined, &GCLOUD_VERSIONS) {
        Verdict::Ok => return Ok(()),
        Verdict::FailureMarker(_) => "returned an error",
        Verdict::MissingSuccessMarker(_) => "returned unexpectedly",
    };
    Err(DeployError::in_step(
        GCLOUD_ACTION,
        DeployError::ToolCheckFailed {
            tool: GCLOUD_VERSIONS.tool.to_string(),
            reason: reason.to_string(),
            output: combined.trim().to_string(),
        },
    ))
}
