//! Repository Sync
//!
//! Brings the working copy to the exact state of `origin/<branch>`:
//! fetch, hard reset, clean untracked and ignored files, pull.
//! Each step fails on its own with a description of what was attempted.

use std::path::Path;
use std::thread;
use std::time::Duration;

use crate::domain::ports::{CommandOutput, CommandRunner, CommandSpec};
use crate::domain::services::classifier::FETCH_QUIET_LIMIT;
use crate::domain::services::is_quiet;
use crate::error::{DeployError, DeployResult};

/// Child environment for every sync command.
///
/// git must never wait for credentials on a terminal nobody watches.
pub const SYNC_ENV: &[(&str, &str)] = &[
    ("GIT_TERMINAL_PROMPT", "0"),
    ("GIT_SSH_COMMAND", "ssh -o BatchMode=yes"),
];

/// Pause between clean and pull
pub const PULL_DELAY: Duration = Duration::from_millis(100);

fn sync_command(command: String, working_copy: &Path) -> CommandSpec {
    SYNC_ENV
        .iter()
        .fold(CommandSpec::new(command).in_dir(working_copy), |spec, (k, v)| {
            spec.with_env(*k, *v)
        })
}

fn run_step<R: CommandRunner>(
    runner: &R,
    action: &str,
    spec: CommandSpec,
) -> DeployResult<CommandOutput> {
    runner
        .run(&spec)
        .map_err(|e| DeployError::in_step(action, e))
}

/// `git fetch --all --quiet`; anything printed beyond a few characters is fatal.
pub fn fetch<R: CommandRunner>(runner: &R, working_copy: &Path) -> DeployResult<()> {
    let command = "git fetch --all --quiet";
    let output = run_step(
        runner,
        "Could not fetch repository",
        sync_command(command.to_string(), working_copy),
    )?;

    let combined = output.combined();
    if !is_quiet(&combined, FETCH_QUIET_LIMIT) {
        return Err(DeployError::in_step(
            "Git fetching returned an invalid value",
            DeployError::UnexpectedOutput {
                command: command.to_string(),
                output: combined.trim().to_string(),
            },
        ));
    }
    Ok(())
}

pub fn reset<R: CommandRunner>(runner: &R, working_copy: &Path, branch: &str) -> DeployResult<()> {
    run_step(
        runner,
        "Could not reset the repository",
        sync_command(format!("git reset --hard origin/{branch}"), working_copy),
    )
    .map(drop)
}

/// Removes untracked directories, then ignored files as well.
pub fn clean<R: CommandRunner>(runner: &R, working_copy: &Path) -> DeployResult<()> {
    run_step(
        runner,
        "Could not clean the repository",
        sync_command(
            "git clean -f -d && git clean -f -x -d".to_string(),
            working_copy,
        ),
    )
    .map(drop)
}

pub fn pull<R: CommandRunner>(runner: &R, working_copy: &Path, branch: &str) -> DeployResult<()> {
    thread::sleep(PULL_DELAY);
    run_step(
        runner,
        "Could not pull repository from origin",
        sync_command(format!("git pull --quiet origin {branch}"), working_copy),
    )
    .map(drop)
}
