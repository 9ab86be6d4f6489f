//! Command Runner Port
//!
//! Executes one shell command line and reports its captured output.
//! The infrastructure layer provides the real shell implementation;
//! tests provide scripted runners.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::DeployResult;

/// A shell command line plus how to run it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Full command line, interpreted by the system shell
    pub command: String,
    /// Working directory (inherits the process cwd when `None`)
    pub cwd: Option<PathBuf>,
    /// Kill the command after this long
    pub timeout: Option<Duration>,
    /// Extra environment variables for the child only
    pub env: Vec<(String, String)>,
}

impl CommandSpec {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            cwd: None,
            timeout: None,
            env: Vec::new(),
        }
    }

    pub fn in_dir(mut self, cwd: impl AsRef<Path>) -> Self {
        self.cwd = Some(cwd.as_ref().to_path_buf());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }
}

/// Captured output of a command that exited with status 0
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// stdout and stderr joined by a newline
    pub fn combined(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Runs shell commands.
///
/// Implementations:
/// - `ShellRunner`: `/bin/sh -c` (or `cmd /C`) via `std::process`
/// - scripted runners in tests
pub trait CommandRunner {
    /// Run the command to completion.
    ///
    /// Non-zero exit yields `DeployError::CommandFailed`, an elapsed
    /// timeout yields `DeployError::CommandTimedOut`.
    fn run(&self, spec: &CommandSpec) -> DeployResult<CommandOutput>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, spec: &CommandSpec) -> DeployResult<CommandOutput> {
        (**self).run(spec)
    }
}
