//! Error types for redeploy
//!
//! Library functions return `DeployResult`; the binary adds context with
//! `anyhow` and is the only place that turns an error into an exit code.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::domain::value_objects::PathRejection;

/// Result type alias for redeploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for redeploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// Config file missing, unreadable, or not a JSON object
    #[error("could not open or read config file {path}: {message}")]
    ConfigMissingOrUnreadable { path: PathBuf, message: String },

    /// Config file parsed but its contents are unusable
    #[error("invalid configuration file contents in {path}: {message}")]
    ConfigInvalid { path: PathBuf, message: String },

    /// Config file could not be written
    #[error("could not save configuration file {path}, check your permissions for the current folder")]
    ConfigWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Progress file could not be written
    #[error("could not write progress file {path}, check your permissions for the current folder")]
    ProgressWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Progress file could not be removed after a finished run
    #[error("could not remove progress file {path}")]
    ProgressDeleteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// External tool binary is missing
    #[error("the {tool} utility was not found or is not installed")]
    ToolNotInstalled { tool: String, hint: Option<String> },

    /// External tool ran but did not answer as expected
    #[error("the {tool} utility {reason}:\n{output}")]
    ToolCheckFailed {
        tool: String,
        reason: String,
        output: String,
    },

    /// Shell command exited unsuccessfully
    #[error("command `{command}` failed{}{}", exit_code_suffix(.exit_code), output_suffix(.stdout, .stderr))]
    CommandFailed {
        command: String,
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    /// Shell command exceeded its time budget and was killed
    #[error("command `{command}` took too long to return (limit {timeout:?})")]
    CommandTimedOut { command: String, timeout: Duration },

    /// Command succeeded but printed more than a quiet run should
    #[error("command `{command}` returned unexpected output:\n{output}")]
    UnexpectedOutput { command: String, output: String },

    /// Wizard input rejected
    #[error("{0}")]
    ValidationFailed(#[from] PathRejection),

    /// Reading an answer from the terminal failed
    #[error("could not read your answer: {0}")]
    Prompt(String),

    /// A workflow step failed; `action` says what was being attempted
    #[error("{action}")]
    Step {
        action: String,
        #[source]
        source: Box<DeployError>,
    },
}

impl DeployError {
    /// Wrap an error with the human description of the step that failed.
    pub fn in_step(action: impl Into<String>, source: DeployError) -> Self {
        DeployError::Step {
            action: action.into(),
            source: Box::new(source),
        }
    }

    /// The innermost error, skipping any `Step` wrappers.
    pub fn root(&self) -> &DeployError {
        match self {
            DeployError::Step { source, .. } => source.root(),
            other => other,
        }
    }

    /// Suggested fix for the user, when one is known.
    pub fn hint(&self) -> Option<&str> {
        match self.root() {
            DeployError::ToolNotInstalled { hint, .. } => hint.as_deref(),
            DeployError::ConfigInvalid { .. } | DeployError::ConfigMissingOrUnreadable { .. } => {
                Some("Run `redeploy --configure` to create a new configuration")
            }
            _ => None,
        }
    }
}

fn exit_code_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {code}"),
        None => String::new(),
    }
}

fn output_suffix(stdout: &str, stderr: &str) -> String {
    let mut out = String::new();
    for stream in [stdout.trim(), stderr.trim()] {
        if !stream.is_empty() {
            out.push('\n');
            out.push_str(stream);
        }
    }
    out
}
