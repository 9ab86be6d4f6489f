//! Shell Command Runner
//!
//! Runs a command line through the system shell so the same strings work
//! as they would typed in a terminal (`&&` chains included).

use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::domain::ports::{CommandOutput, CommandRunner, CommandSpec};
use crate::error::{DeployError, DeployResult};

/// How often a child with a deadline is polled
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Command runner backed by `/bin/sh -c` (or `cmd /C` on Windows)
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }

    #[cfg(windows)]
    fn shell_command(command: &str) -> Command {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(command);
        cmd
    }

    #[cfg(not(windows))]
    fn shell_command(command: &str) -> Command {
        let mut cmd = Command::new("/bin/sh");
        cmd.arg("-c").arg(command);
        cmd
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, spec: &CommandSpec) -> DeployResult<CommandOutput> {
        let mut cmd = Self::shell_command(&spec.command);
        if let Some(cwd) = &spec.cwd {
            cmd.current_dir(cwd);
        }
        cmd.envs(spec.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        tracing::debug!(command = %spec.command, cwd = ?spec.cwd, "running command");

        let mut child = cmd.spawn().map_err(|e| DeployError::CommandFailed {
            command: spec.command.clone(),
            exit_code: None,
            stdout: String::new(),
            stderr: e.to_string(),
        })?;

        // Drain both pipes while waiting so a chatty child cannot block on a full pipe.
        let stdout_reader = spawn_reader(child.stdout.take());
        let stderr_reader = spawn_reader(child.stderr.take());

        let status = match spec.timeout {
            Some(timeout) => wait_with_timeout(&mut child, timeout),
            None => child.wait().map(Some),
        }
        .map_err(|e| DeployError::CommandFailed {
            command: spec.command.clone(),
            exit_code: None,
            stdout: String::new(),
            stderr: e.to_string(),
        })?;

        let Some(status) = status else {
            tracing::warn!(command = %spec.command, "command timed out");
            // Not joined: a program started by the killed shell may still hold the pipes.
            return Err(DeployError::CommandTimedOut {
                command: spec.command.clone(),
                timeout: spec.timeout.unwrap_or_default(),
            });
        };

        let stdout = stdout_reader.join().unwrap_or_default();
        let stderr = stderr_reader.join().unwrap_or_default();

        tracing::trace!(command = %spec.command, code = ?status.code(), "command exited");

        if !status.success() {
            return Err(DeployError::CommandFailed {
                command: spec.command.clone(),
                exit_code: status.code(),
                stdout,
                stderr,
            });
        }

        Ok(CommandOutput { stdout, stderr })
    }
}

fn spawn_reader<R: Read + Send + 'static>(pipe: Option<R>) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        String::from_utf8_lossy(&buf).into_owned()
    })
}

/// Wait for `child`, killing it once `timeout` elapses.
///
/// Returns `Ok(None)` when the deadline was hit. Only the shell itself is
/// killed: programs it started from a `&&` or `;` chain keep running until
/// they exit on their own, and the pipe readers stay detached until then.
/// The timed queries (`git --version`, `git status --porcelain`) are single
/// programs, so nothing outlives the shell for them.
fn wait_with_timeout(child: &mut Child, timeout: Duration) -> std::io::Result<Option<ExitStatus>> {
    let start = Instant::now();
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if start.elapsed() >= timeout {
            let _ = child.kill();
            let _ = child.wait();
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}
