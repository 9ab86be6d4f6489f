//! Test environment builder for isolated redeploy testing.
//!
//! Provides `TestEnv` - an invocation directory in a temp dir, optional
//! working copies, and fake `git` / `gcloud` scripts on `PATH` that log
//! every call, plus helpers to run the redeploy binary with piped stdin.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Result of running the redeploy binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// How the fake tools behave
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolSetup {
    /// Fake `git` and `gcloud` scripts first on `PATH`
    Fake,
    /// `PATH` points at an empty directory; nothing can be found
    Missing,
}

/// Isolated test environment with a temp invocation directory.
pub struct TestEnv {
    /// Directory redeploy runs in (holds `.deploy-config`)
    pub root: TempDir,
    /// Directory holding the fake tool scripts (or nothing)
    tools_dir: TempDir,
    tools: ToolSetup,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {relative}: {e}"))
    }

    pub fn write(&self, relative: &str, content: &str) {
        let full = self.path(relative);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(full, content).expect("Failed to write file");
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    /// Run redeploy in the invocation directory, feeding `stdin`.
    pub fn run(&self, args: &[&str], stdin: &str) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env("REDEPLOY_NO_COLOR", "1")
            .env("REDEPLOY_FAKE_LOG", self.log_path())
            .env("PATH", self.path_var())
            .env_remove("REDEPLOY_LOG")
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd.spawn().expect("Failed to execute redeploy");
        {
            let mut input = child.stdin.take().expect("stdin is piped");
            // The binary may exit before reading everything.
            let _ = input.write_all(stdin.as_bytes());
        }
        let output = child.wait_with_output().expect("Failed to wait for redeploy");
        Self::output_to_result(output)
    }

    /// Commands the fake tools received, in order.
    pub fn tool_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.log_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn log_path(&self) -> PathBuf {
        self.tools_dir.path().join("calls.log")
    }

    fn path_var(&self) -> String {
        let tools = self.tools_dir.path().display().to_string();
        match self.tools {
            ToolSetup::Fake => match std::env::var("PATH") {
                Ok(system) => format!("{tools}:{system}"),
                Err(_) => tools,
            },
            ToolSetup::Missing => tools,
        }
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    config: Option<String>,
    working_copies: Vec<String>,
    tools: ToolSetup,
    failing_git: Vec<(String, String)>,
    gcloud_deploy_output: Option<String>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            working_copies: Vec::new(),
            tools: ToolSetup::Fake,
            failing_git: Vec::new(),
            gcloud_deploy_output: None,
        }
    }

    /// Write `.deploy-config` with this content
    pub fn with_config(mut self, json: &str) -> Self {
        self.config = Some(json.to_string());
        self
    }

    /// Create `<dir>/.git/` under the invocation directory ("." for itself)
    pub fn with_working_copy(mut self, dir: &str) -> Self {
        self.working_copies.push(dir.to_string());
        self
    }

    pub fn without_tools(mut self) -> Self {
        self.tools = ToolSetup::Missing;
        self
    }

    /// Make `git <subcommand>` fail with exit code 128
    pub fn with_failing_git(mut self, subcommand: &str, stderr: &str) -> Self {
        self.failing_git
            .push((subcommand.to_string(), stderr.to_string()));
        self
    }

    pub fn with_gcloud_deploy_output(mut self, output: &str) -> Self {
        self.gcloud_deploy_output = Some(output.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let root = TempDir::new().expect("Failed to create temp dir");
        let tools_dir = TempDir::new().expect("Failed to create tools dir");

        for dir in &self.working_copies {
            std::fs::create_dir_all(root.path().join(dir).join(".git"))
                .expect("Failed to create working copy");
        }
        if let Some(config) = &self.config {
            std::fs::write(root.path().join(".deploy-config"), config)
                .expect("Failed to write config");
        }
        if self.tools == ToolSetup::Fake {
            write_script(&tools_dir.path().join("git"), &self.git_script());
            write_script(&tools_dir.path().join("gcloud"), &self.gcloud_script());
        }

        TestEnv {
            root,
            tools_dir,
            tools: self.tools,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_redeploy")),
        }
    }

    fn git_script(&self) -> String {
        let mut cases = String::from("  --version) echo \"git version 2.43.0\" ;;\n");
        for (subcommand, stderr) in &self.failing_git {
            cases.push_str(&format!(
                "  {subcommand}) echo \"{stderr}\" >&2; exit 128 ;;\n"
            ));
        }
        format!(
            "#!/bin/sh\necho \"git $*\" >> \"$REDEPLOY_FAKE_LOG\"\ncase \"$1\" in\n{cases}esac\nexit 0\n"
        )
    }

    fn gcloud_script(&self) -> String {
        let deploy = self
            .gcloud_deploy_output
            .as_deref()
            .map(|out| format!("  \"--quiet app deploy\"*) echo \"{out}\" >&2 ;;\n"))
            .unwrap_or_default();
        format!(
            "#!/bin/sh\necho \"gcloud $*\" >> \"$REDEPLOY_FAKE_LOG\"\ncase \"$*\" in\n  \"app versions list\"*) printf 'environment.name: STANDARD\\nid: 20240101t000000\\n' ;;\n{deploy}esac\nexit 0\n"
        )
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
fn write_script(path: &Path, content: &str) {
    use std::os::unix::fs::PermissionsExt;

    std::fs::write(path, content).expect("Failed to write script");
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to make script executable");
}

#[cfg(not(unix))]
fn write_script(path: &Path, content: &str) {
    std::fs::write(path, content).expect("Failed to write script");
}
