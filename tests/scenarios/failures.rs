//! Scenario: Failed Runs
//!
//! Journey: Something outside redeploy is broken.
//!
//! Success Criteria:
//! - Exit code 1 with a readable error chain
//! - Nothing after the failing step runs
//! - The progress file names the failing step

use crate::common::*;
use crate::{assert_exit_code, assert_output_contains};

/// SCENARIO: git is not installed
#[test]
fn scenario_git_missing() {
    let env = TestEnv::builder()
        .with_config(STEADY_CONFIG)
        .with_working_copy("app")
        .without_tools()
        .build();

    let result = env.run(&[], "");

    assert_exit_code!(result, 1);
    assert_output_contains!(result, "Could not deploy due to error");
    assert_output_contains!(result, "not found");
    assert_output_contains!(result, "https://git-scm.com/downloads");
    assert!(env
        .read("deploy-progress.json")
        .contains("\"description\":\"Checking git cli utility\""));
}

/// SCENARIO: reset fails halfway through the sync
#[test]
fn scenario_reset_fails() {
    let env = TestEnv::builder()
        .with_config(STEADY_CONFIG)
        .with_working_copy("app")
        .with_failing_git("reset", "fatal: ambiguous argument 'origin/master'")
        .build();

    let result = env.run(&[], "");

    assert_exit_code!(result, 1);
    assert_output_contains!(result, "Could not reset the repository");
    assert_output_contains!(result, "exit code 128");

    let calls = env.tool_calls();
    assert_eq!(calls.last().map(String::as_str), Some("git reset --hard origin/master"));
    assert!(!calls.iter().any(|c| c.starts_with("git clean")));

    let progress = env.read("deploy-progress.json");
    assert!(progress.contains("\"description\":\"Resetting repository to head\""));
    assert!(progress.contains("\"progress\":5"));
    assert!(env.read(".deploy-config").contains("\"step-count\": 7"));
}

/// SCENARIO: config exists but is not usable
#[test]
fn scenario_invalid_config() {
    let env = TestEnv::builder().with_config(INVALID_CONFIG).build();

    let result = env.run(&[], "");

    assert_exit_code!(result, 1);
    assert_output_contains!(result, "invalid configuration file contents");
    assert_output_contains!(result, "redeploy --configure");
    assert!(env.tool_calls().is_empty());
}

/// SCENARIO: config is not JSON at all
#[test]
fn scenario_unreadable_config() {
    let env = TestEnv::builder().with_config("app-path = \"app/\"").build();

    let result = env.run(&[], "");

    assert_exit_code!(result, 1);
    assert_output_contains!(result, "could not open or read config file");
}

/// SCENARIO: first deploy from the wizard fails; next run asks again
#[test]
fn scenario_first_deploy_fails() {
    let env = TestEnv::builder()
        .with_working_copy("app")
        .with_failing_git("fetch", "fatal: could not read from remote repository")
        .build();

    let result = env.run(&[], "demo\napp\nyes\n");

    assert_exit_code!(result, 1);
    assert_output_contains!(result, "Could not configure due to error");
    assert_output_contains!(result, "Could not fetch repository");
    assert!(env.read(".deploy-config").contains("\"auto-run\": false"));
}
