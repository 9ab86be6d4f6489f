//! Scenario: Unattended Deploy
//!
//! Journey: A configured directory is deployed again, e.g. from a
//! cron job or a CI hook.
//!
//! Success Criteria:
//! - No questions asked
//! - Every git and gcloud step runs in order
//! - Progress file removed, step count remembered

use crate::common::*;
use crate::{assert_exit_code, assert_output_contains};

/// SCENARIO: auto-run config, every tool answers normally
#[test]
fn scenario_steady_state_deploy() {
    let env = TestEnv::builder()
        .with_config(STEADY_CONFIG)
        .with_working_copy("app")
        .build();

    let result = env.run(&[], "");

    assert_exit_code!(result, 0);
    for description in STEP_DESCRIPTIONS {
        assert_output_contains!(result, *description);
    }
    assert_output_contains!(result, "Deploy finished after 10 steps");
    assert!(!env.exists("deploy-progress.json"));

    assert_eq!(
        env.tool_calls(),
        [
            "git --version",
            "gcloud app versions list --project=demo --format=text",
            "git fetch --all --quiet",
            "git reset --hard origin/master",
            "git clean -f -d",
            "git clean -f -x -d",
            "git pull --quiet origin master",
            "gcloud --quiet app deploy --project=demo",
        ]
    );

    let config = env.read(".deploy-config");
    assert!(config.contains("\"step-count\": 10"));
}

/// SCENARIO: second run with the remembered step count leaves the config alone
#[test]
fn scenario_repeat_deploy_keeps_config() {
    let env = TestEnv::builder()
        .with_config(STEADY_CONFIG)
        .with_working_copy("app")
        .build();

    assert_exit_code!(env.run(&[], ""), 0);
    let after_first = env.read(".deploy-config");

    let second = env.run(&[], "");
    assert_exit_code!(second, 0);
    assert_output_contains!(second, "[3/10] Checking git cli utility");
    assert_eq!(env.read(".deploy-config"), after_first);
}

/// SCENARIO: manual config, confirmation declined
#[test]
fn scenario_manual_config_declined() {
    let env = TestEnv::builder()
        .with_config(MANUAL_CONFIG)
        .with_working_copy("app")
        .build();

    let result = env.run(&[], "no\n");

    assert_exit_code!(result, 0);
    assert_output_contains!(
        result,
        "Do you want to deploy the application now for the first time?"
    );
    assert_output_contains!(result, "Aborted");
    assert!(env.tool_calls().is_empty());
    assert!(env.read("deploy-progress.json").contains("\"description\":\"Checking first run\""));
}

/// SCENARIO: manual config, confirmation accepted
#[test]
fn scenario_manual_config_accepted() {
    let env = TestEnv::builder()
        .with_config(MANUAL_CONFIG)
        .with_working_copy("app")
        .build();

    let result = env.run(&[], "y\n");

    assert_exit_code!(result, 0);
    let config = env.read(".deploy-config");
    assert!(config.contains("\"auto-run\": true"));
    assert!(config.contains("\"step-count\": 10"));
}

/// SCENARIO: gcloud deploy prints something; warned, not failed
#[test]
fn scenario_verbose_deploy_warns() {
    let env = TestEnv::builder()
        .with_config(STEADY_CONFIG)
        .with_working_copy("app")
        .with_gcloud_deploy_output("Updating service [default]...done.")
        .build();

    let result = env.run(&[], "");

    assert_exit_code!(result, 0);
    assert_output_contains!(result, "gcloud returned unexpected value");
    assert_output_contains!(result, "Updating service [default]...done.");
    assert!(!env.exists("deploy-progress.json"));
}
