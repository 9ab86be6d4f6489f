//! Deploy Workflow Use Case
//!
//! Orchestrates one unattended run:
//! 1. Load the configuration
//! 2. Ask for confirmation if the last wizard run was declined
//! 3. Check that `git` and `gcloud` work
//! 4. Sync the working copy with `origin/<branch>`
//! 5. Deploy
//! 6. Remove the progress file and remember the step count
//!
//! Every step is recorded in the progress file before it starts.

use std::path::Path;
use std::time::Duration;

use crate::application::deploy::deploy_app;
use crate::application::orchestrator::StatePaths;
use crate::application::preflight::{assert_cloud_tool_available, assert_git_available};
use crate::application::progress::ProgressTracker;
use crate::application::sync;
use crate::config::DeployConfig;
use crate::domain::ports::{CommandRunner, Prompter, WorkflowEvent, WorkflowEventSink};
use crate::error::DeployResult;

pub const FIRST_DEPLOY_QUESTION: &str =
    "Do you want to deploy the application now for the first time?";

/// How a run ended without error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Deployed(DeploySummary),
    /// The user answered no to a confirmation
    Declined,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploySummary {
    /// Steps the run took, as stored in `step-count`
    pub steps: usize,
    /// Whether `.deploy-config` was rewritten
    pub config_updated: bool,
    /// Output of a deploy that was not quiet
    pub deploy_warning: Option<String>,
    pub step_durations: Vec<Duration>,
}

/// Deploy workflow, parameterized by its ports.
pub struct DeployWorkflow<R, E>
where
    R: CommandRunner,
    E: WorkflowEventSink,
{
    runner: R,
    events: E,
    paths: StatePaths,
}

impl<R, E> DeployWorkflow<R, E>
where
    R: CommandRunner,
    E: WorkflowEventSink,
{
    pub fn new(runner: R, events: E, paths: StatePaths) -> Self {
        Self {
            runner,
            events,
            paths,
        }
    }

    pub fn execute<P: Prompter + ?Sized>(&self, prompter: &mut P) -> DeployResult<RunOutcome> {
        let mut tracker = ProgressTracker::new(&self.paths.progress);

        self.step(&mut tracker, "Loading config file")?;
        let (mut config, warnings) = DeployConfig::load_with_warnings(&self.paths.config)?;
        for warning in warnings {
            self.events.on_event(WorkflowEvent::Warning {
                message: warning.to_string(),
                detail: warning
                    .suggestion
                    .map(|s| format!("Did you mean '{s}'?"))
                    .unwrap_or_default(),
            });
        }

        self.step(&mut tracker, "Checking first run")?;
        if !config.auto_run && !prompter.confirm(FIRST_DEPLOY_QUESTION)? {
            prompter.say("Aborted")?;
            tracing::info!("first deploy declined");
            return Ok(RunOutcome::Declined);
        }

        if config.step_count > 0 {
            tracker.set_limit(config.step_count);
        }

        let working_copy = config.working_copy(&self.paths.base);
        let deploy_warning = self.run_steps(&mut tracker, &config, &working_copy)?;

        if let Err(err) = tracker.finish() {
            tracing::warn!(error = %err, "progress file left behind");
            self.events.on_event(WorkflowEvent::Warning {
                message: err.to_string(),
                detail: std::error::Error::source(&err)
                    .map(|s| s.to_string())
                    .unwrap_or_default(),
            });
        }

        let steps = tracker.current_index() + 1;
        self.events.on_event(WorkflowEvent::Finished { steps });
        tracing::info!(steps, "deploy finished");

        let config_updated = config.step_count as usize != steps || !config.auto_run;
        if config_updated {
            config.step_count = steps as u32;
            config.auto_run = true;
            config.save(&self.paths.config)?;
            self.events.on_event(WorkflowEvent::ConfigUpdated {
                step_count: config.step_count,
                auto_run: config.auto_run,
            });
        }

        Ok(RunOutcome::Deployed(DeploySummary {
            steps,
            config_updated,
            deploy_warning,
            step_durations: tracker.step_durations().to_vec(),
        }))
    }

    fn run_steps(
        &self,
        tracker: &mut ProgressTracker,
        config: &DeployConfig,
        working_copy: &Path,
    ) -> DeployResult<Option<String>> {
        let branch = config.branch();

        self.step(tracker, "Checking git cli utility")?;
        assert_git_available(&self.runner)?;

        self.step(tracker, "Checking gcloud cli utility")?;
        assert_cloud_tool_available(&self.runner, config, working_copy)?;

        self.step(tracker, "Fetching repository information")?;
        sync::fetch(&self.runner, working_copy)?;

        self.step(tracker, "Resetting repository to head")?;
        sync::reset(&self.runner, working_copy, branch)?;

        self.step(tracker, "Cleaning repository leftovers")?;
        sync::clean(&self.runner, working_copy)?;

        self.step(tracker, &format!("Pulling newest state from origin/{branch}"))?;
        sync::pull(&self.runner, working_copy, branch)?;

        self.step(tracker, "Deploying application to google cloud")?;
        let report = deploy_app(&self.runner, config, working_copy)?;
        if let Some(output) = &report.warning {
            self.events.on_event(WorkflowEvent::Warning {
                message: "gcloud returned unexpected value".to_string(),
                detail: output.clone(),
            });
        }

        Ok(report.warning)
    }

    fn step(&self, tracker: &mut ProgressTracker, description: &str) -> DeployResult<()> {
        let index = tracker.current_index();
        tracker.advance(description)?;
        self.events.on_event(WorkflowEvent::StepStarted {
            index,
            limit: tracker.limit(),
            description: description.to_string(),
        });
        Ok(())
    }
}
