//! Configuration Wizard Use Case
//!
//! Collects the project name and working copy, saves `.deploy-config`,
//! warns about uncommitted work that the sync will discard, and offers
//! to run the first deploy right away.

use std::path::Path;

use crate::application::orchestrator::StatePaths;
use crate::application::preflight::QUERY_TIMEOUT;
use crate::application::workflow::{DeployWorkflow, RunOutcome};
use crate::config::{DeployConfig, DEFAULT_APP_NAME, DEFAULT_APP_PATH};
use crate::domain::ports::{CommandRunner, CommandSpec, Prompter, WorkflowEvent, WorkflowEventSink};
use crate::domain::value_objects::{validate_app_path, AppPath};
use crate::error::DeployResult;

pub const CONTINUE_QUESTION: &str = "Are you sure you wish to continue?";

pub struct ConfigureWizard<R, E>
where
    R: CommandRunner,
    E: WorkflowEventSink,
{
    runner: R,
    events: E,
    paths: StatePaths,
}

impl<R, E> ConfigureWizard<R, E>
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
        prompter.say("Starting configuration for deploy")?;

        let app_name = prompter.ask("Project name", DEFAULT_APP_NAME)?;
        let app_path = self.ask_app_path(prompter)?;

        let mut config = DeployConfig::new(app_name, &app_path);
        // Reconfiguring keeps a branch set by hand.
        config.branch = DeployConfig::load(&self.paths.config)
            .ok()
            .and_then(|previous| previous.branch);
        config.save(&self.paths.config)?;
        tracing::info!(app_path = %app_path, "configuration saved");

        self.warn_about_local_changes(&config.working_copy(&self.paths.base));

        prompter.say("The very first deploy will be executed now")?;
        if !prompter.confirm(CONTINUE_QUESTION)? {
            config.auto_run = false;
            config.save(&self.paths.config)?;
            prompter.say("Aborted by user")?;
            return Ok(RunOutcome::Declined);
        }

        let workflow = DeployWorkflow::new(&self.runner, &self.events, self.paths.clone());
        workflow.execute(prompter).map_err(|err| {
            config.auto_run = false;
            if let Err(save_err) = config.save(&self.paths.config) {
                tracing::warn!(error = %save_err, "could not mark configuration as manual");
            }
            err
        })
    }

    /// Re-ask until the answer names a git working copy.
    ///
    /// An empty answer is rejected rather than replaced by the suggestion.
    fn ask_app_path<P: Prompter + ?Sized>(&self, prompter: &mut P) -> DeployResult<AppPath> {
        loop {
            let answer = prompter.ask_verbatim("Application path", DEFAULT_APP_PATH)?;
            match validate_app_path(&answer, &self.paths.base) {
                Ok(app_path) => return Ok(app_path),
                Err(rejection) => {
                    tracing::debug!(answer = %answer, %rejection, "application path rejected");
                    prompter.say(&rejection.to_string())?;
                }
            }
        }
    }

    fn warn_about_local_changes(&self, working_copy: &Path) {
        let spec = CommandSpec::new("git status --porcelain")
            .in_dir(working_copy)
            .with_timeout(QUERY_TIMEOUT);

        match self.runner.run(&spec) {
            Ok(output) if output.stdout.trim().is_empty() => {}
            Ok(_) => self.events.on_event(WorkflowEvent::Warning {
                message: "There are unsaved files in the repository!".to_string(),
                detail: "The repo will be forcefully updated, removing any unsaved code!"
                    .to_string(),
            }),
            Err(err) => {
                tracing::warn!(error = %err, "git status failed");
                self.events.on_event(WorkflowEvent::Warning {
                    message: "Could not retrieve data about the repository".to_string(),
                    detail: err.to_string(),
                });
            }
        }
    }
}
