//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the binary.

use std::io;

use is_terminal::IsTerminal;

use crate::application::{ConfigureWizard, DeployWorkflow, StatePaths};
use crate::domain::ports::{Prompter, WorkflowEventSink};
use crate::infrastructure::{LinePrompter, ShellRunner, TerminalPrompter};

/// Deploy workflow running real shell commands
pub type ConcreteDeployWorkflow<E> = DeployWorkflow<ShellRunner, E>;

/// Configuration wizard running real shell commands
pub type ConcreteConfigureWizard<E> = ConfigureWizard<ShellRunner, E>;

pub fn create_deploy_workflow<E: WorkflowEventSink>(
    paths: StatePaths,
    events: E,
) -> ConcreteDeployWorkflow<E> {
    DeployWorkflow::new(ShellRunner::new(), events, paths)
}

pub fn create_configure_wizard<E: WorkflowEventSink>(
    paths: StatePaths,
    events: E,
) -> ConcreteConfigureWizard<E> {
    ConfigureWizard::new(ShellRunner::new(), events, paths)
}

/// dialoguer prompts on a terminal, plain lines when stdin is piped.
pub fn create_prompter(color: bool) -> Box<dyn Prompter> {
    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        Box::new(TerminalPrompter::new(color))
    } else {
        Box::new(LinePrompter::stdio())
    }
}
