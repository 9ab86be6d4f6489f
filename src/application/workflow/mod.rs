//! Deploy Workflow
//!
//! The unattended run: preflight checks, repository sync, cloud deploy,
//! with every step recorded in the progress file.
//!
//! ## Usage
//!
//! ```ignore
//! use redeploy::application::{DeployWorkflow, StatePaths};
//!
//! let workflow = DeployWorkflow::new(ShellRunner::new(), NoopEventSink, StatePaths::in_dir("."));
//! let outcome = workflow.execute(&mut prompter)?;
//! ```

mod use_case;

pub use use_case::{DeploySummary, DeployWorkflow, RunOutcome, FIRST_DEPLOY_QUESTION};
