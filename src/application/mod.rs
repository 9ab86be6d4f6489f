//! Application Layer
//!
//! Use cases that orchestrate a run.
//! This layer:
//! - Depends on Domain layer (ports, services, value objects)
//! - Does NOT contain pattern or validation rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployWorkflow` - Preflight, sync and deploy with progress tracking
//! - `ConfigureWizard` - First-run configuration, then the first deploy
//!
//! ## Steps
//!
//! - `preflight` - `git` / `gcloud` availability
//! - `sync` - fetch, reset, clean, pull
//! - `deploy` - `gcloud app deploy`
//! - `progress` - the progress file session

pub mod deploy;
pub mod orchestrator;
pub mod preflight;
pub mod progress;
pub mod sync;
pub mod wizard;
pub mod workflow;

#[cfg(test)]
mod testing;

pub use deploy::{deploy_app, DeployReport};
pub use orchestrator::{select_mode, Mode, StatePaths};
pub use progress::{ProgressRecord, ProgressTracker, PROGRESS_FILENAME};
pub use wizard::{ConfigureWizard, CONTINUE_QUESTION};
pub use workflow::{DeploySummary, DeployWorkflow, RunOutcome, FIRST_DEPLOY_QUESTION};
