//! redeploy - keep a Google App Engine deployment in step with a git remote
//!
//! The first run asks for a project name and a working copy and stores
//! them in `.deploy-config`. Every later run checks that `git` and
//! `gcloud` work, resets the working copy to `origin/<branch>`, and runs
//! `gcloud app deploy`, writing each step to `deploy-progress.json`.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    select_mode, ConfigureWizard, DeploySummary, DeployWorkflow, Mode, RunOutcome, StatePaths,
};
pub use config::DeployConfig;
pub use domain::value_objects::{validate_app_path, AppPath, PathRejection};
pub use error::{DeployError, DeployResult};
