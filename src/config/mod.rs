//! Configuration module for redeploy
//!
//! One flat JSON record, `.deploy-config`, written by the wizard and
//! updated after each successful deploy. It is the only cross-run state
//! besides the progress file.

mod loader;
mod types;

pub use loader::{exists, to_pretty_json, ConfigWarning};
pub use types::{
    DeployConfig, CONFIG_FILENAME, DEFAULT_APP_NAME, DEFAULT_APP_PATH, DEFAULT_BRANCH,
};
