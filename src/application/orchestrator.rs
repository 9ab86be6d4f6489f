//! Mode selection
//!
//! A run either configures the tool (no config yet, or `--configure`)
//! or deploys with the stored configuration.

use std::path::{Path, PathBuf};

use crate::config::{self, CONFIG_FILENAME};

use super::progress::PROGRESS_FILENAME;

/// What a run does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Interactive first-time configuration, then the first deploy
    Wizard,
    /// Unattended sync and deploy
    Workflow,
}

/// The wizard runs when there is nothing to deploy with, or when asked to.
pub fn select_mode(config_exists: bool, reconfigure: bool) -> Mode {
    if reconfigure || !config_exists {
        Mode::Wizard
    } else {
        Mode::Workflow
    }
}

/// Where a run keeps its state files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatePaths {
    /// Directory relative `app-path` values resolve against
    pub base: PathBuf,
    pub config: PathBuf,
    pub progress: PathBuf,
}

impl StatePaths {
    pub fn in_dir(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref().to_path_buf();
        Self {
            config: base.join(CONFIG_FILENAME),
            progress: base.join(PROGRESS_FILENAME),
            base,
        }
    }

    /// Mode for this directory
    pub fn detect_mode(&self, reconfigure: bool) -> Mode {
        select_mode(config::exists(&self.config), reconfigure)
    }
}
