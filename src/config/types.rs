//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::value_objects::AppPath;
use crate::error::DeployResult;

use super::loader::{self, ConfigWarning};

/// File name of the configuration record, relative to the invocation directory
pub const CONFIG_FILENAME: &str = ".deploy-config";

/// Default `app-name` offered by the wizard
pub const DEFAULT_APP_NAME: &str = "anonymous";

/// `app-path` suggested by the wizard; an empty answer is still rejected
pub const DEFAULT_APP_PATH: &str = "..";

/// Branch reset to and pulled from when none is configured
pub const DEFAULT_BRANCH: &str = "master";

/// Persisted configuration record (`.deploy-config`)
///
/// ```json
/// {
///     "app-name": "my-project",
///     "app-path": "../app/",
///     "auto-run": true,
///     "step-count": 10
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DeployConfig {
    /// Project passed to `gcloud --project=`
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Working copy, forward slashes with a trailing `/`
    pub app_path: String,

    /// `false` asks for confirmation before the next deploy
    #[serde(default = "default_auto_run")]
    pub auto_run: bool,

    /// Steps the previous successful run took (0 = unknown)
    #[serde(default, deserialize_with = "deserialize_step_count")]
    pub step_count: u32,

    /// Remote branch to reset to and pull
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_string()
}

fn default_auto_run() -> bool {
    true
}

/// Older files stored `step-count` as a string; accept both forms.
fn deserialize_step_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StepCountDe {
        Number(u32),
        Text(String),
    }

    match StepCountDe::deserialize(deserializer)? {
        StepCountDe::Number(n) => Ok(n),
        StepCountDe::Text(s) => s.trim().parse().map_err(|_| {
            serde::de::Error::custom(format!("step-count must be a whole number, got \"{s}\""))
        }),
    }
}

impl DeployConfig {
    /// Fresh record as produced by the wizard.
    pub fn new(app_name: impl Into<String>, app_path: &AppPath) -> Self {
        Self {
            app_name: app_name.into(),
            app_path: app_path.as_str().to_string(),
            auto_run: true,
            step_count: 0,
            branch: None,
        }
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> DeployResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> DeployResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Persist as tab-indented JSON, replacing the file atomically.
    pub fn save(&self, path: &Path) -> DeployResult<()> {
        loader::save(path, self)
    }

    /// Branch used for reset and pull
    pub fn branch(&self) -> &str {
        self.branch.as_deref().unwrap_or(DEFAULT_BRANCH)
    }

    pub fn app_path(&self) -> AppPath {
        AppPath::from_persisted(self.app_path.clone())
    }

    /// Working copy directory, resolved against `base` when relative
    pub fn working_copy(&self, base: &Path) -> PathBuf {
        self.app_path().resolve(base)
    }
}
