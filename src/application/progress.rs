//! Progress Tracker
//!
//! Session object that records which step of a run is in flight.
//! Every `advance` overwrites `deploy-progress.json` so a crashed run
//! leaves the last attempted step on disk. A finished run deletes it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DeployError, DeployResult};

/// File name of the progress record, relative to the invocation directory
pub const PROGRESS_FILENAME: &str = "deploy-progress.json";

/// Contents of the progress file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    /// Zero-based index of the step in flight
    pub progress: usize,
    /// Expected step total, 0 when unknown
    pub limit: u32,
    pub description: String,
    /// Never set; kept so the file layout stays stable
    pub done: bool,
    /// ISO-8601 UTC with millisecond precision
    pub started: String,
}

impl ProgressRecord {
    /// Read a persisted record back.
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub struct ProgressTracker {
    path: PathBuf,
    index: usize,
    record: ProgressRecord,
    step_started: Instant,
    durations: Vec<Duration>,
    written: bool,
}

impl ProgressTracker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            index: 0,
            record: ProgressRecord {
                progress: 0,
                limit: 0,
                description: "Started script".to_string(),
                done: false,
                started: timestamp(),
            },
            step_started: Instant::now(),
            durations: Vec::new(),
            written: false,
        }
    }

    /// Record the start of a new step and persist it.
    pub fn advance(&mut self, description: impl Into<String>) -> DeployResult<()> {
        let now = Instant::now();
        let elapsed = now.duration_since(self.step_started);
        self.durations.push(elapsed);
        self.step_started = now;

        self.record.description = description.into();
        self.record.started = timestamp();
        self.record.progress = self.index;

        tracing::debug!(
            step = self.index,
            previous_step_ms = elapsed.as_millis() as u64,
            "{}",
            self.record.description
        );

        let json = serde_json::to_string(&self.record)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
            .and_then(|json| fs::write(&self.path, json));
        if let Err(source) = json {
            return Err(DeployError::ProgressWriteFailed {
                path: self.path.clone(),
                source,
            });
        }

        self.written = true;
        self.index += 1;
        Ok(())
    }

    /// Number of `advance` calls so far
    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn set_limit(&mut self, limit: u32) {
        self.record.limit = limit;
    }

    pub fn limit(&self) -> u32 {
        self.record.limit
    }

    /// Time spent before each step began, measured from the previous one.
    pub fn step_durations(&self) -> &[Duration] {
        &self.durations
    }

    /// Remove the progress file after a successful run.
    pub fn finish(&mut self) -> DeployResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound && !self.written => Ok(()),
            Err(source) => Err(DeployError::ProgressDeleteFailed {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
