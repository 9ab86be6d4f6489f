//! Application Path Value Object
//!
//! The working copy location as typed by the user, normalized to
//! forward slashes with a trailing separator, and checked to be an
//! existing directory holding a `.git` directory.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Name of the version-control metadata directory inside a working copy
pub const GIT_DIR: &str = ".git";

/// Why a candidate application path was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathRejection {
    #[error("Directory must not be empty! Use dot (.) for current directory.")]
    Empty,

    #[error("Could not validate directory {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("Not a valid directory: {path}")]
    NotADirectory { path: String },

    #[error("The directory {path} is missing a git repository, you must initialize it first")]
    NotARepository { path: String },
}

/// A normalized, validated working copy path.
///
/// The stored string is exactly what gets persisted as `app-path`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppPath(String);

impl AppPath {
    /// Normalize without touching the file system.
    ///
    /// Backslashes become forward slashes and a trailing `/` is enforced.
    /// Empty input is rejected.
    pub fn normalize(input: &str) -> Result<Self, PathRejection> {
        if input.is_empty() {
            return Err(PathRejection::Empty);
        }

        let mut normalized = input.replace('\\', "/");
        if !normalized.ends_with('/') {
            normalized.push('/');
        }

        Ok(Self(normalized))
    }

    /// Wrap an already persisted value without re-normalizing it.
    pub fn from_persisted(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve against `base` when relative.
    pub fn resolve(&self, base: &Path) -> PathBuf {
        let path = Path::new(&self.0);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base.join(path)
        }
    }
}

impl fmt::Display for AppPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize and validate a wizard answer against the file system.
///
/// Relative inputs are resolved against `base` (the invocation directory).
pub fn validate_app_path(input: &str, base: &Path) -> Result<AppPath, PathRejection> {
    let app_path = AppPath::normalize(input)?;
    // components() drops the trailing separator so files stat as files
    let resolved: PathBuf = app_path.resolve(base).components().collect();

    let metadata = std::fs::metadata(&resolved).map_err(|e| PathRejection::Unreadable {
        path: app_path.to_string(),
        reason: e.to_string(),
    })?;
    if !metadata.is_dir() {
        return Err(PathRejection::NotADirectory {
            path: app_path.to_string(),
        });
    }

    let has_git = std::fs::metadata(resolved.join(GIT_DIR))
        .map(|m| m.is_dir())
        .unwrap_or(false);
    if !has_git {
        return Err(PathRejection::NotARepository {
            path: app_path.to_string(),
        });
    }

    Ok(app_path)
}
