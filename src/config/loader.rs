//! Configuration loading and persistence

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::error::Category;

use crate::error::{DeployError, DeployResult};

use super::types::DeployConfig;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        Ok(())
    }
}

/// Whether `path` exists and is a regular file.
pub fn exists(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|m| m.is_file())
        .unwrap_or(false)
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// Unreadable files and malformed JSON are `ConfigMissingOrUnreadable`;
/// well-formed JSON with a missing or mistyped field is `ConfigInvalid`.
pub fn load_with_warnings(path: &Path) -> DeployResult<(DeployConfig, Vec<ConfigWarning>)> {
    let content =
        fs::read_to_string(path).map_err(|e| DeployError::ConfigMissingOrUnreadable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let mut deserializer = serde_json::Deserializer::from_str(&content);

    let parsed: Result<DeployConfig, serde_json::Error> =
        serde_ignored::deserialize(&mut deserializer, |p| {
            unknown_paths.push(p.to_string());
        })
        .and_then(|config| deserializer.end().map(|()| config));

    let config = parsed.map_err(|e| classify_parse_error(path, e))?;

    let warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .map(|key| ConfigWarning {
            line: find_line_number(&content, &key),
            suggestion: suggest_key(&key),
            file: path.to_path_buf(),
            key,
        })
        .collect();

    for w in &warnings {
        tracing::warn!(key = %w.key, file = %w.file.display(), "unknown config key");
    }

    Ok((config, warnings))
}

fn classify_parse_error(path: &Path, err: serde_json::Error) -> DeployError {
    match err.classify() {
        Category::Data => DeployError::ConfigInvalid {
            path: path.to_path_buf(),
            message: err.to_string(),
        },
        Category::Io | Category::Syntax | Category::Eof => DeployError::ConfigMissingOrUnreadable {
            path: path.to_path_buf(),
            message: err.to_string(),
        },
    }
}

/// Render the record as tab-indented JSON with a trailing newline.
pub fn to_pretty_json(config: &DeployConfig) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    config.serialize(&mut serializer)?;
    buf.push(b'\n');
    // serde_json only emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write the record next to its final location, then rename over it.
pub fn save(path: &Path, config: &DeployConfig) -> DeployResult<()> {
    let write_failed = |source: std::io::Error| DeployError::ConfigWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let content = to_pretty_json(config).map_err(|e| write_failed(e.into()))?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_failed)?;
    tmp.write_all(content.as_bytes()).map_err(write_failed)?;
    tmp.as_file().sync_all().map_err(write_failed)?;
    tmp.persist(path).map_err(|e| write_failed(e.error))?;

    tracing::debug!(path = %path.display(), "configuration saved");
    Ok(())
}

/// Keys a `.deploy-config` may contain
const KNOWN_KEYS: &[&str] = &["app-name", "app-path", "auto-run", "step-count", "branch"];

/// Typos further than this from every known key get no suggestion
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// 1-based line of the first `"key"` occurrence.
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    let quoted = format!("\"{key}\"");
    content
        .lines()
        .position(|line| line.contains(&quoted))
        .map(|index| index + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|known| (edit_distance(unknown, known), *known))
        .min()
        .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
        .map(|(_, known)| known.to_string())
}

/// Levenshtein distance over chars, keeping a single row.
fn edit_distance(from: &str, to: &str) -> usize {
    let to: Vec<char> = to.chars().collect();
    let mut row: Vec<usize> = (0..=to.len()).collect();

    for (i, a) in from.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, b) in to.iter().enumerate() {
            let substitution = diagonal + usize::from(a != *b);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[to.len()]
}
