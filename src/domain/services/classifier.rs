//! Tool Output Classifier
//!
//! `git` and `gcloud` are judged by what they print, not only by their
//! exit status. Each check has a named pattern set so the heuristics can
//! be tested without spawning anything.

/// Substring patterns for one kind of tool answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputPatterns {
    /// Tool name, used in diagnostics
    pub tool: &'static str,
    /// Any of these in the output means failure
    pub failure_markers: &'static [&'static str],
    /// This must appear in the output for success, when set
    pub success_marker: Option<&'static str>,
    /// Match markers ignoring ASCII case
    pub case_insensitive: bool,
}

/// `git --version`
pub const GIT_VERSION: OutputPatterns = OutputPatterns {
    tool: "git",
    failure_markers: &["error", "could not", "is not"],
    success_marker: None,
    case_insensitive: true,
};

/// `gcloud app versions list --format=text`
pub const GCLOUD_VERSIONS: OutputPatterns = OutputPatterns {
    tool: "gcloud",
    failure_markers: &["ERROR"],
    success_marker: Some("environment.name"),
    case_insensitive: false,
};

/// Shell answers that mean "no such program", wherever they appear
const NOT_INSTALLED_MARKERS: &[&str] = &[
    "command not found",
    "is not recognized as an internal or external command",
];

/// Prefixes `sh` puts before its own `<name>: not found` diagnostic
const SHELL_PREFIXES: &[&str] = &["sh:", "/bin/sh:", "dash:"];

/// `sh` exit status for an unknown command
const SH_COMMAND_NOT_FOUND: i32 = 127;
/// `cmd.exe` exit status for an unknown command
const CMD_COMMAND_NOT_FOUND: i32 = 9009;

/// Quiet `git fetch` prints at most this many characters (stdout + "\n" + stderr)
pub const FETCH_QUIET_LIMIT: usize = 4;
/// Quiet `gcloud app deploy` prints at most this many characters
pub const DEPLOY_QUIET_LIMIT: usize = 3;

/// Outcome of classifying a tool's output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Ok,
    /// Output contained a failure marker
    FailureMarker(&'static str),
    /// Output lacked the required success marker
    MissingSuccessMarker(&'static str),
}

/// Classify tool output against a pattern set.
///
/// Failure markers win over the success marker.
pub fn classify(output: &str, patterns: &OutputPatterns) -> Verdict {
    let haystack = if patterns.case_insensitive {
        output.to_lowercase()
    } else {
        output.to_string()
    };

    for marker in patterns.failure_markers {
        let needle = if patterns.case_insensitive {
            marker.to_lowercase()
        } else {
            marker.to_string()
        };
        if haystack.contains(&needle) {
            return Verdict::FailureMarker(marker);
        }
    }

    if let Some(marker) = patterns.success_marker {
        if !output.trim().contains(marker) {
            return Verdict::MissingSuccessMarker(marker);
        }
    }

    Verdict::Ok
}

/// Whether output stays within the length a quiet run may print.
pub fn is_quiet(output: &str, max_len: usize) -> bool {
    output.len() <= max_len
}

/// Whether a failed command looks like the program itself is missing.
pub fn looks_not_installed(exit_code: Option<i32>, stderr: &str) -> bool {
    if matches!(
        exit_code,
        Some(SH_COMMAND_NOT_FOUND) | Some(CMD_COMMAND_NOT_FOUND)
    ) {
        return true;
    }
    stderr.lines().any(|line| {
        let line = line.trim().to_lowercase();
        NOT_INSTALLED_MARKERS.iter().any(|m| line.contains(m))
            || (SHELL_PREFIXES.iter().any(|p| line.starts_with(p))
                && line.ends_with(": not found"))
    })
}
