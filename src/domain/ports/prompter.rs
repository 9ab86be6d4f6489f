//! Prompter Port
//!
//! Question/answer capability used by the configuration wizard and the
//! first-run confirmation. Implementations can be a terminal UI, plain
//! line-based stdin/stdout, or scripted answers in tests.

use crate::error::DeployResult;

pub trait Prompter {
    /// Ask a free-text question. An empty answer yields `default`.
    fn ask(&mut self, question: &str, default: &str) -> DeployResult<String>;

    /// Like `ask`, but an empty answer comes back empty.
    ///
    /// `suggestion` is only shown next to the question.
    fn ask_verbatim(&mut self, question: &str, suggestion: &str) -> DeployResult<String>;

    /// Ask a yes/no question that defaults to "no".
    fn confirm(&mut self, question: &str) -> DeployResult<bool>;

    /// Show a line of text to the user (diagnostics between prompts).
    fn say(&mut self, message: &str) -> DeployResult<()>;
}

/// Whether a typed answer counts as "yes" (`y` or `yes`, any case).
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
