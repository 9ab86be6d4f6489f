//! Terminal Prompter
//!
//! dialoguer-backed prompts for interactive terminals.

use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Confirm, Input};

use crate::domain::ports::Prompter;
use crate::error::{DeployError, DeployResult};

pub struct TerminalPrompter {
    theme: Box<dyn Theme>,
}

impl TerminalPrompter {
    pub fn new(color: bool) -> Self {
        let theme: Box<dyn Theme> = if color {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        };
        Self { theme }
    }
}

fn prompt_error(err: dialoguer::Error) -> DeployError {
    DeployError::Prompt(err.to_string())
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, question: &str, default: &str) -> DeployResult<String> {
        Input::<String>::with_theme(self.theme.as_ref())
            .with_prompt(question)
            .default(default.to_string())
            .interact_text()
            .map(|answer| answer.trim().to_string())
            .map_err(prompt_error)
    }

    fn ask_verbatim(&mut self, question: &str, suggestion: &str) -> DeployResult<String> {
        Input::<String>::with_theme(self.theme.as_ref())
            .with_prompt(format!("{question} [{suggestion}]"))
            .allow_empty(true)
            .interact_text()
            .map(|answer| answer.trim().to_string())
            .map_err(prompt_error)
    }

    fn confirm(&mut self, question: &str) -> DeployResult<bool> {
        Confirm::with_theme(self.theme.as_ref())
            .with_prompt(question)
            .default(false)
            .interact()
            .map_err(prompt_error)
    }

    fn say(&mut self, message: &str) -> DeployResult<()> {
        println!("{message}");
        Ok(())
    }
}
