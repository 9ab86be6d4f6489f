//! Line-based Prompter
//!
//! Reads one answer per line. Used when stdin is not a terminal
//! (piped answers, CI) and by tests with in-memory buffers.

use std::io::{self, BufRead, Write};

use crate::domain::ports::{is_affirmative, Prompter};
use crate::error::{DeployError, DeployResult};

pub struct LinePrompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter over the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompter and return its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// `None` at end of input.
    fn read_answer(&mut self) -> DeployResult<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| DeployError::Prompt(e.to_string()))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn write_prompt(&mut self, prompt: &str) -> DeployResult<()> {
        write!(self.output, "{prompt}")
            .and_then(|()| self.output.flush())
            .map_err(|e| DeployError::Prompt(e.to_string()))
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, question: &str, default: &str) -> DeployResult<String> {
        self.write_prompt(&format!("{question} [{default}]: "))?;
        match self.read_answer()? {
            Some(answer) if answer.is_empty() => Ok(default.to_string()),
            Some(answer) => Ok(answer),
            None => Err(DeployError::Prompt("input closed before an answer was given".into())),
        }
    }

    fn ask_verbatim(&mut self, question: &str, suggestion: &str) -> DeployResult<String> {
        self.write_prompt(&format!("{question} [{suggestion}]: "))?;
        self.read_answer()?
            .ok_or_else(|| DeployError::Prompt("input closed before an answer was given".into()))
    }

    fn confirm(&mut self, question: &str) -> DeployResult<bool> {
        self.write_prompt(&format!("{question} (yes/[no]) "))?;
        Ok(self
            .read_answer()?
            .map(|answer| is_affirmative(&answer))
            .unwrap_or(false))
    }

    fn say(&mut self, message: &str) -> DeployResult<()> {
        writeln!(self.output, "{message}").map_err(|e| DeployError::Prompt(e.to_string()))
    }
}
