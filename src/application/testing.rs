//! Scripted ports for use case tests

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::domain::ports::{
    CommandOutput, CommandRunner, CommandSpec, Prompter, WorkflowEvent, WorkflowEventSink,
};
use crate::error::{DeployError, DeployResult};

#[derive(Debug, Clone)]
pub enum Reply {
    Output(&'static str, &'static str),
    Fail(i32, &'static str),
}

/// Answers commands by prefix; unknown commands succeed silently.
pub struct ScriptedRunner {
    replies: Vec<(&'static str, Reply)>,
    pub calls: RefCell<Vec<CommandSpec>>,
}

impl ScriptedRunner {
    /// `git` and `gcloud` installed and answering normally.
    pub fn healthy() -> Self {
        Self {
            replies: vec![
                ("git --version", Reply::Output("git version 2.43.0\n", "")),
                (
                    "gcloud app versions list",
                    Reply::Output("environment.name: STANDARD\nid: 20240101t000000\n", ""),
                ),
            ],
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Override the reply for commands starting with `prefix`.
    pub fn on(mut self, prefix: &'static str, reply: Reply) -> Self {
        self.replies.insert(0, (prefix, reply));
        self
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|s| s.command.clone()).collect()
    }

    pub fn ran(&self, prefix: &str) -> bool {
        self.calls
            .borrow()
            .iter()
            .any(|s| s.command.starts_with(prefix))
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, spec: &CommandSpec) -> DeployResult<CommandOutput> {
        self.calls.borrow_mut().push(spec.clone());
        let reply = self
            .replies
            .iter()
            .find(|(prefix, _)| spec.command.starts_with(prefix))
            .map(|(_, reply)| reply.clone())
            .unwrap_or(Reply::Output("", ""));

        match reply {
            Reply::Output(stdout, stderr) => Ok(CommandOutput::new(stdout, stderr)),
            Reply::Fail(code, stderr) => Err(DeployError::CommandFailed {
                command: spec.command.clone(),
                exit_code: Some(code),
                stdout: String::new(),
                stderr: stderr.to_string(),
            }),
        }
    }
}

/// Pre-recorded answers; runs out like a closed stdin.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    confirms: VecDeque<bool>,
    pub asked: Vec<String>,
    pub confirmed: Vec<String>,
    pub said: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, answer: &str) -> Self {
        self.answers.push_back(answer.to_string());
        self
    }

    pub fn confirm_with(mut self, yes: bool) -> Self {
        self.confirms.push_back(yes);
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str, default: &str) -> DeployResult<String> {
        self.asked.push(question.to_string());
        match self.answers.pop_front() {
            Some(answer) if answer.is_empty() => Ok(default.to_string()),
            Some(answer) => Ok(answer),
            None => Err(DeployError::Prompt("no more answers".to_string())),
        }
    }

    fn ask_verbatim(&mut self, question: &str, _suggestion: &str) -> DeployResult<String> {
        self.asked.push(question.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| DeployError::Prompt("no more answers".to_string()))
    }

    fn confirm(&mut self, question: &str) -> DeployResult<bool> {
        self.confirmed.push(question.to_string());
        Ok(self.confirms.pop_front().unwrap_or(false))
    }

    fn say(&mut self, message: &str) -> DeployResult<()> {
        self.said.push(message.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub events: RefCell<Vec<WorkflowEvent>>,
}

impl RecordingSink {
    pub fn warnings(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                WorkflowEvent::Warning { message, .. } => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn step_descriptions(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                WorkflowEvent::StepStarted { description, .. } => Some(description.clone()),
                _ => None,
            })
            .collect()
    }
}

impl WorkflowEventSink for RecordingSink {
    fn on_event(&self, event: WorkflowEvent) {
        self.events.borrow_mut().push(event);
    }
}
