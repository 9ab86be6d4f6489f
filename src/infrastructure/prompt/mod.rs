//! Prompter implementations

mod line;
mod terminal;

pub use line::LinePrompter;
pub use terminal::TerminalPrompter;
