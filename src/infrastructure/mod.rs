//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all process and terminal I/O.
//!
//! ## Structure
//!
//! - `process/` - Shell command runner
//! - `prompt/` - Terminal (dialoguer) and line-based prompters

pub mod process;
pub mod prompt;

// Re-export for convenience
pub use process::ShellRunner;
pub use prompt::{LinePrompter, TerminalPrompter};
