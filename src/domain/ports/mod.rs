//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod prompter;
pub mod workflow_events;

pub use command_runner::{CommandOutput, CommandRunner, CommandSpec};
pub use prompter::{is_affirmative, Prompter};
pub use workflow_events::{NoopEventSink, WorkflowEvent, WorkflowEventSink};
