//! Workflow Event Port
//!
//! Observable interface for the deploy workflow so the binary can render
//! step lines and warnings without the library printing anything.

/// Event emitted while the workflow runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowEvent {
    /// A tracked step began
    StepStarted {
        index: usize,
        limit: u32,
        description: String,
    },

    /// Something non-fatal worth showing
    Warning { message: String, detail: String },

    /// The deploy finished and the progress file was handled
    Finished { steps: usize },

    /// The configuration file was rewritten at the end of a run
    ConfigUpdated { step_count: u32, auto_run: bool },
}

/// Trait for receiving workflow events
pub trait WorkflowEventSink {
    fn on_event(&self, event: WorkflowEvent);
}

/// Silent sink
pub struct NoopEventSink;

impl WorkflowEventSink for NoopEventSink {
    fn on_event(&self, _event: WorkflowEvent) {}
}

impl<T: WorkflowEventSink + ?Sized> WorkflowEventSink for &T {
    fn on_event(&self, event: WorkflowEvent) {
        (**self).on_event(event)
    }
}
