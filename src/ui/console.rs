use redeploy::domain::ports::{WorkflowEvent, WorkflowEventSink};

use crate::ui::context::UiContext;
use crate::ui::views::deploy::{
    render_config_updated, render_finished, render_step_line, render_warning,
};

/// Renders workflow events as terminal lines.
pub struct ConsoleEventSink {
    ui: UiContext,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext) -> Self {
        Self { ui }
    }

    pub fn render(&self, event: &WorkflowEvent) -> String {
        let (color, unicode) = (self.ui.color, self.ui.unicode);
        match event {
            WorkflowEvent::StepStarted {
                index,
                limit,
                description,
            } => render_step_line(*index, *limit, description, color, unicode),
            WorkflowEvent::Warning { message, detail } => {
                render_warning(message, detail, color, unicode)
            }
            WorkflowEvent::Finished { steps } => render_finished(*steps, color, unicode),
            WorkflowEvent::ConfigUpdated { step_count, .. } => {
                render_config_updated(*step_count, color, unicode)
            }
        }
    }
}

impl WorkflowEventSink for ConsoleEventSink {
    fn on_event(&self, event: WorkflowEvent) {
        let line = self.render(&event);
        match event {
            WorkflowEvent::Warning { .. } => eprintln!("{line}"),
            _ => println!("{line}"),
        }
    }
}
