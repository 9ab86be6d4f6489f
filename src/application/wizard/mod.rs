//! First-run configuration wizard

mod use_case;

pub use use_case::{ConfigureWizard, CONTINUE_QUESTION};
