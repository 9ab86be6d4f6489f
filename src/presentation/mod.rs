//! Wiring between the binary and the use cases
//!
//! `cli` holds the argument struct; `factory` builds the wizard and the
//! workflow over the real shell runner and picks a prompter for the
//! current stdin/stdout.
//!
//! ```ignore
//! use redeploy::application::StatePaths;
//! use redeploy::domain::ports::NoopEventSink;
//! use redeploy::presentation::factory;
//!
//! let workflow = factory::create_deploy_workflow(StatePaths::in_dir("."), NoopEventSink);
//! let outcome = workflow.execute(factory::create_prompter(false).as_mut());
//! ```

pub mod cli;
pub mod factory;

pub use cli::Cli;
pub use factory::{create_configure_wizard, create_deploy_workflow, create_prompter};
