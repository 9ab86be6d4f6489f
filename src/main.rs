//! redeploy CLI
//!
//! Usage: redeploy [--configure]
//!
//! Without a `.deploy-config` in the current directory the configuration
//! wizard runs; otherwise the working copy is synced and deployed.

use std::process::ExitCode;

use clap::Parser;
use redeploy::presentation::Cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod ui;

use ui::context::UiContext;

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let ui = UiContext::new();

    match commands::run(&cli, &ui) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error::print_error(&err, &ui);
            ExitCode::FAILURE
        }
    }
}

/// `REDEPLOY_LOG` wins over `RUST_LOG`; quiet by default.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("REDEPLOY_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
