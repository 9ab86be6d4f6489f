//! CLI Argument Parsing
//!
//! One optional flag. Without it the tool deploys, or configures itself
//! when no `.deploy-config` exists yet.

use clap::Parser;

/// redeploy - sync a git working copy and deploy it to Google App Engine
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(name = "redeploy")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Run 'redeploy' in the directory that should hold .deploy-config. The first run starts the configuration wizard."
)]
pub struct Cli {
    /// Run the configuration wizard even if a configuration exists
    #[arg(long)]
    pub configure: bool,
}
