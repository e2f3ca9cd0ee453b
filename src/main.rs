use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod comment;
mod config;
mod error;
mod github;
mod output;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("pr_digest=debug")
    } else {
        EnvFilter::new("pr_digest=warn")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    cli::comments::execute(cli)
}
