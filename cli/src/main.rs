//! ecs-agent-updater - keep ECS container agents at the target version

#![cfg_attr(test, allow(clippy::expect_used))]

use clap::Parser;

use ecs_agent_updater::cli::Cli;
use ecs_agent_updater::logging::{LOG_ENV, initialize_logging};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    initialize_logging(LOG_ENV, cli.verbose);
    if let Err(e) = cli.run().await {
        tracing::debug!(error = ?e, "run aborted");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
