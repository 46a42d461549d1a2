//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::Parser;

use crate::app::{AppContext, OutputFlags};
use crate::commands;
use crate::domain::config::DEFAULT_PROFILE;
use crate::domain::{UpdaterConfig, UpdaterConfigInput};

/// Keep the ECS container agent on every cluster instance at the target version
#[derive(Parser, Debug)]
#[command(name = "ecs-agent-updater", version)]
pub struct Cli {
    /// AWS region of the cluster
    #[arg(short, long)]
    pub region: String,

    /// Cluster name
    #[arg(short, long)]
    pub cluster: String,

    /// AWS shared credentials file
    #[arg(short, long, value_name = "PATH")]
    pub file: String,

    /// Profile to use in the credentials file
    #[arg(short, long, default_value = DEFAULT_PROFILE)]
    pub profile: String,

    /// Target agent version; defaults to the latest upstream release
    #[arg(long, value_name = "VERSION")]
    pub agent_version: Option<String>,

    /// Report outdated instances without updating them
    #[arg(long)]
    pub check: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    pub no_color: bool,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Validate the parsed flags into an [`UpdaterConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if a flag value is blank or malformed.
    pub fn config(&self) -> Result<UpdaterConfig> {
        Ok(UpdaterConfig::new(&UpdaterConfigInput {
            region: &self.region,
            cluster: &self.cluster,
            credentials_file: &self.file,
            profile: &self.profile,
            agent_version: self.agent_version.as_deref(),
            check_only: self.check,
        })?)
    }

    /// Execute the reconcile run.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or any remote call fails.
    pub async fn run(self) -> Result<()> {
        let config = self.config()?;
        let app = AppContext::new(
            &OutputFlags {
                no_color: self.no_color,
            },
            config,
        );
        commands::reconcile::run(&app).await
    }
}
