use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable holding `tracing` filter directives.
pub const LOG_ENV: &str = "ECS_AGENT_UPDATER_LOG";

/// Initializes `tracing` logging to stderr with directives from the
/// environment variable given in `env`.
///
/// Without directives the level is `warn`, or `debug` when `verbose` is set.
/// Stdout stays reserved for the per-instance report.
pub fn initialize_logging(env: &str, verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(env, verbose))
        .with_writer(std::io::stderr)
        .init();
}

fn env_filter(env: &str, verbose: bool) -> EnvFilter {
    let default = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    EnvFilter::builder()
        .with_default_directive(default.into())
        .with_env_var(env)
        .from_env_lossy()
}
