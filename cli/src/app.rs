//! Application context — unified state passed to the command handler.
//!
//! Built once in `Cli::run()` from the validated configuration and the
//! output flags. Nothing here is global or mutable after construction.

use crate::domain::UpdaterConfig;
use crate::output::OutputContext;

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
}

/// Unified application context passed to the command handler.
pub struct AppContext {
    /// Terminal output context (colors, TTY detection).
    pub output: OutputContext,
    /// Validated configuration for this run.
    pub config: UpdaterConfig,
}

impl AppContext {
    /// Construct an `AppContext` from output flags and a validated configuration.
    #[must_use]
    pub fn new(flags: &OutputFlags, config: UpdaterConfig) -> Self {
        Self {
            output: OutputContext::new(flags.no_color),
            config,
        }
    }
}
