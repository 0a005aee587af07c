//! Diagnostic logging for the CLI.
//!
//! Events from `notes-core` go to stderr through a `tracing-subscriber`
//! fmt layer. The filter comes from `NOTES_LOG` (any `EnvFilter`
//! directive), then the config file's `[log] level`, then `warn`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "NOTES_LOG";

const DEFAULT_LEVEL: &str = "warn";

/// Resolve the filter directive string.
pub fn filter_directive(env_value: Option<String>, config_level: Option<&str>) -> String {
    env_value
        .filter(|v| !v.trim().is_empty())
        .or_else(|| config_level.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string())
}

/// Install the global subscriber. Calling this twice, or with a bad
/// directive, falls back quietly instead of failing the command.
pub fn init_logging(config_level: Option<&str>) {
    let directive = filter_directive(std::env::var(LOG_ENV).ok(), config_level);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
