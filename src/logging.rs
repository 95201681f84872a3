//! Process-wide `tracing` subscriber setup.

use std::env::var;

use {tracing::info, tracing_subscriber::filter::EnvFilter};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "RUST_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

/// Installs a formatted `tracing` subscriber filtered by `RUST_LOG`.
///
/// Defaults to `info`. Calling this more than once, or after another
/// subscriber was installed, leaves the existing subscriber in place.
///
/// # Returns
///
/// `true` if this call installed the subscriber.
pub fn init_logging() -> bool {
    let (directive, env_filter) = resolve_filter(var(LOG_ENV).ok());

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        info!("Logger initialized with filter: {}", directive);
    }
    installed
}

/// Builds the filter for `raw`, falling back to `info` when it is missing
/// or does not parse. Returns the directive actually in effect.
fn resolve_filter(raw: Option<String>) -> (String, EnvFilter) {
    if let Some(directive) = raw
        && let Ok(env_filter) = EnvFilter::try_new(&directive)
    {
        return (directive, env_filter);
    }
    (
        DEFAULT_DIRECTIVE.to_string(),
        EnvFilter::new(DEFAULT_DIRECTIVE),
    )
}
