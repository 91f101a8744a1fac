//! Diagnostic logging setup
//!
//! Narration goes to the trace; this is only for diagnostics such as silently
//! dropped container values. Logs go to stderr and are filtered by the
//! `STACKTTY_LOG` environment variable (`warn` when unset).

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "STACKTTY_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber; later calls are ignored
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
