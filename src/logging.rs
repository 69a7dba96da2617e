//! Diagnostic logging setup

use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the log filter; `RUST_LOG` is used when unset.
pub const LOG_ENV: &str = "DIRTREE_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install a stderr subscriber so stdout carries only tree lines.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
