//! Diagnostic logging setup.
//!
//! User-facing output is written directly by the renderer. Tracing carries
//! the extra detail (per-tick samples, shutdown reasons) and stays quiet
//! unless `THERMON_LOG` asks for more.

use std::io;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter, e.g. `debug`.
pub const LOG_ENV: &str = "THERMON_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Installs the global stderr subscriber. Later calls are no-ops.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
