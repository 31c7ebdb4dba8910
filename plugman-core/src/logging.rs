//! Logging initialization.
//!
//! Diagnostics go to stderr through `tracing`, filtered by the `PLUGMAN_LOG`
//! environment variable. User-facing output stays on the macros in
//! `output_macros` and is never routed through the subscriber.

use tracing_subscriber::EnvFilter;

/// Environment variable controlling the diagnostic filter.
pub const LOG_ENV_VAR: &str = "PLUGMAN_LOG";

/// Installs the global stderr subscriber.
///
/// `debug` forces the filter to `debug` regardless of the environment.
/// Repeated calls are harmless; later ones keep the first subscriber.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
