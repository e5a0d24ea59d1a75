//! Logging setup shared by the demo binaries.
//!
//! Logs go to stderr so stdout carries only demo output. The filter
//! defaults to `warn` and can be overridden with `RUST_LOG`.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Install the global `tracing` subscriber.
///
/// `verbosity` raises the default level: 1 = info, 2 = debug, 3+ = trace.
/// Returns `false` if a global subscriber was already installed, in which
/// case nothing changes.
pub fn init(verbosity: u8) -> bool {
    let level = match verbosity {
        0 => DEFAULT_FILTER,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(level, "logging initialised");
    }
    installed
}
