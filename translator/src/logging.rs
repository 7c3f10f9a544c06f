//! Logging setup for the command-line binary.
//!
//! Configure via the RUST_LOG environment variable (or a `.env` file):
//! - unset - warnings and errors only, a clean run prints nothing
//! - `RUST_LOG=info` - one summary line per stage
//! - `RUST_LOG=debug` - also dumps both mappings and skipped mapping lines

use tracing_subscriber::{fmt, EnvFilter};

/// Install the stderr subscriber. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
