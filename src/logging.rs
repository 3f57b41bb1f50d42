//! Diagnostic logging setup.
//!
//! Command results go to stdout with `println!`. Diagnostics go through
//! `tracing` to stderr so shell wrappers can capture stdout alone.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Level used when `--verbose` is not given.
pub const DEFAULT_LEVEL: Level = Level::WARN;

/// Pick the base log level for the CLI flags.
pub fn log_level(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { DEFAULT_LEVEL }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` directives are honored on top of the level chosen by
/// [`log_level`]. Calling this more than once is a no-op.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::from_default_env().add_directive(log_level(verbose).into());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}
