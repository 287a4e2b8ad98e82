//! Tracing subscriber setup for the command line tool

use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr
///
/// `RUST_LOG` takes precedence. Otherwise the level is `warn`, or `debug`
/// when verbose output is requested.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    // A subscriber may already be installed (e.g. by an embedding program)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
