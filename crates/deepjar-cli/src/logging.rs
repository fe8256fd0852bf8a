//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with the tree on stdout. `RUST_LOG`
//! takes precedence over the `-v` count when set.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Default filter directive for a given `-v` count.
fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "deepjar=debug,deepjar_core=debug",
        _ => "deepjar=trace,deepjar_core=trace",
    }
}

/// Initializes the global subscriber.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .compact(),
    );

    // Already set only happens in tests; keep the first one.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
