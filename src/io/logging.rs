//! Tracing subscriber installation for the command-line binary

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directive for a verbosity level
pub const fn default_directive(verbosity: u8, quiet: bool) -> &'static str {
    match (quiet, verbosity) {
        (true, _) => "allrgb=warn",
        (false, 0) => "allrgb=info",
        (false, 1) => "allrgb=debug",
        (false, _) => "allrgb=trace",
    }
}

/// Install the global subscriber, writing to stderr
///
/// `RUST_LOG` takes precedence over the verbosity flags. Returns false if a
/// subscriber was already installed.
pub fn init_logging(verbosity: u8, quiet: bool) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directive(verbosity, quiet).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().without_time().with_writer(std::io::stderr))
        .try_init()
        .is_ok()
}
