//! Logging setup for the CLI

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter directive for the verbosity flag
#[must_use]
pub const fn filter_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Build the filter, letting `RUST_LOG` override the verbosity flag
#[must_use]
pub fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose)))
}

/// Install the global subscriber.
///
/// Logs go to stderr so that `--format json` keeps stdout clean.
pub fn setup_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(build_filter(verbose))
        .init();
}
