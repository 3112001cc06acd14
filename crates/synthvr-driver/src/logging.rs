//! Subscriber bootstrap for embedders that have no `tracing` subscriber of
//! their own.
//!
//! The driver itself only emits events. Hosts that already install a
//! subscriber should not call [`init_logging`].

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable that overrides the filter passed to [`init_logging`].
pub const LOG_ENV_VAR: &str = "SYNTHVR_LOG";

/// Filter directive for a `-v` count: 0 warn, 1 info, 2 debug, 3+ trace.
#[must_use]
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a global `fmt` subscriber writing to stderr.
///
/// `default_filter` is used unless [`LOG_ENV_VAR`] holds a valid filter.
/// Returns `false` if a global subscriber was already installed, in which
/// case nothing changes.
pub fn init_logging(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .is_ok()
}
