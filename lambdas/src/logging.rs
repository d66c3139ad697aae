//! Development-time tracing.
//!
//! Stdout carries exactly the demo transcript: thirteen text lines, or one
//! JSON array with `--format json`. Events from [`crate::demo`] (one `debug!`
//! per step, `trace!` inside the first zero-argument closure, `info!` at start
//! and finish) and from config loading go to stderr, so `RUST_LOG` never adds
//! or reorders a transcript line.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber. Call once, before the demo runs.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset, which silences every demo
/// event.
///
/// # Example
/// ```bash
/// RUST_LOG=lambdas=debug cargo run -- run
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
