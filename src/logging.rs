//! Diagnostic tracing for the `pathmod` binary.
//!
//! Reads `RUST_LOG`, defaulting to `warn`. Output goes to stderr so it never
//! mixes with the JSON document written to stdout.
//!
//! ```bash
//! RUST_LOG=pathmod=debug pathmod apply 'items id=b' --delete --input '{"items":[{"id":"b"}]}'
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Call once, at startup.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
