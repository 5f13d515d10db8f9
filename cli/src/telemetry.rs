//! Tracing bootstrap for the command line.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the global subscriber. Honors `RUST_LOG`, defaulting to `info`.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer().with_target(false);
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
