use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

/// Initializes logging. Call once at startup.
///
/// - Level: INFO by default, or overridden by the RUST_LOG env var.
/// - Events go to stderr so the slip output on stdout stays clean.
/// - Colored when stderr is a terminal, plain when piped.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}
