use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber.
///
/// Logs go to stderr so they never interleave with rendered output.
/// Default level: `warn`, `info` for SpiceRoute crates; override via RUST_LOG.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,spiceroute=info"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();

    tracing::debug!("Tracing initialized");
}
