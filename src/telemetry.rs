use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over `default_filter` when set. Records emitted through the
/// `log` facade (actix-web's request logger) are forwarded to the same
/// subscriber.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
