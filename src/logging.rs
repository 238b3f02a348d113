//! Diagnostic logging through `tracing`.
//!
//! Logs go to stderr so stdout only ever carries the report.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Builds the filter: `RUST_LOG` wins, then `level`, then [`DEFAULT_LOG_LEVEL`].
fn build_filter(level: Option<&str>) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    match level {
        Some(level) => EnvFilter::try_new(level).unwrap_or_else(|e| {
            eprintln!(
                "⚠️  Warning: Invalid log level '{}' ({}); using '{}'.",
                level, e, DEFAULT_LOG_LEVEL
            );
            EnvFilter::new(DEFAULT_LOG_LEVEL)
        }),
        None => EnvFilter::new(DEFAULT_LOG_LEVEL),
    }
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init_logging(level: Option<&str>) {
    let fmt_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(build_filter(level))
        .with(fmt_layer)
        .try_init();
}
