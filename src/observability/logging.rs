//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Pick the output format (pretty or JSON)
//! - Honour `RUST_LOG` over the configured level
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - JSON format for machine consumption, pretty format for terminals
//! - Logs go to stderr so command output on stdout stays parseable

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::schema::LogFormat;

/// Parse a bare level name (`trace`, `debug`, `info`, `warn`, `error`,
/// `off`). Directive strings such as `route_fuzz=debug` are rejected;
/// those belong in `RUST_LOG`.
pub fn parse_level(level: &str) -> Option<LevelFilter> {
    if level.trim().is_empty() {
        return None;
    }
    level.trim().parse().ok()
}

/// Build the filter: `RUST_LOG` if set, otherwise `level` for this crate.
pub fn build_filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("route_fuzz={}", level.to_string().to_lowercase()))
    })
}

/// Install the global subscriber.
///
/// Fails if a global subscriber is already installed.
pub fn init(level: LevelFilter, format: LogFormat) -> Result<(), TryInitError> {
    let registry = tracing_subscriber::registry().with(build_filter(level));

    match format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    }
}
