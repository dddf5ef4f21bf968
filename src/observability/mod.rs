//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing, redirect and config produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, gauges)
//!
//! Consumers:
//!     → stderr (pretty or JSON lines)
//!     → whatever metrics recorder the host installs
//! ```
//!
//! # Design Decisions
//! - Structured fields (path, route, distance) instead of formatted strings
//! - Metrics are cheap no-ops until a recorder is installed
//! - Library code only emits; the binary decides where output goes

pub mod logging;
pub mod metrics;
