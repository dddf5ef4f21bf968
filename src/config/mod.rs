//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → FuzzConfig (validated, immutable)
//!     → MatchOptions / Resolver capacity / RedirectGuard
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Route trees are flattened at load time into the candidate list

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{CacheConfig, FuzzConfig, LogFormat, MatchingConfig, ObservabilityConfig, RedirectConfig};
pub use validation::{validate_config, ValidationError};
