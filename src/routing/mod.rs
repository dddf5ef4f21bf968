//! Route resolution subsystem.
//!
//! # Data Flow
//! ```text
//! resolve(current_path, candidates, options)
//!     → cache.rs (lookup by call signature)
//!     → normalize.rs (decode, slash and case rules)
//!     → safety.rs + exclusion terms (skip candidates)
//!     → distance engine (per surviving candidate)
//!     → resolver.rs (ceiling, closest wins, first wins ties)
//!     → cache.rs (store) → observer.rs (notify on fuzzy match)
//!     → Return: matched route or None
//!
//! Route tree (from config or a router):
//!     → flatten.rs → flat candidate list
//! ```
//!
//! # Design Decisions
//! - Parameterised segments (`/users/:id`) are opaque literal text
//! - Resolution never navigates; callers act on the result
//! - Deterministic: same input always resolves to the same route

pub mod cache;
pub mod flatten;
pub mod normalize;
pub mod observer;
pub mod options;
pub mod resolver;
pub mod safety;

pub use cache::{MatchOutcome, DEFAULT_CACHE_CAPACITY};
pub use flatten::{flatten_routes, RouteNode};
pub use normalize::{decode_uri, normalize_path};
pub use observer::{LoggingObserver, RedirectObserver};
pub use options::{MatchOptions, ResolveError};
pub use resolver::{Resolver, ResolverStats};
pub use safety::{check_route, is_safe_route, UnsafeRoute};
