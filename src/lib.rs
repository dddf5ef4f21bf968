//! Fuzzy route resolution library.
//!
//! Resolves a mistyped or restructured URL path to the closest known route
//! so a client-side router can redirect instead of showing a 404.

pub mod config;
pub mod distance;
pub mod observability;
pub mod redirect;
pub mod routing;

pub use config::schema::FuzzConfig;
pub use distance::levenshtein;
pub use redirect::{plan_redirect, Redirect, RedirectGuard};
pub use routing::{
    flatten_routes, is_safe_route, normalize_path, MatchOptions, MatchOutcome, RedirectObserver,
    ResolveError, Resolver, RouteNode,
};
