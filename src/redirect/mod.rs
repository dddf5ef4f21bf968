//! Caller-side redirect helpers.
//!
//! # Data Flow
//! ```text
//! location ("/abuot?ref=mail#team")
//!     → planner.rs (split pathname / suffix, resolve pathname)
//!     → Redirect { from, to, target: to + suffix }
//!     → guard.rs (caller checks its loop budget)
//!     → caller navigates (replace current history entry)
//! ```
//!
//! # Design Decisions
//! - Nothing here is called by the resolver itself
//! - Query strings and fragments never take part in matching
//! - Loop protection is opt-in; its policy belongs to the host

pub mod guard;
pub mod planner;

pub use guard::RedirectGuard;
pub use planner::{plan_redirect, split_location, Redirect};
