//! Edit-distance engine.
//!
//! # Data Flow
//! ```text
//! normalized current path, normalized candidate
//!     → levenshtein.rs (two-row dynamic programming)
//!     → usize distance
//! ```
//!
//! # Design Decisions
//! - Pure leaf: no logging, no metrics, no case folding
//! - Callers normalize both inputs before comparing
//! - Characters compared as Unicode scalar values

pub mod levenshtein;

pub use levenshtein::{levenshtein, levenshtein_chars};
