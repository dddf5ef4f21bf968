//! Metrics collection.
//!
//! # Metrics
//! - `route_fuzz_cache_hits_total` (counter)
//! - `route_fuzz_cache_misses_total` (counter)
//! - `route_fuzz_cache_entries` (gauge): current cache occupancy
//! - `route_fuzz_distance_computations_total` (counter): engine invocations
//! - `route_fuzz_unsafe_candidates_total` (counter): by rejection reason
//! - `route_fuzz_resolutions_total` (counter): by outcome (exact, fuzzy, no_match)
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations)
//! - Labels limited to small fixed sets, never paths

use metrics::{counter, gauge};

pub fn record_cache_hit() {
    counter!("route_fuzz_cache_hits_total").increment(1);
}

pub fn record_cache_miss() {
    counter!("route_fuzz_cache_misses_total").increment(1);
}

pub fn record_cache_size(entries: usize) {
    gauge!("route_fuzz_cache_entries").set(entries as f64);
}

pub fn record_distance_computation() {
    counter!("route_fuzz_distance_computations_total").increment(1);
}

pub fn record_unsafe_candidate(reason: &'static str) {
    counter!("route_fuzz_unsafe_candidates_total", "reason" => reason).increment(1);
}

pub fn record_resolution(outcome: &'static str) {
    counter!("route_fuzz_resolutions_total", "outcome" => outcome).increment(1);
}
