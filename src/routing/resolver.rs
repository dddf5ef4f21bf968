//! Closest-route resolution.
//!
//! # Responsibilities
//! - Serve repeated calls from the LRU cache
//! - Filter unsafe and excluded candidates
//! - Short-circuit on an exact (normalized) match
//! - Pick the closest candidate within its ceiling, first one wins ties
//! - Notify the redirect observer on non-exact matches
//!
//! # Design Decisions
//! - Synchronous; the cache lock is never held while scanning
//! - Candidates are scanned in input order and never reordered or deduplicated
//! - Counters are atomics so stats can be read while other threads resolve

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::distance::levenshtein_chars;
use crate::observability::metrics;
use crate::routing::cache::{CacheKey, MatchCache, MatchOutcome, DEFAULT_CACHE_CAPACITY};
use crate::routing::normalize::normalize_path;
use crate::routing::options::{MatchOptions, ResolveError};
use crate::routing::safety::check_route;

/// Snapshot of resolver activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverStats {
    pub cache_hits: u64,
    pub cache_misses: u64,
    /// Edit-distance engine invocations.
    pub distance_computations: u64,
    /// Candidates skipped by the safety filter.
    pub unsafe_candidates: u64,
    pub cached_entries: usize,
    pub cache_capacity: usize,
}

#[derive(Debug, Default)]
struct Counters {
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
    distance_computations: AtomicU64,
    unsafe_candidates: AtomicU64,
}

/// Resolves paths to the closest candidate route.
///
/// Each resolver owns its own cache, so independent resolvers never see
/// each other's results.
pub struct Resolver {
    cache: Mutex<MatchCache>,
    counters: Counters,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    /// Create a resolver with the default cache capacity (500 entries).
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            cache: Mutex::new(MatchCache::new(capacity)),
            counters: Counters::default(),
        }
    }

    /// Find the closest candidate route for `current_path`.
    ///
    /// Returns the candidate in its original form, or `None` when no
    /// candidate lies within its ceiling.
    ///
    /// ```
    /// use route_fuzz::{MatchOptions, Resolver};
    ///
    /// let resolver = Resolver::new();
    /// let routes = ["/about", "/contact", "/products/shoes", "/blog"];
    ///
    /// let found = resolver.resolve("/abuot", &routes, &MatchOptions::default()).unwrap();
    /// assert_eq!(found.as_deref(), Some("/about"));
    /// ```
    pub fn resolve<S: AsRef<str>>(
        &self,
        current_path: &str,
        candidates: &[S],
        options: &MatchOptions,
    ) -> Result<Option<String>, ResolveError> {
        self.resolve_outcome(current_path, candidates, options)
            .map(MatchOutcome::into_route)
    }

    /// Like [`Resolver::resolve`] but reports whether the match was exact and
    /// the distance of a fuzzy match.
    pub fn resolve_outcome<S: AsRef<str>>(
        &self,
        current_path: &str,
        candidates: &[S],
        options: &MatchOptions,
    ) -> Result<MatchOutcome, ResolveError> {
        options.validate()?;

        let key = CacheKey::new(current_path, candidates, options);
        let cached = self.cache.lock().get(&key);

        let outcome = match cached {
            Some(outcome) => {
                self.counters.cache_hits.fetch_add(1, Ordering::Relaxed);
                metrics::record_cache_hit();
                tracing::debug!(path = current_path, outcome = outcome.label(), "Route cache hit");
                outcome
            }
            None => {
                self.counters.cache_misses.fetch_add(1, Ordering::Relaxed);
                metrics::record_cache_miss();

                let outcome = self.scan(current_path, candidates, options);

                let mut cache = self.cache.lock();
                cache.insert(key, outcome.clone());
                metrics::record_cache_size(cache.len());
                outcome
            }
        };

        if let MatchOutcome::Fuzzy { route, .. } = &outcome {
            if let Some(observer) = &options.observer {
                observer.on_redirect(current_path, route);
            }
        }
        metrics::record_resolution(outcome.label());

        Ok(outcome)
    }

    /// Current counters and cache occupancy.
    pub fn stats(&self) -> ResolverStats {
        let cache = self.cache.lock();
        ResolverStats {
            cache_hits: self.counters.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.counters.cache_misses.load(Ordering::Relaxed),
            distance_computations: self.counters.distance_computations.load(Ordering::Relaxed),
            unsafe_candidates: self.counters.unsafe_candidates.load(Ordering::Relaxed),
            cached_entries: cache.len(),
            cache_capacity: cache.capacity(),
        }
    }

    /// Drop every cached outcome. Counters are kept.
    pub fn clear_cache(&self) {
        let mut cache = self.cache.lock();
        cache.clear();
        metrics::record_cache_size(0);
    }

    fn scan<S: AsRef<str>>(
        &self,
        current_path: &str,
        candidates: &[S],
        options: &MatchOptions,
    ) -> MatchOutcome {
        let current = normalize_path(current_path);
        let current_chars: Vec<char> = current.chars().collect();

        let mut best: Option<(usize, &str)> = None;

        for candidate in candidates {
            let candidate = candidate.as_ref();

            if let Err(reason) = check_route(candidate) {
                self.counters.unsafe_candidates.fetch_add(1, Ordering::Relaxed);
                metrics::record_unsafe_candidate(reason.label());
                tracing::warn!(route = candidate, %reason, "Skipping unsafe candidate route");
                continue;
            }

            if options.excludes(candidate) {
                tracing::trace!(route = candidate, "Candidate excluded");
                continue;
            }

            let normalized = normalize_path(candidate);
            if normalized == current {
                tracing::debug!(path = current_path, route = candidate, "Exact route match");
                return MatchOutcome::Exact(candidate.to_string());
            }

            let candidate_chars: Vec<char> = normalized.chars().collect();
            let distance = levenshtein_chars(&current_chars, &candidate_chars);
            self.counters.distance_computations.fetch_add(1, Ordering::Relaxed);
            metrics::record_distance_computation();

            let ceiling = options.ceiling(candidate_chars.len());
            if distance > ceiling {
                continue;
            }

            // Strictly less: earlier candidates win ties
            if best.map_or(true, |(best_distance, _)| distance < best_distance) {
                best = Some((distance, candidate));
            }
        }

        match best {
            Some((distance, route)) => {
                tracing::debug!(path = current_path, route, distance, "Fuzzy route match");
                MatchOutcome::Fuzzy {
                    route: route.to_string(),
                    distance,
                }
            }
            None => {
                tracing::debug!(path = current_path, candidates = candidates.len(), "No route within threshold");
                MatchOutcome::NoMatch
            }
        }
    }
}
