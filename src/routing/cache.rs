//! Bounded memoization of resolution outcomes.
//!
//! # Design Decisions
//! - Strict LRU: lookups refresh recency, inserts past capacity evict the
//!   least recently used entry
//! - Keyed on the whole call signature; the candidate list contributes its
//!   length and a content fingerprint so different lists of equal length
//!   never share an entry
//! - The observer is not part of the key

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

use lru::LruCache;

use crate::routing::options::MatchOptions;

/// Default number of cached outcomes per resolver.
pub const DEFAULT_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(500) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

/// Result of resolving one path against a candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// A candidate normalized to the current path. Holds the candidate in its
    /// original form.
    Exact(String),
    /// Closest candidate within its ceiling.
    Fuzzy { route: String, distance: usize },
    /// No candidate qualified.
    NoMatch,
}

impl MatchOutcome {
    /// The matched route, if any.
    pub fn route(&self) -> Option<&str> {
        match self {
            MatchOutcome::Exact(route) | MatchOutcome::Fuzzy { route, .. } => Some(route.as_str()),
            MatchOutcome::NoMatch => None,
        }
    }

    pub fn into_route(self) -> Option<String> {
        match self {
            MatchOutcome::Exact(route) | MatchOutcome::Fuzzy { route, .. } => Some(route),
            MatchOutcome::NoMatch => None,
        }
    }

    /// Short label for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            MatchOutcome::Exact(_) => "exact",
            MatchOutcome::Fuzzy { .. } => "fuzzy",
            MatchOutcome::NoMatch => "no_match",
        }
    }
}

/// Cache key built from the full `resolve` argument signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct CacheKey {
    path: String,
    threshold: usize,
    relative_threshold_bits: u64,
    candidate_count: usize,
    candidates_fingerprint: u64,
    exclude: Vec<String>,
}

impl CacheKey {
    pub(crate) fn new<S: AsRef<str>>(path: &str, candidates: &[S], options: &MatchOptions) -> Self {
        let mut hasher = DefaultHasher::new();
        for candidate in candidates {
            candidate.as_ref().hash(&mut hasher);
        }

        Self {
            path: path.to_string(),
            threshold: options.threshold,
            relative_threshold_bits: options.relative_threshold.to_bits(),
            candidate_count: candidates.len(),
            candidates_fingerprint: hasher.finish(),
            exclude: options.exclude.clone(),
        }
    }
}

/// LRU map from call signature to outcome.
pub(crate) struct MatchCache {
    entries: LruCache<CacheKey, MatchOutcome>,
}

impl MatchCache {
    pub(crate) fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Look up an outcome, marking it most recently used.
    pub(crate) fn get(&mut self, key: &CacheKey) -> Option<MatchOutcome> {
        self.entries.get(key).cloned()
    }

    pub(crate) fn insert(&mut self, key: CacheKey, outcome: MatchOutcome) {
        self.entries.put(key, outcome);
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(path: &str) -> CacheKey {
        CacheKey::new(path, &["/about", "/contact"], &MatchOptions::default())
    }

    #[test]
    fn test_default_capacity() {
        assert_eq!(DEFAULT_CACHE_CAPACITY.get(), 500);
        assert_eq!(MatchCache::new(DEFAULT_CACHE_CAPACITY).capacity(), 500);
    }

    #[test]
    fn test_key_covers_signature() {
        let base = key("/abuot");
        assert_eq!(base, key("/abuot"));
        assert_ne!(base, key("/ABUOT"));

        let tighter = CacheKey::new(
            "/abuot",
            &["/about", "/contact"],
            &MatchOptions::new().with_threshold(1),
        );
        assert_ne!(base, tighter);

        let relative = CacheKey::new(
            "/abuot",
            &["/about", "/contact"],
            &MatchOptions::new().with_relative_threshold(0.5),
        );
        assert_ne!(base, relative);

        let excluded = CacheKey::new(
            "/abuot",
            &["/about", "/contact"],
            &MatchOptions::new().with_exclude(["/contact"]),
        );
        assert_ne!(base, excluded);
    }

    #[test]
    fn test_same_length_lists_do_not_collide() {
        let a = CacheKey::new("/abuot", &["/about", "/blog"], &MatchOptions::default());
        let b = CacheKey::new("/abuot", &["/blog", "/about"], &MatchOptions::default());
        assert_ne!(a, b);
    }

    #[test]
    fn test_exclusion_lists_are_not_joined() {
        let joined = CacheKey::new("/x", &["/a"], &MatchOptions::new().with_exclude(["a,b"]));
        let split = CacheKey::new("/x", &["/a"], &MatchOptions::new().with_exclude(["a", "b"]));
        assert_ne!(joined, split);
    }

    #[test]
    fn test_observer_not_in_key() {
        let observed = CacheKey::new(
            "/abuot",
            &["/about", "/contact"],
            &MatchOptions::new().with_observer(|_: &str, _: &str| {}),
        );
        assert_eq!(observed, key("/abuot"));
    }

    #[test]
    fn test_lru_eviction() {
        let mut cache = MatchCache::new(NonZeroUsize::new(2).unwrap());
        cache.insert(key("/a"), MatchOutcome::NoMatch);
        cache.insert(key("/b"), MatchOutcome::Exact("/b".into()));

        // Touch "/a" so "/b" becomes least recently used
        assert_eq!(cache.get(&key("/a")), Some(MatchOutcome::NoMatch));

        cache.insert(key("/c"), MatchOutcome::NoMatch);
        assert_eq!(cache.len(), 2);
        assert!(cache.get(&key("/b")).is_none());
        assert!(cache.get(&key("/a")).is_some());
        assert!(cache.get(&key("/c")).is_some());
    }

    #[test]
    fn test_outcome_accessors() {
        let fuzzy = MatchOutcome::Fuzzy {
            route: "/about".into(),
            distance: 2,
        };
        assert_eq!(fuzzy.route(), Some("/about"));
        assert_eq!(fuzzy.label(), "fuzzy");
        assert_eq!(MatchOutcome::NoMatch.route(), None);
        assert_eq!(MatchOutcome::Exact("/a".into()).into_route(), Some("/a".into()));
    }
}
