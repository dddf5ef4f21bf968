//! Match options and their validation.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::config::schema::MatchingConfig;
use crate::routing::observer::RedirectObserver;

/// Default maximum edit distance.
pub const DEFAULT_THRESHOLD: usize = 3;

/// Default maximum distance as a fraction of the candidate length.
pub const DEFAULT_RELATIVE_THRESHOLD: f64 = 0.4;

/// Errors returned to callers of the resolver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    /// Relative threshold is NaN, infinite, or outside `0.0..=1.0`.
    #[error("relative threshold must be within 0.0..=1.0, got {0}")]
    InvalidRelativeThreshold(f64),

    /// An empty exclusion term would exclude every candidate.
    #[error("exclusion term at index {0} is empty")]
    EmptyExclusionTerm(usize),
}

/// Options controlling a single resolution.
#[derive(Clone)]
pub struct MatchOptions {
    /// Absolute cap on the accepted edit distance.
    pub threshold: usize,

    /// Cap on the accepted edit distance as a fraction of the normalized
    /// candidate's length.
    pub relative_threshold: f64,

    /// Candidates containing any of these substrings are never matched.
    pub exclude: Vec<String>,

    /// Notified on non-exact matches. Not part of the cache key.
    pub observer: Option<Arc<dyn RedirectObserver>>,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            relative_threshold: DEFAULT_RELATIVE_THRESHOLD,
            exclude: Vec::new(),
            observer: None,
        }
    }
}

impl fmt::Debug for MatchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchOptions")
            .field("threshold", &self.threshold)
            .field("relative_threshold", &self.relative_threshold)
            .field("exclude", &self.exclude)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl MatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_relative_threshold(mut self, relative_threshold: f64) -> Self {
        self.relative_threshold = relative_threshold;
        self
    }

    pub fn with_exclude<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = terms.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_observer(mut self, observer: impl RedirectObserver + 'static) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// Check the options before any matching happens.
    pub fn validate(&self) -> Result<(), ResolveError> {
        if !(0.0..=1.0).contains(&self.relative_threshold) {
            return Err(ResolveError::InvalidRelativeThreshold(self.relative_threshold));
        }
        if let Some(index) = self.exclude.iter().position(|term| term.is_empty()) {
            return Err(ResolveError::EmptyExclusionTerm(index));
        }
        Ok(())
    }

    /// Maximum accepted distance for a normalized candidate of `len`
    /// characters. Uses floor, never rounding.
    #[inline]
    pub fn ceiling(&self, len: usize) -> usize {
        let proportional = (len as f64 * self.relative_threshold).floor() as usize;
        self.threshold.min(proportional)
    }

    /// True if any exclusion term occurs in the raw candidate.
    #[inline]
    pub(crate) fn excludes(&self, candidate: &str) -> bool {
        self.exclude.iter().any(|term| candidate.contains(term.as_str()))
    }
}

impl From<&MatchingConfig> for MatchOptions {
    fn from(config: &MatchingConfig) -> Self {
        Self {
            threshold: config.threshold,
            relative_threshold: config.relative_threshold,
            exclude: config.exclude.clone(),
            observer: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = MatchOptions::default();
        assert_eq!(options.threshold, 3);
        assert!((options.relative_threshold - 0.4).abs() < f64::EPSILON);
        assert!(options.exclude.is_empty());
        assert!(options.observer.is_none());
    }

    #[test]
    fn test_ceiling_uses_floor() {
        let options = MatchOptions::default();
        assert_eq!(options.ceiling(5), 2); // 2.0
        assert_eq!(options.ceiling(6), 2); // 2.4
        assert_eq!(options.ceiling(7), 2); // 2.8
        assert_eq!(options.ceiling(1), 0); // "/"
        assert_eq!(options.ceiling(15), 3); // capped by threshold
    }

    #[test]
    fn test_ceiling_respects_absolute_threshold() {
        let options = MatchOptions::new().with_threshold(1);
        assert_eq!(options.ceiling(20), 1);
    }

    #[test]
    fn test_validate() {
        assert!(MatchOptions::default().validate().is_ok());
        assert!(MatchOptions::new().with_relative_threshold(0.0).validate().is_ok());
        assert!(MatchOptions::new().with_relative_threshold(1.0).validate().is_ok());

        assert_eq!(
            MatchOptions::new().with_relative_threshold(1.5).validate(),
            Err(ResolveError::InvalidRelativeThreshold(1.5))
        );
        assert!(matches!(
            MatchOptions::new().with_relative_threshold(f64::NAN).validate(),
            Err(ResolveError::InvalidRelativeThreshold(_))
        ));
        assert_eq!(
            MatchOptions::new().with_exclude(["/admin", ""]).validate(),
            Err(ResolveError::EmptyExclusionTerm(1))
        );
    }

    #[test]
    fn test_excludes_matches_raw_substring() {
        let options = MatchOptions::new().with_exclude(["admin"]);
        assert!(options.excludes("/admin/users"));
        assert!(options.excludes("/super-admin"));
        assert!(!options.excludes("/ADMIN"));
    }

    #[test]
    fn test_error_display() {
        let err = ResolveError::InvalidRelativeThreshold(2.0);
        assert_eq!(err.to_string(), "relative threshold must be within 0.0..=1.0, got 2");
    }
}
