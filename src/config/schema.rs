//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for route
//! resolution. All types derive Serde traits for deserialization from
//! config files.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::routing::cache::DEFAULT_CACHE_CAPACITY;
use crate::routing::flatten::{flatten_routes, RouteNode};
use crate::routing::options::{DEFAULT_RELATIVE_THRESHOLD, DEFAULT_THRESHOLD};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FuzzConfig {
    /// Matching thresholds and exclusions.
    pub matching: MatchingConfig,

    /// Resolver cache settings.
    pub cache: CacheConfig,

    /// Redirect loop guard settings.
    pub redirect: RedirectConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Flat list of known routes.
    pub routes: Vec<String>,

    /// Nested route tree, flattened and appended after `routes`.
    pub route_tree: Vec<RouteNode>,
}

impl FuzzConfig {
    /// All candidate routes: `routes` first, then the flattened tree, with
    /// duplicates removed.
    pub fn candidates(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.routes
            .iter()
            .cloned()
            .chain(flatten_routes(&self.route_tree))
            .filter(|route| seen.insert(route.clone()))
            .collect()
    }
}

/// Matching configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Maximum accepted edit distance.
    pub threshold: usize,

    /// Maximum accepted distance relative to candidate length (0.0–1.0).
    pub relative_threshold: f64,

    /// Substrings that disqualify a candidate.
    pub exclude: Vec<String>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            relative_threshold: DEFAULT_RELATIVE_THRESHOLD,
            exclude: Vec::new(),
        }
    }
}

/// Resolver cache configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum cached outcomes (LRU eviction beyond this).
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CACHE_CAPACITY.get(),
        }
    }
}

/// Redirect loop guard configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RedirectConfig {
    /// Redirects allowed within one window.
    pub max_redirects: usize,

    /// Window length in milliseconds.
    pub window_ms: u64,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            max_redirects: 3,
            window_ms: 1000,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
