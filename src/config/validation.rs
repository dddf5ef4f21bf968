//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (relative threshold, capacities, redirect budget)
//! - Reject configured routes the resolver would refuse as unsafe
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: FuzzConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::FuzzConfig;
use crate::observability::logging::parse_level;
use crate::routing::safety::{check_route, UnsafeRoute};

/// Upper bound on `redirect.max_redirects`.
pub const MAX_REDIRECT_BUDGET: usize = 1000;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("matching.relative_threshold must be within 0.0..=1.0, got {0}")]
    RelativeThresholdOutOfRange(f64),

    #[error("matching.exclude[{0}] is empty")]
    EmptyExclusionTerm(usize),

    #[error("cache.capacity must be greater than zero")]
    ZeroCacheCapacity,

    #[error("redirect.max_redirects must be greater than zero")]
    ZeroMaxRedirects,

    #[error("redirect.max_redirects must be at most {max}, got {0}", max = MAX_REDIRECT_BUDGET)]
    RedirectBudgetTooLarge(usize),

    #[error("redirect.window_ms must be greater than zero")]
    ZeroRedirectWindow,

    #[error("route {route:?} is unsafe: {reason}")]
    UnsafeRoute { route: String, reason: UnsafeRoute },

    #[error("observability.log_level {0:?} is not a level (trace, debug, info, warn, error, off)")]
    InvalidLogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &FuzzConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let relative = config.matching.relative_threshold;
    if !(0.0..=1.0).contains(&relative) {
        errors.push(ValidationError::RelativeThresholdOutOfRange(relative));
    }

    for (index, term) in config.matching.exclude.iter().enumerate() {
        if term.is_empty() {
            errors.push(ValidationError::EmptyExclusionTerm(index));
        }
    }

    if config.cache.capacity == 0 {
        errors.push(ValidationError::ZeroCacheCapacity);
    }
    if config.redirect.max_redirects == 0 {
        errors.push(ValidationError::ZeroMaxRedirects);
    } else if config.redirect.max_redirects > MAX_REDIRECT_BUDGET {
        errors.push(ValidationError::RedirectBudgetTooLarge(config.redirect.max_redirects));
    }
    if config.redirect.window_ms == 0 {
        errors.push(ValidationError::ZeroRedirectWindow);
    }

    for route in config.candidates() {
        if let Err(reason) = check_route(&route) {
            errors.push(ValidationError::UnsafeRoute { route, reason });
        }
    }

    if parse_level(&config.observability.log_level).is_none() {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&FuzzConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = FuzzConfig::default();
        config.matching.relative_threshold = 1.5;
        config.matching.exclude = vec!["/admin".into(), String::new()];
        config.cache.capacity = 0;
        config.redirect.window_ms = 0;
        config.routes = vec!["/about".into(), "//evil.com".into()];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::RelativeThresholdOutOfRange(1.5),
                ValidationError::EmptyExclusionTerm(1),
                ValidationError::ZeroCacheCapacity,
                ValidationError::ZeroRedirectWindow,
                ValidationError::UnsafeRoute {
                    route: "//evil.com".into(),
                    reason: UnsafeRoute::ProtocolRelative,
                },
            ]
        );
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = FuzzConfig::default();
        config.observability.log_level = "route_fuzz=loud".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidLogLevel(_)));
    }

    #[test]
    fn test_directive_style_log_level_rejected() {
        let mut config = FuzzConfig::default();
        config.observability.log_level = "route_fuzz=debug".into();
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::InvalidLogLevel("route_fuzz=debug".into())]
        );

        config.observability.log_level = "DEBUG".into();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_redirect_budget_upper_bound() {
        let mut config = FuzzConfig::default();
        config.redirect.max_redirects = MAX_REDIRECT_BUDGET;
        assert!(validate_config(&config).is_ok());

        config.redirect.max_redirects = usize::MAX;
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::RedirectBudgetTooLarge(usize::MAX)]
        );
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::UnsafeRoute {
            route: "https://evil.com".into(),
            reason: UnsafeRoute::AbsoluteUrl,
        };
        assert_eq!(err.to_string(), "route \"https://evil.com\" is unsafe: absolute URL");
    }
}
