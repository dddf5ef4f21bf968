//! Redirect planning for a full location.

use serde::Serialize;

use crate::routing::{MatchOptions, ResolveError, Resolver};

/// A navigation the caller should perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirect {
    /// Pathname that was requested.
    pub from: String,
    /// Matched route in its original form.
    pub to: String,
    /// `to` with the original query string and fragment reattached.
    pub target: String,
}

/// Split a location into its pathname and the `?query#fragment` suffix.
///
/// ```
/// use route_fuzz::redirect::split_location;
///
/// assert_eq!(split_location("/abuot?ref=mail#team"), ("/abuot", "?ref=mail#team"));
/// assert_eq!(split_location("/abuot#team"), ("/abuot", "#team"));
/// assert_eq!(split_location("/abuot"), ("/abuot", ""));
/// ```
pub fn split_location(location: &str) -> (&str, &str) {
    match location.find(|c: char| c == '?' || c == '#') {
        Some(index) => location.split_at(index),
        None => (location, ""),
    }
}

/// Decide whether `location` should be redirected to a known route.
///
/// Returns `None` when the pathname is empty, when no candidate matches, or
/// when the match is the pathname itself.
pub fn plan_redirect<S: AsRef<str>>(
    resolver: &Resolver,
    location: &str,
    candidates: &[S],
    options: &MatchOptions,
) -> Result<Option<Redirect>, ResolveError> {
    let (pathname, suffix) = split_location(location);
    if pathname.is_empty() {
        return Ok(None);
    }

    let Some(to) = resolver.resolve(pathname, candidates, options)? else {
        return Ok(None);
    };
    if to == pathname {
        return Ok(None);
    }

    let target = format!("{to}{suffix}");
    tracing::debug!(from = pathname, %target, "Planned redirect");

    Ok(Some(Redirect {
        from: pathname.to_string(),
        to,
        target,
    }))
}
