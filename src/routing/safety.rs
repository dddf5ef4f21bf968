//! Candidate route safety filter.
//!
//! Only root-relative routes on the application's own origin may be
//! redirect targets. Anything a browser could resolve to another origin is
//! rejected before distance is ever considered.

use std::fmt;

use url::Url;

/// Why a candidate route was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsafeRoute {
    /// Parses as an absolute URL (`https://…`, `javascript:…`).
    AbsoluteUrl,
    /// Does not start with `/`.
    NotRootRelative,
    /// Starts with `//` or `/\`, which browsers resolve against another host.
    ProtocolRelative,
    /// Holds an ASCII control character; browsers strip tabs and newlines
    /// from URLs, which can turn `/\t/host` into `//host`.
    ControlCharacter,
}

impl UnsafeRoute {
    /// Short label for metrics.
    pub fn label(self) -> &'static str {
        match self {
            UnsafeRoute::AbsoluteUrl => "absolute_url",
            UnsafeRoute::NotRootRelative => "not_root_relative",
            UnsafeRoute::ProtocolRelative => "protocol_relative",
            UnsafeRoute::ControlCharacter => "control_character",
        }
    }
}

impl fmt::Display for UnsafeRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            UnsafeRoute::AbsoluteUrl => "absolute URL",
            UnsafeRoute::NotRootRelative => "not root-relative",
            UnsafeRoute::ProtocolRelative => "protocol-relative",
            UnsafeRoute::ControlCharacter => "contains control character",
        };
        f.write_str(reason)
    }
}

/// Check that a raw candidate route is a safe redirect target.
pub fn check_route(route: &str) -> Result<(), UnsafeRoute> {
    if Url::parse(route).is_ok() {
        return Err(UnsafeRoute::AbsoluteUrl);
    }
    if !route.starts_with('/') {
        return Err(UnsafeRoute::NotRootRelative);
    }
    if matches!(route.as_bytes().get(1).copied(), Some(b'/' | b'\\')) {
        return Err(UnsafeRoute::ProtocolRelative);
    }
    if route.chars().any(|c| c.is_ascii_control()) {
        return Err(UnsafeRoute::ControlCharacter);
    }
    Ok(())
}

/// Returns true if the route may be used as a redirect target.
#[inline]
pub fn is_safe_route(route: &str) -> bool {
    check_route(route).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_relative_routes_are_safe() {
        assert!(is_safe_route("/"));
        assert!(is_safe_route("/about"));
        assert!(is_safe_route("/products/:id"));
        assert!(is_safe_route("/search/a:b"));
    }

    #[test]
    fn test_absolute_urls_rejected() {
        assert_eq!(check_route("https://evil.com"), Err(UnsafeRoute::AbsoluteUrl));
        assert_eq!(check_route("http://evil.com/about"), Err(UnsafeRoute::AbsoluteUrl));
        assert_eq!(check_route("javascript:alert(1)"), Err(UnsafeRoute::AbsoluteUrl));
        assert_eq!(check_route(" https://evil.com"), Err(UnsafeRoute::AbsoluteUrl));
    }

    #[test]
    fn test_protocol_relative_rejected() {
        assert_eq!(check_route("//evil.com"), Err(UnsafeRoute::ProtocolRelative));
        assert_eq!(check_route("/\\evil.com"), Err(UnsafeRoute::ProtocolRelative));
    }

    #[test]
    fn test_relative_and_empty_rejected() {
        assert_eq!(check_route("about"), Err(UnsafeRoute::NotRootRelative));
        assert_eq!(check_route(""), Err(UnsafeRoute::NotRootRelative));
    }

    #[test]
    fn test_control_characters_rejected() {
        assert_eq!(check_route("/\t/evil.com"), Err(UnsafeRoute::ControlCharacter));
        assert_eq!(check_route("/about\n"), Err(UnsafeRoute::ControlCharacter));
    }
}
