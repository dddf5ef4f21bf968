//! Path normalization.
//!
//! # Rules
//! - Percent-escapes are decoded with URI-decoding semantics: escapes of
//!   reserved characters (`; / ? : @ & = + $ , #`) stay encoded
//! - A malformed escape, or escapes forming invalid UTF-8, fail the decode
//!   and the input is used undecoded
//! - Surrounding whitespace is trimmed
//! - A leading slash is enforced
//! - Trailing slashes (and whitespace they uncover) are stripped unless the
//!   path is exactly `/`
//! - The result is lowercased

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

/// Characters `decodeURI`-style decoding leaves escaped.
const RESERVED: &[u8] = b";/?:@&=+$,#";

/// Normalize a path for comparison.
///
/// ```
/// use route_fuzz::routing::normalize_path;
///
/// assert_eq!(normalize_path("About/"), "/about");
/// assert_eq!(normalize_path("/caf%C3%A9"), "/café");
/// assert_eq!(normalize_path("/100%"), "/100%");
/// ```
pub fn normalize_path(path: &str) -> String {
    let decoded = match decode_uri(path) {
        Some(decoded) => decoded,
        None => {
            tracing::trace!(path, "Malformed percent-encoding, comparing undecoded path");
            Cow::Borrowed(path)
        }
    };

    let trimmed = decoded.trim();
    let mut normalized = String::with_capacity(trimmed.len() + 1);
    if !trimmed.starts_with('/') {
        normalized.push('/');
    }
    normalized.push_str(trimmed);

    // Whitespace uncovered by a stripped slash goes too, or a second pass
    // would trim it
    while normalized.len() > 1 && normalized.ends_with(|c: char| c == '/' || c.is_whitespace()) {
        normalized.pop();
    }

    normalized.to_lowercase()
}

/// Decode percent-escapes the way a URI decoder does.
///
/// Returns `None` when the input holds a malformed escape (`%` not followed
/// by two hex digits) or when the decoded bytes are not valid UTF-8.
/// Callers fall back to the undecoded input in that case.
pub fn decode_uri(input: &str) -> Option<Cow<'_, str>> {
    if !input.contains('%') {
        return Some(Cow::Borrowed(input));
    }

    let bytes = input.as_bytes();
    let mut decoded = String::with_capacity(input.len());
    let mut run_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }

        let byte = escaped_byte(bytes.get(i + 1..i + 3)?)?;
        if RESERVED.contains(&byte) {
            decoded.push_str(&percent_decode_str(&input[run_start..i]).decode_utf8().ok()?);
            decoded.push_str(&input[i..i + 3]);
            run_start = i + 3;
        }
        i += 3;
    }

    decoded.push_str(&percent_decode_str(&input[run_start..]).decode_utf8().ok()?);
    Some(Cow::Owned(decoded))
}

fn escaped_byte(digits: &[u8]) -> Option<u8> {
    match digits {
        [hi, lo] if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => {
            let hex = std::str::from_utf8(digits).ok()?;
            u8::from_str_radix(hex, 16).ok()
        }
        _ => None,
    }
}
