//! URL path type for type-safe URL handling.
//!
//! - Internal representation: always decoded (human-readable)
//! - Browser boundary: decode on input, encode on output

use std::fmt;
use std::sync::Arc;

/// Decoded URL path (internal representation)
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Always starts with `/`
/// - Page URLs end with `/`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UrlPath(Arc<str>);

impl UrlPath {
    /// Create a page URL (leading and trailing slash enforced).
    /// Strips any query string or fragment.
    pub fn from_page(decoded: &str) -> Self {
        let trimmed = decoded.trim();
        if trimmed.is_empty() || trimmed == "/" {
            return Self(Arc::from("/"));
        }

        let path = trimmed.split(['?', '#']).next().unwrap_or(trimmed);

        let mut normalized = String::with_capacity(path.len() + 2);
        if !path.starts_with('/') {
            normalized.push('/');
        }
        normalized.push_str(path);
        if !normalized.ends_with('/') {
            normalized.push('/');
        }

        Self(Arc::from(normalized))
    }

    /// Create from a browser request path (decode percent-encoding,
    /// strip the query string, keep the trailing-slash shape as sent).
    pub fn from_browser(encoded: &str) -> Self {
        use percent_encoding::percent_decode_str;

        let path = encoded.split('?').next().unwrap_or(encoded);
        let decoded = percent_decode_str(path)
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| path.to_string());

        if decoded.starts_with('/') {
            Self(Arc::from(decoded))
        } else {
            Self(Arc::from(format!("/{decoded}")))
        }
    }

    /// Get the decoded URL path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Encode for emission into markup (percent-encode per segment).
    pub fn to_encoded(&self) -> String {
        use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

        // Everything a path segment must escape; keeps ASCII readable.
        const SEGMENT: &AsciiSet = &CONTROLS
            .add(b' ')
            .add(b'"')
            .add(b'<')
            .add(b'>')
            .add(b'`')
            .add(b'#')
            .add(b'?')
            .add(b'%');

        self.0
            .split('/')
            .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Check if path starts with the given prefix.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }

    /// Compare ignoring trailing slash (`/docs/intro` == `/docs/intro/`).
    pub fn matches_ignoring_trailing_slash(&self, other: &str) -> bool {
        self.0.trim_end_matches('/') == other.trim_end_matches('/')
    }
}

impl fmt::Display for UrlPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
