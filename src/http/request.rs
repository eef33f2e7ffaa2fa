//! Request path handling.
//!
//! # Responsibilities
//! - Percent-decode the request path
//! - Enforce the configured path prefix
//! - Normalize the remaining path the way route files are written
//! - Split it into segments for the resolver
//!
//! # Design Decisions
//! - One trailing slash is ignored (`/books/` is `/books`)
//! - The prefix must end at a segment boundary: with prefix `api`,
//!   `/apibooks` is rejected
//! - Paths with empty segments resolve to nothing

use std::borrow::Cow;

use crate::config::validation::split_path;

/// Percent-decode a URI path so it compares against route files as
/// written. Paths that do not decode to UTF-8 are kept as sent.
pub fn decode_path(path: &str) -> Cow<'_, str> {
    match urlencoding::decode(path) {
        Ok(decoded) => decoded,
        Err(e) => {
            tracing::debug!(path = %path, error = %e, "Request path is not valid UTF-8 once decoded");
            Cow::Borrowed(path)
        }
    }
}

/// The configured prefix gate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathPrefix {
    prefix: String,
}

impl PathPrefix {
    /// `prefix` is taken without surrounding slashes; empty disables the
    /// gate.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into().trim_matches('/').to_string(),
        }
    }

    /// The part of `path` after the prefix, or `None` when the prefix is
    /// missing.
    pub fn strip<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.prefix.is_empty() {
            return Some(path);
        }
        let rest = path.strip_prefix('/')?.strip_prefix(self.prefix.as_str())?;
        (rest.is_empty() || rest.starts_with('/')).then_some(rest)
    }
}

/// Normalize a path relative to the prefix into route file form.
pub fn normalize(path: &str) -> String {
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Segments of a normalized request path, or `None` if it can never match
/// a route.
pub fn request_segments(path: &str) -> Option<Vec<&str>> {
    split_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validation::ROOT_SEGMENT;

    #[test]
    fn test_no_prefix_passes_everything() {
        let gate = PathPrefix::default();
        assert_eq!(gate.strip("/books"), Some("/books"));
        assert_eq!(gate.strip("/"), Some("/"));
    }

    #[test]
    fn test_prefix_gate() {
        let gate = PathPrefix::new("/api/v1/");
        assert_eq!(gate.strip("/api/v1/books"), Some("/books"));
        assert_eq!(gate.strip("/api/v1"), Some(""));
        assert_eq!(gate.strip("/api/v1/"), Some("/"));
        assert_eq!(gate.strip("/api/v1books"), None);
        assert_eq!(gate.strip("/api/v2/books"), None);
        assert_eq!(gate.strip("/books"), None);
    }

    #[test]
    fn test_decode_path() {
        assert_eq!(decode_path("/caf%C3%A9"), "/café");
        assert_eq!(decode_path("/my%20books/1"), "/my books/1");
        assert_eq!(decode_path("/books"), "/books");
        assert_eq!(decode_path("/bad%FF"), "/bad%FF");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("/books/"), "/books");
        assert_eq!(normalize("/books/1"), "/books/1");
        assert_eq!(normalize("books"), "/books");
    }

    #[test]
    fn test_request_segments() {
        assert_eq!(request_segments(&normalize("/")), Some(vec![ROOT_SEGMENT]));
        assert_eq!(request_segments(&normalize("/books/7/")), Some(vec!["books", "7"]));
        assert_eq!(request_segments(&normalize("//books")), None);
    }
}
