//! Per-entry validation for mock route files.
//!
//! # Responsibilities
//! - Split route paths into segments, rejecting malformed ones
//! - Recognize the supported HTTP method names
//! - Check the format of status code keys
//!
//! # Design Decisions
//! - Every rule is applied to one entry at a time: a failing entry is skipped
//!   and the rest of the file still loads
//! - Status codes are checked for format only (three ASCII digits); semantic
//!   range is left to the HTTP layer
//! - Request paths go through the same splitting rules as route paths

/// Method names a route file may declare. Matching is case-sensitive.
pub const RECOGNIZED_METHODS: [&str; 7] = ["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS", "HEAD"];

/// Segment standing for the root path `/`.
///
/// Empty segments are rejected everywhere else, so the empty string cannot
/// collide with a real segment.
pub const ROOT_SEGMENT: &str = "";

/// Split a path into its segments.
///
/// Returns `None` when the path does not start with `/` or contains an empty
/// segment (doubled or trailing slash). The root path yields the single
/// [`ROOT_SEGMENT`].
pub fn split_path(path: &str) -> Option<Vec<&str>> {
    let rest = path.strip_prefix('/')?;
    if rest.is_empty() {
        return Some(vec![ROOT_SEGMENT]);
    }

    let segments: Vec<&str> = rest.split('/').collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return None;
    }
    Some(segments)
}

/// Returns true if `method` is one of [`RECOGNIZED_METHODS`].
pub fn is_recognized_method(method: &str) -> bool {
    RECOGNIZED_METHODS.contains(&method)
}

/// Parse a status code key. Exactly three ASCII digits are required; the
/// value itself is not range-checked.
pub fn parse_status_code(code: &str) -> Option<u16> {
    if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    code.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_path() {
        assert_eq!(split_path("/"), Some(vec![ROOT_SEGMENT]));
        assert_eq!(split_path("/books"), Some(vec!["books"]));
        assert_eq!(split_path("/books/:id/reviews"), Some(vec!["books", ":id", "reviews"]));
    }

    #[test]
    fn test_split_path_rejects_malformed() {
        assert_eq!(split_path(""), None);
        assert_eq!(split_path("books"), None);
        assert_eq!(split_path("/books/"), None);
        assert_eq!(split_path("//books"), None);
        assert_eq!(split_path("/books//reviews"), None);
    }

    #[test]
    fn test_recognized_methods() {
        assert!(is_recognized_method("GET"));
        assert!(is_recognized_method("OPTIONS"));
        assert!(!is_recognized_method("get"));
        assert!(!is_recognized_method("TRACE"));
        assert!(!is_recognized_method("FETCH"));
    }

    #[test]
    fn test_parse_status_code() {
        assert_eq!(parse_status_code("200"), Some(200));
        assert_eq!(parse_status_code("404"), Some(404));
        // Format-only: out-of-range codes are kept.
        assert_eq!(parse_status_code("999"), Some(999));
        assert_eq!(parse_status_code("042"), Some(42));

        assert_eq!(parse_status_code("20"), None);
        assert_eq!(parse_status_code("2000"), None);
        assert_eq!(parse_status_code("2xx"), None);
        assert_eq!(parse_status_code("-20"), None);
        assert_eq!(parse_status_code("+20"), None);
    }
}
