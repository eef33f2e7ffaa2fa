//! Route template matching.
//!
//! # Responsibilities
//! - Parse route paths into literal, wildcard and root segments
//! - Match request segments against a template
//!
//! # Design Decisions
//! - Segment counts must be equal; no optional or catch-all segments
//! - Literal segments are case-sensitive
//! - A `:name` segment matches any single value (`:id` by convention)
//! - No regex to guarantee O(n) matching

use crate::config::validation::{split_path, ROOT_SEGMENT};

/// One segment of a route template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// The whole path is `/`.
    Root,
    /// Matches exactly this text.
    Literal(String),
    /// Matches any value; holds the name after the colon.
    Wildcard(String),
}

impl Segment {
    fn parse(raw: &str) -> Self {
        if raw == ROOT_SEGMENT {
            return Segment::Root;
        }
        match raw.strip_prefix(':') {
            Some(name) if !name.is_empty() => Segment::Wildcard(name.to_string()),
            _ => Segment::Literal(raw.to_string()),
        }
    }

    /// Returns true if this segment accepts the request segment `value`.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Segment::Root => value == ROOT_SEGMENT,
            Segment::Literal(literal) => literal == value,
            Segment::Wildcard(_) => true,
        }
    }
}

/// A parsed route path such as `/books/:id/reviews`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTemplate {
    path: String,
    segments: Vec<Segment>,
}

impl RouteTemplate {
    /// Parse a route path. Returns `None` for paths rejected by
    /// [`split_path`].
    pub fn parse(path: &str) -> Option<Self> {
        let segments = split_path(path)?.into_iter().map(Segment::parse).collect();
        Some(Self {
            path: path.to_string(),
            segments,
        })
    }

    /// The path as written in the route file.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments. Templates with equal counts are equal-shaped.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the request segments fit this template.
    pub fn matches(&self, request: &[&str]) -> bool {
        self.segments.len() == request.len()
            && self
                .segments
                .iter()
                .zip(request)
                .all(|(segment, value)| segment.matches(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_segments() {
        let template = RouteTemplate::parse("/books/:id/reviews").unwrap();
        assert_eq!(
            template.segments(),
            &[
                Segment::Literal("books".into()),
                Segment::Wildcard("id".into()),
                Segment::Literal("reviews".into()),
            ]
        );
        assert_eq!(template.path(), "/books/:id/reviews");

        let root = RouteTemplate::parse("/").unwrap();
        assert_eq!(root.segments(), &[Segment::Root]);
        assert_eq!(root.segment_count(), 1);

        // A bare colon has no name and stays literal.
        let colon = RouteTemplate::parse("/:").unwrap();
        assert_eq!(colon.segments(), &[Segment::Literal(":".into())]);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(RouteTemplate::parse("books").is_none());
        assert!(RouteTemplate::parse("/books/").is_none());
        assert!(RouteTemplate::parse("/a//b").is_none());
    }

    #[test]
    fn test_wildcard_matches_any_value() {
        let template = RouteTemplate::parse("/books/:id/reviews").unwrap();
        assert!(template.matches(&["books", "1", "reviews"]));
        assert!(template.matches(&["books", "moby-dick", "reviews"]));
        assert!(!template.matches(&["books", "1", "ratings"]));
        assert!(!template.matches(&["Books", "1", "reviews"]));
    }

    #[test]
    fn test_segment_count_must_agree() {
        let template = RouteTemplate::parse("/books/:id").unwrap();
        assert!(template.matches(&["books", "7"]));
        assert!(!template.matches(&["books"]));
        assert!(!template.matches(&["books", "7", "reviews"]));
    }

    #[test]
    fn test_root_matches_only_root() {
        let root = RouteTemplate::parse("/").unwrap();
        assert!(root.matches(&[ROOT_SEGMENT]));
        assert!(!root.matches(&["books"]));

        let single = RouteTemplate::parse("/:id").unwrap();
        assert!(single.matches(&["books"]));
    }
}
