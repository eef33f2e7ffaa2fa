//! Route table construction and lookup.
//!
//! # Responsibilities
//! - Build the table from raw route data, skipping malformed entries
//! - Keep candidates sorted by status code
//! - Derive the status code domain cycled by the selector
//! - Look up the first template matching a request
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Routes ordered by path; first structural match wins, no backtracking
//! - O(n) template scan (acceptable for hand-written route files)
//! - Explicit `None` rather than a silent default route

use std::collections::BTreeSet;
use std::fmt;

use serde_json::Value;

use crate::config::validation::{is_recognized_method, parse_status_code};
use crate::routing::matcher::RouteTemplate;

/// One authored response: a status code and its payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseCandidate {
    code: String,
    status: u16,
    payload: Value,
}

impl ResponseCandidate {
    /// The status code key as written in the route file.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }
}

/// The candidates declared for one HTTP method of a route.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodEntry {
    method: String,
    candidates: Vec<ResponseCandidate>,
}

impl MethodEntry {
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Candidates in ascending status code order.
    pub fn candidates(&self) -> &[ResponseCandidate] {
        &self.candidates
    }

    /// The candidate authored for exactly `status`.
    pub fn candidate(&self, status: u16) -> Option<&ResponseCandidate> {
        self.candidates.iter().find(|c| c.status == status)
    }
}

/// A route template with its method entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    template: RouteTemplate,
    methods: Vec<MethodEntry>,
}

impl Route {
    pub fn template(&self) -> &RouteTemplate {
        &self.template
    }

    pub fn methods(&self) -> &[MethodEntry] {
        &self.methods
    }

    /// Exact, case-sensitive method lookup.
    pub fn method(&self, method: &str) -> Option<&MethodEntry> {
        self.methods.iter().find(|m| m.method == method)
    }
}

/// A position in the status code domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeSlot {
    /// Pick the lowest successful candidate of the matched route.
    Auto,
    /// Target this status code.
    Code(u16),
}

impl fmt::Display for CodeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeSlot::Auto => write!(f, "auto(2xx)"),
            CodeSlot::Code(code) => write!(f, "{}", code),
        }
    }
}

/// Immutable registry of mock routes.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTable {
    routes: Vec<Route>,
    codes: Vec<CodeSlot>,
}

impl RouteTable {
    /// Build a table from raw `path -> method -> code -> payload` data.
    ///
    /// Malformed paths, unrecognized methods and badly formatted codes are
    /// skipped one by one. Routes end up ordered by path.
    pub fn build<R, M, C>(raw: R) -> Self
    where
        R: IntoIterator<Item = (String, M)>,
        M: IntoIterator<Item = (String, C)>,
        C: IntoIterator<Item = (String, Value)>,
    {
        let mut routes = Vec::new();
        let mut seen_codes = BTreeSet::new();

        for (path, methods) in raw {
            let Some(template) = RouteTemplate::parse(&path) else {
                tracing::debug!(path = %path, "Skipping route with malformed path");
                continue;
            };

            let mut entries = Vec::new();
            for (method, responses) in methods {
                if !is_recognized_method(&method) {
                    tracing::debug!(path = %path, method = %method, "Skipping unrecognized method");
                    continue;
                }

                let mut candidates = Vec::new();
                for (code, payload) in responses {
                    let Some(status) = parse_status_code(&code) else {
                        tracing::debug!(path = %path, method = %method, code = %code, "Skipping malformed status code");
                        continue;
                    };
                    seen_codes.insert(status);
                    candidates.push(ResponseCandidate { code, status, payload });
                }
                // Stable: duplicate codes keep their input order.
                candidates.sort_by_key(|c| c.status);

                entries.push(MethodEntry { method, candidates });
            }

            routes.push(Route { template, methods: entries });
        }

        routes.sort_by(|a, b| a.template.path().cmp(b.template.path()));

        let codes = std::iter::once(CodeSlot::Auto)
            .chain(seen_codes.into_iter().map(CodeSlot::Code))
            .collect();

        Self { routes, codes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// The status code domain: `Auto` followed by every distinct code in
    /// ascending order.
    pub fn codes(&self) -> &[CodeSlot] {
        &self.codes
    }

    /// Route paths in table order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.template.path())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// First route whose template matches the request segments.
    pub fn find(&self, segments: &[&str]) -> Option<&Route> {
        self.routes.iter().find(|r| r.template.matches(segments))
    }
}
