//! Request to response resolution.
//!
//! # Responsibilities
//! - Find the first route matching the request segments
//! - Find the method entry for the request method
//! - Pick the candidate for the selector's target code
//!
//! # Design Decisions
//! - Pure function of (segments, method, snapshot, table): no I/O, no mutation
//! - Unknown route or method is an explicit miss (404 without payload)
//! - A known route asked for an unauthored code answers `{}` at that code

use serde_json::Value;

use crate::routing::router::{CodeSlot, RouteTable};
use crate::selector::Snapshot;

/// Codes eligible for the `Auto` slot, in preference order.
pub const SUCCESS_CODES: [u16; 4] = [200, 201, 202, 204];

/// Status used for resolution misses.
pub const NOT_FOUND: u16 = 404;

/// Status used when `Auto` finds no successful candidate.
pub const DEFAULT_SUCCESS: u16 = 200;

/// The response chosen for a request.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// JSON body, or `None` when no route/method matched.
    pub payload: Option<Value>,
    pub status: u16,
}

impl Resolution {
    pub fn not_found() -> Self {
        Self {
            payload: None,
            status: NOT_FOUND,
        }
    }

    /// An empty object at `status`, for codes the route does not author.
    pub fn empty(status: u16) -> Self {
        Self {
            payload: Some(Value::Object(Default::default())),
            status,
        }
    }

    pub fn is_miss(&self) -> bool {
        self.payload.is_none()
    }
}

/// Resolve a request against the table using the selector snapshot.
pub fn resolve(table: &RouteTable, segments: &[&str], method: &str, snapshot: &Snapshot) -> Resolution {
    let Some(route) = table.find(segments) else {
        return Resolution::not_found();
    };
    let Some(entry) = route.method(method) else {
        return Resolution::not_found();
    };

    match snapshot.target {
        CodeSlot::Auto => entry
            .candidates()
            .iter()
            .find(|c| SUCCESS_CODES.contains(&c.status()))
            .map(|c| Resolution {
                payload: Some(c.payload().clone()),
                status: c.status(),
            })
            .unwrap_or_else(|| Resolution::empty(DEFAULT_SUCCESS)),
        CodeSlot::Code(status) => entry
            .candidate(status)
            .map(|c| Resolution {
                payload: Some(c.payload().clone()),
                status,
            })
            .unwrap_or_else(|| Resolution::empty(status)),
    }
}
