//! Mock route resolution subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request (path segments, method)
//!     → router.rs (first matching route template)
//!     → matcher.rs (literal / wildcard segment checks)
//!     → resolver.rs (method entry + selector snapshot → candidate)
//!     → Resolution (payload, status) or explicit miss
//!
//! Route compilation (at startup):
//!     path → method → code → payload
//!     → skip malformed entries
//!     → sort candidates by code, routes by path
//!     → freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in hot path
//! - Deterministic: same input and snapshot always resolve the same way
//! - First match wins

pub mod matcher;
pub mod resolver;
pub mod router;

pub use matcher::{RouteTemplate, Segment};
pub use resolver::{resolve, Resolution};
pub use router::{CodeSlot, MethodEntry, ResponseCandidate, Route, RouteTable};
