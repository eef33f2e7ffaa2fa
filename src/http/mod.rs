//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, selector snapshot)
//!     → request.rs (prefix gate, path normalization, segments)
//!     → routing::resolve (route table + snapshot)
//!     → [delay from the same snapshot]
//!     → response.rs (JSON body or 404 diagnostic)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::PathPrefix;
pub use response::Outcome;
pub use server::{AppState, MockServer};
