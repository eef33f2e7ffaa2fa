//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured tracing events, stderr)
//!
//! Request handlers and the interactive controller produce:
//!     → console.rs (banner, access lines, key feedback, stdout)
//! ```
//!
//! # Design Decisions
//! - The console is what the developer watches; tracing is for diagnosis
//! - Both are cheap enough to run on every request

pub mod console;
pub mod logging;

pub use console::{AccessEntry, Console};
