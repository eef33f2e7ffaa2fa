//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main + startup.rs):
//!     Parse CLI → Load routes → Open terminal → Bind → Banner → Serve
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Restore terminal → Exit
//!
//! Shutdown (shutdown.rs):
//!     Broadcast trigger → Server stops accepting (embedded use)
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds before the banner so the printed URLs are live

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
