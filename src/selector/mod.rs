//! Live response-selection state.
//!
//! # Data Flow
//! ```text
//! key press
//!     → interactive controller
//!     → state.rs (step cursor / cycle delay, atomic swap)
//!
//! HTTP request
//!     → state.rs snapshot (one atomic load)
//!     → resolver + delay
//! ```
//!
//! # Design Decisions
//! - One writer (the controller thread), many readers (request tasks)
//! - Cursor and delay live in one immutable value so reads are never torn
//! - Cursor index 0 is the `Auto` slot

pub mod delay;
pub mod state;

pub use delay::Delay;
pub use state::{Direction, Feedback, Selection, SelectorState, Snapshot};
