//! Interactive control loop.
//!
//! # Data Flow
//! ```text
//! terminal
//!     → KeyReader (one logical key)
//!     → KeyEvent (a / s / d, case-insensitive)
//!     → controller.rs (selector mutation)
//!     → console feedback line
//! ```

pub mod controller;

pub use controller::InteractiveController;

/// A recognized key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    DecreaseStatus,
    IncreaseStatus,
    ToggleDelay,
    Unrecognized,
}

impl KeyEvent {
    pub fn from_char(key: char) -> Self {
        match key.to_ascii_lowercase() {
            'a' => KeyEvent::DecreaseStatus,
            's' => KeyEvent::IncreaseStatus,
            'd' => KeyEvent::ToggleDelay,
            _ => KeyEvent::Unrecognized,
        }
    }
}
