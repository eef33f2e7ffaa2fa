//! Artificial response delay ladder.

use std::fmt;
use std::time::Duration;

/// Delay steps in milliseconds, cycled in order.
pub const LADDER_MS: [u64; 4] = [0, 600, 1200, 2400];

/// Response delay applied to every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Delay(u64);

impl Delay {
    pub const OFF: Delay = Delay(0);

    pub fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub fn as_millis(self) -> u64 {
        self.0
    }

    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    pub fn is_off(self) -> bool {
        self.0 == 0
    }

    /// The following step of the ladder. The top step and any value off the
    /// ladder go back to zero.
    pub fn next(self) -> Self {
        match LADDER_MS.iter().position(|&ms| ms == self.0) {
            Some(i) if i + 1 < LADDER_MS.len() => Self(LADDER_MS[i + 1]),
            _ => Self::OFF,
        }
    }
}

impl fmt::Display for Delay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_off() {
            write!(f, "off")
        } else {
            write!(f, "{}ms", self.0)
        }
    }
}
