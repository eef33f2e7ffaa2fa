//! Shared selector state.
//!
//! The current [`Selection`] is an immutable value behind an `ArcSwap`.
//! Readers load it in one atomic step, so a snapshot can never mix a new
//! cursor with an old delay. Writers replace the whole value through
//! `rcu`.

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::routing::router::CodeSlot;
use crate::selector::delay::Delay;

/// Direction of a status cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Down,
    Up,
}

/// The mutable part of the selector, swapped as one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Selection {
    /// Index into the status code domain; 0 is `Auto`.
    pub cursor: usize,
    pub delay: Delay,
}

/// A consistent view of the selector taken at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub selection: Selection,
    /// The code slot under the cursor.
    pub target: CodeSlot,
}

impl Snapshot {
    pub fn cursor(&self) -> usize {
        self.selection.cursor
    }

    pub fn delay(&self) -> Delay {
        self.selection.delay
    }
}

/// Outcome of a selector mutation, rendered on the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Status(CodeSlot),
    Delay(Delay),
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Status(slot) => write!(f, "STATUS CODE: {}", slot),
            Feedback::Delay(delay) => write!(f, "DELAY: {}", delay),
        }
    }
}

/// Interactively controlled status cursor and delay.
#[derive(Debug)]
pub struct SelectorState {
    codes: Arc<[CodeSlot]>,
    current: ArcSwap<Selection>,
}

impl SelectorState {
    /// Create a selector over `codes`, starting at `Auto` with no delay.
    ///
    /// The first slot is treated as `Auto`; an empty domain is replaced by
    /// `[Auto]` so the cursor always has somewhere to point.
    pub fn new(codes: &[CodeSlot]) -> Self {
        let codes: Arc<[CodeSlot]> = if codes.is_empty() {
            Arc::from(vec![CodeSlot::Auto])
        } else {
            Arc::from(codes)
        };
        Self {
            codes,
            current: ArcSwap::from_pointee(Selection::default()),
        }
    }

    /// The status code domain the cursor moves over.
    pub fn codes(&self) -> &[CodeSlot] {
        &self.codes
    }

    pub fn snapshot(&self) -> Snapshot {
        let selection = **self.current.load();
        Snapshot {
            selection,
            target: self.slot(selection.cursor),
        }
    }

    /// Move the cursor one slot, wrapping at both ends.
    pub fn step_status(&self, direction: Direction) -> Feedback {
        let len = self.codes.len();
        let previous = self.current.rcu(|current| Selection {
            cursor: step(current.cursor, len, direction),
            ..**current
        });
        let cursor = step(previous.cursor, len, direction);
        Feedback::Status(self.slot(cursor))
    }

    /// Advance the delay ladder.
    pub fn cycle_delay(&self) -> Feedback {
        let previous = self.current.rcu(|current| Selection {
            delay: current.delay.next(),
            ..**current
        });
        Feedback::Delay(previous.delay.next())
    }

    fn slot(&self, cursor: usize) -> CodeSlot {
        self.codes.get(cursor).copied().unwrap_or(CodeSlot::Auto)
    }
}

fn step(cursor: usize, len: usize, direction: Direction) -> usize {
    match direction {
        Direction::Up if cursor + 1 >= len => 0,
        Direction::Up => cursor + 1,
        Direction::Down if cursor == 0 => len - 1,
        Direction::Down => cursor - 1,
    }
}
