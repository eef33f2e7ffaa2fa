//! Key to selector dispatch.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::interactive::KeyEvent;
use crate::observability::Console;
use crate::selector::{Direction, Feedback, SelectorState};
use crate::terminal::KeyReader;

/// Translates key presses into selector changes.
///
/// The controller is the only writer of the selector, so mutations are
/// serialized by construction.
pub struct InteractiveController {
    reader: Arc<dyn KeyReader>,
    selector: Arc<SelectorState>,
    console: Arc<Console>,
}

impl InteractiveController {
    pub fn new(reader: Arc<dyn KeyReader>, selector: Arc<SelectorState>, console: Arc<Console>) -> Self {
        Self {
            reader,
            selector,
            console,
        }
    }

    /// Apply one key event. Unrecognized keys change nothing.
    pub fn handle(&self, event: KeyEvent) -> Option<Feedback> {
        match event {
            KeyEvent::DecreaseStatus => Some(self.selector.step_status(Direction::Down)),
            KeyEvent::IncreaseStatus => Some(self.selector.step_status(Direction::Up)),
            KeyEvent::ToggleDelay => Some(self.selector.cycle_delay()),
            KeyEvent::Unrecognized => None,
        }
    }

    /// Wait for one key, apply it and print the feedback.
    pub fn poll(&self) -> Option<Feedback> {
        let key = self.reader.read_key()?;
        let feedback = self.handle(KeyEvent::from_char(key))?;
        tracing::debug!(key = %key, feedback = %feedback, "Selector changed");
        self.console.feedback(&feedback);
        Some(feedback)
    }

    /// Poll forever. Ends only with the process.
    pub fn run(&self) {
        loop {
            self.poll();
        }
    }

    /// Run the loop on a dedicated thread; terminal reads block.
    pub fn spawn(self) -> io::Result<JoinHandle<()>> {
        thread::Builder::new()
            .name("interactive-keys".to_string())
            .spawn(move || self.run())
    }
}
