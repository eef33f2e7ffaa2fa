//! Windows console key reader.
//!
//! Console key events already arrive one key at a time, so no byte
//! buffering is needed. Line input and processed input are left enabled:
//! Ctrl+C keeps reaching the process as a console control event.

use std::io::IsTerminal;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::terminal::{KeyReader, TerminalError, IDLE_BACKOFF};

pub struct ConsoleKeyReader {
    closed: AtomicBool,
}

impl ConsoleKeyReader {
    pub fn open() -> Result<Self, TerminalError> {
        if !std::io::stdin().is_terminal() {
            return Err(TerminalError::NotATerminal);
        }
        Ok(Self {
            closed: AtomicBool::new(false),
        })
    }
}

impl KeyReader for ConsoleKeyReader {
    fn read_key(&self) -> Option<char> {
        if self.closed.load(Ordering::Acquire) {
            thread::sleep(IDLE_BACKOFF);
            return None;
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char(c) => Some(c),
                _ => None,
            },
            Ok(_) => None,
            Err(e) => {
                tracing::debug!(error = %e, "Console read failed");
                thread::sleep(IDLE_BACKOFF);
                None
            }
        }
    }

    fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }
}
