//! Raw terminal input.
//!
//! # Responsibilities
//! - Put the attached terminal into key-at-a-time, no-echo mode
//! - Yield one logical key press at a time
//! - Restore the terminal on close
//!
//! # Design Decisions
//! - One trait, one implementation per platform selected at build time
//! - Read failures are "no key", never errors: input is best-effort and
//!   must not take down request serving
//! - `close` may be called from another thread while a read is blocked

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

pub mod pending;

#[cfg(unix)]
pub mod unix;

#[cfg(windows)]
pub mod windows;

/// Pause after EOF or a failed read before the caller polls again.
pub(crate) const IDLE_BACKOFF: Duration = Duration::from_millis(100);

/// Controlling terminal on Unix systems.
#[cfg(unix)]
pub const TTY_PATH: &str = "/dev/tty";

/// Source of key presses.
pub trait KeyReader: Send + Sync {
    /// Block until input arrives. Returns `None` when no complete key is
    /// available yet or the read failed; callers simply poll again.
    fn read_key(&self) -> Option<char>;

    /// Restore the terminal mode. Safe to call more than once.
    fn close(&self);
}

/// Failure to take over the terminal at startup.
#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("could not open terminal {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not configure terminal: {0}")]
    Mode(#[source] io::Error),

    /// Windows only: the console reader needs stdin attached to a console.
    #[cfg(windows)]
    #[error("standard input is not a terminal")]
    NotATerminal,
}

/// Open the key reader for this platform.
#[cfg(unix)]
pub fn open() -> Result<Arc<dyn KeyReader>, TerminalError> {
    let reader = unix::TtyKeyReader::open(std::path::Path::new(TTY_PATH))?;
    Ok(Arc::new(reader))
}

/// Open the key reader for this platform.
#[cfg(windows)]
pub fn open() -> Result<Arc<dyn KeyReader>, TerminalError> {
    let reader = windows::ConsoleKeyReader::open()?;
    Ok(Arc::new(reader))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TerminalError::Open {
            path: PathBuf::from("/dev/tty"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("could not open terminal /dev/tty: "));

        let err = TerminalError::Mode(io::Error::from(io::ErrorKind::Unsupported));
        assert!(err.to_string().starts_with("could not configure terminal: "));
    }

    #[cfg(windows)]
    #[test]
    fn test_not_a_terminal_message() {
        assert_eq!(
            TerminalError::NotATerminal.to_string(),
            "standard input is not a terminal"
        );
    }
}
