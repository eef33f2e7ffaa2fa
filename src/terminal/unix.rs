//! Unix terminal key reader.
//!
//! Opens the controlling terminal, switches it to non-canonical no-echo mode
//! and restores the saved mode on close. `ISIG` is left alone so Ctrl+C
//! still raises SIGINT.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use std::sync::Mutex;
use std::thread;

use nix::sys::termios::{self, InputFlags, LocalFlags, SetArg, SpecialCharacterIndices, Termios};

use crate::terminal::pending::PendingKey;
use crate::terminal::{KeyReader, TerminalError, IDLE_BACKOFF};

struct Input<R> {
    reader: BufReader<R>,
    pending: PendingKey,
}

struct SavedMode {
    device: File,
    termios: Termios,
}

/// Key reader over a raw byte stream, normally `/dev/tty`.
pub struct TtyKeyReader<R = File> {
    input: Mutex<Input<R>>,
    saved: Mutex<Option<SavedMode>>,
}

impl TtyKeyReader<File> {
    /// Open the terminal device and put it into key-at-a-time mode.
    pub fn open(path: &Path) -> Result<Self, TerminalError> {
        let open_err = |source| TerminalError::Open {
            path: path.to_path_buf(),
            source,
        };
        let device = File::open(path).map_err(open_err)?;
        let control = device.try_clone().map_err(open_err)?;

        let original = termios::tcgetattr(&control).map_err(|e| TerminalError::Mode(e.into()))?;
        let mut raw = original.clone();
        raw.input_flags.remove(
            InputFlags::ISTRIP | InputFlags::INLCR | InputFlags::ICRNL | InputFlags::IGNCR | InputFlags::IXOFF,
        );
        raw.local_flags.remove(LocalFlags::ECHO | LocalFlags::ICANON);
        raw.control_chars[SpecialCharacterIndices::VMIN as usize] = 1;
        raw.control_chars[SpecialCharacterIndices::VTIME as usize] = 0;
        termios::tcsetattr(&control, SetArg::TCSANOW, &raw).map_err(|e| TerminalError::Mode(e.into()))?;

        tracing::debug!(path = %path.display(), "Terminal switched to key mode");

        Ok(Self {
            input: Mutex::new(Input {
                reader: BufReader::new(device),
                pending: PendingKey::new(),
            }),
            saved: Mutex::new(Some(SavedMode {
                device: control,
                termios: original,
            })),
        })
    }
}

impl<R: Read> TtyKeyReader<R> {
    /// Read keys from an arbitrary byte stream without touching any terminal
    /// mode.
    pub fn from_reader(reader: R) -> Self {
        Self {
            input: Mutex::new(Input {
                reader: BufReader::new(reader),
                pending: PendingKey::new(),
            }),
            saved: Mutex::new(None),
        }
    }
}

impl<R> TtyKeyReader<R> {
    fn restore(&self) {
        let Ok(mut saved) = self.saved.lock() else {
            return;
        };
        if let Some(mode) = saved.take() {
            match termios::tcsetattr(&mode.device, SetArg::TCSANOW, &mode.termios) {
                Ok(()) => tracing::debug!("Terminal mode restored"),
                Err(e) => tracing::warn!(error = %e, "Failed to restore terminal mode"),
            }
        }
    }
}

impl<R: Read + Send> KeyReader for TtyKeyReader<R> {
    fn read_key(&self) -> Option<char> {
        let mut guard = self.input.lock().ok()?;
        let input = &mut *guard;

        let byte = match input.reader.fill_buf() {
            Ok([]) => {
                thread::sleep(IDLE_BACKOFF);
                return None;
            }
            Ok(buf) => buf[0],
            Err(e) if e.kind() == io::ErrorKind::Interrupted => return None,
            Err(e) => {
                tracing::debug!(error = %e, "Terminal read failed");
                thread::sleep(IDLE_BACKOFF);
                return None;
            }
        };
        input.reader.consume(1);

        let more_buffered = !input.reader.buffer().is_empty();
        input.pending.push(byte, more_buffered)
    }

    fn close(&self) {
        self.restore();
    }
}

impl<R> Drop for TtyKeyReader<R> {
    fn drop(&mut self) {
        self.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Yields one chunk per `read` call, like separate terminal reads.
    struct Chunks(VecDeque<Vec<u8>>);

    impl Read for Chunks {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.0.pop_front() {
                Some(chunk) => {
                    buf[..chunk.len()].copy_from_slice(&chunk);
                    Ok(chunk.len())
                }
                None => Ok(0),
            }
        }
    }

    fn reader(chunks: &[&[u8]]) -> TtyKeyReader<Chunks> {
        TtyKeyReader::from_reader(Chunks(chunks.iter().map(|c| c.to_vec()).collect()))
    }

    #[test]
    fn test_separate_presses() {
        let reader = reader(&[b"a", b"S", b"d"]);
        assert_eq!(reader.read_key(), Some('a'));
        assert_eq!(reader.read_key(), Some('S'));
        assert_eq!(reader.read_key(), Some('d'));
    }

    #[test]
    fn test_arrow_key_is_not_three_presses() {
        let reader = reader(&[b"\x1b[D", b"s"]);
        assert_eq!(reader.read_key(), None);
        assert_eq!(reader.read_key(), None);
        assert_eq!(reader.read_key(), None);
        assert_eq!(reader.read_key(), Some('s'));
    }

    #[test]
    fn test_read_error_is_no_key() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "gone"))
            }
        }

        let reader = TtyKeyReader::from_reader(Broken);
        assert_eq!(reader.read_key(), None);
    }

    #[test]
    fn test_close_without_saved_mode() {
        let reader = reader(&[b"a"]);
        reader.close();
        reader.close();
        assert_eq!(reader.read_key(), Some('a'));
    }
}
