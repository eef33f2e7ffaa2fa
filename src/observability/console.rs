//! User-facing console output.
//!
//! # Responsibilities
//! - Print the startup banner
//! - Print one access line per request
//! - Render key feedback in place
//!
//! # Design Decisions
//! - Consecutive feedback of the same kind rewrites the current line
//!   (carriage return); a change of kind or an access line in between
//!   starts a fresh line
//! - Write errors are ignored: the console never fails a request

use std::fmt;
use std::io::{self, Write};
use std::net::SocketAddr;
use std::sync::Mutex;

use chrono::{DateTime, Local};

use crate::selector::Feedback;

/// Wide enough to blank the longest feedback line.
const CLEAR_LINE: &str = "                        ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LastLine {
    Other,
    Access,
    Status,
    Delay,
}

struct Inner {
    out: Box<dyn Write + Send>,
    last: LastLine,
}

/// Serialized writer shared by the request handlers and the controller.
pub struct Console {
    inner: Mutex<Inner>,
}

impl Console {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                out,
                last: LastLine::Other,
            }),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// Write `text` verbatim.
    pub fn print(&self, text: &str) {
        self.write(LastLine::Other, |out, _| out.write_all(text.as_bytes()));
    }

    /// Render a selector change.
    pub fn feedback(&self, feedback: &Feedback) {
        let kind = match feedback {
            Feedback::Status(_) => LastLine::Status,
            Feedback::Delay(_) => LastLine::Delay,
        };
        self.write(kind, |out, last| {
            let br = if last == kind { "" } else { "\n" };
            write!(out, "{br}\r{CLEAR_LINE}\r{feedback}")
        });
    }

    /// Print one access line.
    pub fn access(&self, entry: &AccessEntry) {
        self.write(LastLine::Access, |out, _| write!(out, "\n{entry}"));
    }

    /// Move past the current line before the process exits.
    pub fn finish(&self) {
        self.write(LastLine::Other, |out, _| writeln!(out));
    }

    fn write<F>(&self, kind: LastLine, f: F)
    where
        F: FnOnce(&mut (dyn Write + Send), LastLine) -> io::Result<()>,
    {
        let Ok(mut guard) = self.inner.lock() else {
            return;
        };
        let inner = &mut *guard;
        let result = f(inner.out.as_mut(), inner.last);
        let _ = result.and_then(|()| inner.out.flush());
        inner.last = kind;
    }
}

/// One handled request as shown on the console.
#[derive(Debug, Clone)]
pub struct AccessEntry {
    pub time: DateTime<Local>,
    pub status: u16,
    pub method: String,
    pub path: String,
    pub remote: Option<SocketAddr>,
}

impl fmt::Display for AccessEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} ",
            self.time.format("%H:%M:%S%.3f"),
            self.status,
            self.method,
            self.path
        )?;
        match self.remote {
            Some(remote) => write!(f, "{}", remote),
            None => write!(f, "-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::CodeSlot;
    use crate::selector::Delay;
    use chrono::TimeZone;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Shared(Arc<Mutex<Vec<u8>>>);

    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Shared {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn entry() -> AccessEntry {
        AccessEntry {
            time: Local.with_ymd_and_hms(2024, 5, 1, 9, 30, 15).unwrap(),
            status: 201,
            method: "POST".into(),
            path: "/books".into(),
            remote: Some("127.0.0.1:50000".parse().unwrap()),
        }
    }

    #[test]
    fn test_access_entry_format() {
        assert_eq!(entry().to_string(), "09:30:15.000 201 POST /books 127.0.0.1:50000");

        let anonymous = AccessEntry { remote: None, ..entry() };
        assert!(anonymous.to_string().ends_with("/books -"));
    }

    #[test]
    fn test_same_kind_feedback_rewrites_line() {
        let buf = Shared::default();
        let console = Console::new(Box::new(buf.clone()));

        console.feedback(&Feedback::Delay(Delay::from_millis(600)));
        console.feedback(&Feedback::Delay(Delay::from_millis(1200)));

        let text = buf.text();
        assert_eq!(text.matches('\n').count(), 1);
        assert!(text.ends_with("\rDELAY: 1200ms"));
    }

    #[test]
    fn test_kind_change_starts_new_line() {
        let buf = Shared::default();
        let console = Console::new(Box::new(buf.clone()));

        console.feedback(&Feedback::Status(CodeSlot::Code(404)));
        console.feedback(&Feedback::Delay(Delay::OFF));
        console.access(&entry());
        console.feedback(&Feedback::Delay(Delay::from_millis(600)));

        let text = buf.text();
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[1].ends_with("STATUS CODE: 404"));
        assert!(lines[2].ends_with("DELAY: off"));
        assert!(lines[3].starts_with("09:30:15.000 201 POST"));
        assert!(lines[4].ends_with("DELAY: 600ms"));
    }
}
