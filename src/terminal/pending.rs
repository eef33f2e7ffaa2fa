//! Pending key buffer.
//!
//! Bytes are accumulated while the input stream still holds unread bytes
//! from the same read. Once it is drained the accumulated bytes are taken as
//! one logical key, so an escape sequence such as an arrow key is never
//! mistaken for several key presses.

#[derive(Debug, Default)]
pub struct PendingKey {
    bytes: Vec<u8>,
}

impl PendingKey {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one byte. Returns the key once `more_buffered` is false and the
    /// accumulated bytes decode to exactly one character; the buffer is reset
    /// whenever a decision is made.
    pub fn push(&mut self, byte: u8, more_buffered: bool) -> Option<char> {
        self.bytes.push(byte);
        if more_buffered {
            return None;
        }
        let key = decode(&self.bytes);
        self.bytes.clear();
        key
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

fn decode(bytes: &[u8]) -> Option<char> {
    let text = std::str::from_utf8(bytes).ok()?;
    let mut chars = text.chars();
    let key = chars.next()?;
    chars.next().is_none().then_some(key)
}
