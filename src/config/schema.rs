//! Server configuration.
//!
//! The server is configured from the command line only; route data comes
//! from the mock file (see `loader.rs`).

use std::path::PathBuf;

/// Default TCP port.
pub const DEFAULT_PORT: u16 = 9000;

/// Default route file, relative to the working directory.
pub const DEFAULT_MOCK_FILE: &str = "mock.json";

/// Root configuration for the mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// TCP port, bound on all interfaces.
    pub port: u16,

    /// Path prefix every request must carry, without surrounding slashes.
    /// Empty disables the gate.
    pub prefix: String,

    /// Route file to load at startup.
    pub mock_file: PathBuf,

    /// Read status/delay keys from the terminal.
    pub interactive: bool,

    /// Log level for this crate (trace, debug, info, warn, error).
    pub log_level: String,
}

impl ServerConfig {
    /// Address to bind the listener to.
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// The prefix as it appears in URLs: empty, or `/` followed by the
    /// prefix.
    pub fn url_prefix(&self) -> String {
        if self.prefix.is_empty() {
            String::new()
        } else {
            format!("/{}", self.prefix)
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            prefix: String::new(),
            mock_file: PathBuf::from(DEFAULT_MOCK_FILE),
            interactive: true,
            log_level: "warn".to_string(),
        }
    }
}

/// Strip leading and trailing slashes so `api/v1`, `/api/v1` and `/api/v1/`
/// configure the same prefix.
pub fn normalize_prefix(prefix: &str) -> String {
    prefix.trim_matches('/').to_string()
}
