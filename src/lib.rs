//! JSON Mock API library.
//!
//! Answers HTTP requests with JSON payloads picked from a route file by
//! path, method and a status code chosen live from the terminal.

pub mod config;
pub mod http;
pub mod interactive;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod selector;
pub mod terminal;

pub use config::ServerConfig;
pub use http::MockServer;
pub use lifecycle::Shutdown;
pub use routing::RouteTable;
pub use selector::SelectorState;
