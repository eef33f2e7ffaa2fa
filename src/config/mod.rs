//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! command line
//!     → cli.rs (clap parse, `help` shorthand)
//!     → ServerConfig (port, prefix, mock file, flags)
//!
//! mock file (JSON)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (per-entry checks, malformed entries skipped)
//!     → RouteTable (immutable, shared via Arc)
//! ```
//!
//! # Design Decisions
//! - Route data is loaded once; no reload while running
//! - Missing or malformed files are fatal, malformed entries are not
//! - All flags have defaults so the server runs with no arguments

pub mod cli;
pub mod loader;
pub mod schema;
pub mod validation;

pub use cli::Cli;
pub use loader::{load_routes, parse_routes, ConfigError};
pub use schema::ServerConfig;
