//! Command line parsing.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::config::schema::{normalize_prefix, ServerConfig, DEFAULT_MOCK_FILE, DEFAULT_PORT};

/// Key legend and route file format, appended to `--help`.
pub const HELP_DETAILS: &str = r#"COMMANDS
  a, s    change status code
  d       toggle delay
  ctrl+c  stop server

EXAMPLES
  $ json-mock-api
  $ json-mock-api --port 3000 --prefix api/v1

MOCK ROUTES (mock.json)
  PATH: {
    METHOD: {
      CODE: PAYLOAD
    }
  }

  Example:
    {
      "/books": {
        "GET": {
          "200": { "books": [] }
        }
      },
      "/books/:id/reviews": {
        "POST": {
          "201": { "error": false },
          "400": { "error": true }
        },
        "GET": {
          "200": { "reviews": [] }
        }
      }
    }"#;

#[derive(Parser, Debug)]
#[command(
    name = "json-mock-api",
    about = "Serve mock JSON responses from a route file",
    version,
    after_long_help = HELP_DETAILS
)]
pub struct Cli {
    /// Server port
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Routes prefix (e.g. api/v1)
    #[arg(long, default_value = "")]
    pub prefix: String,

    /// Route file
    #[arg(short, long, default_value = DEFAULT_MOCK_FILE)]
    pub file: PathBuf,

    /// Serve without reading keys from the terminal
    #[arg(long)]
    pub no_keys: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Returns true when the first argument is the bare word `help`.
    pub fn wants_help<I, S>(args: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        args.into_iter().nth(1).is_some_and(|arg| arg.as_ref() == "help")
    }

    /// Print the long help text to stdout.
    pub fn print_help() -> std::io::Result<()> {
        Self::command().print_long_help()
    }

    pub fn into_config(self) -> ServerConfig {
        ServerConfig {
            port: self.port,
            prefix: normalize_prefix(&self.prefix),
            mock_file: self.file,
            interactive: !self.no_keys,
            log_level: self.log_level,
        }
    }
}
