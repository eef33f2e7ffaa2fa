//! JSON Mock API
//!
//! Serves JSON payloads from a route file. The status code and delay of
//! every response are switched live from the terminal.
//!
//! # Architecture Overview
//!
//! ```text
//!     mock.json ──▶ config::loader ──▶ routing::RouteTable ──┐
//!                                                            │
//!     Client Request        ┌─────────┐    ┌──────────────┐  │
//!     ─────────────────────▶│  http   │───▶│   routing    │◀─┘
//!                           │ server  │    │   resolver   │
//!     Client Response       │         │    └──────▲───────┘
//!     ◀─────────────────────│         │           │ snapshot
//!                           └─────────┘    ┌──────┴───────┐
//!                                          │   selector   │
//!     Terminal keys ──▶ terminal ──▶ interactive ──▶ (status, delay)
//! ```

use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use json_mock_api::config::{load_routes, Cli};
use json_mock_api::interactive::InteractiveController;
use json_mock_api::lifecycle::{signals, startup};
use json_mock_api::observability::{logging, Console};
use json_mock_api::{terminal, MockServer, SelectorState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if Cli::wants_help(std::env::args()) {
        Cli::print_help()?;
        return Ok(());
    }

    let config = Cli::parse().into_config();
    logging::init(&config.log_level);

    tracing::info!(
        port = config.port,
        prefix = %config.prefix,
        mock_file = %config.mock_file.display(),
        interactive = config.interactive,
        "json-mock-api starting"
    );

    let table = match load_routes(&config.mock_file) {
        Ok(table) => Arc::new(table),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load route file");
            println!("ERROR: {}. Run help for more info.", e);
            return Ok(());
        }
    };

    let selector = Arc::new(SelectorState::new(table.codes()));
    let console = Arc::new(Console::stdout());

    let reader = if config.interactive {
        match terminal::open() {
            Ok(reader) => Some(reader),
            Err(e) => {
                tracing::error!(error = %e, "Failed to open terminal");
                println!("ERROR: {}. Run with --no-keys to serve without a terminal.", e);
                return Ok(());
            }
        }
    } else {
        None
    };

    let listener = TcpListener::bind(config.bind_address()).await?;

    if let Some(reader) = &reader {
        InteractiveController::new(reader.clone(), selector.clone(), console.clone()).spawn()?;
    }
    tokio::spawn(signals::exit_on_termination(reader, console.clone()));

    console.print(&startup::banner(&config, &table, startup::lan_address()));

    let server = MockServer::new(&config, table, selector, console);
    server.run(listener, std::future::pending()).await?;

    Ok(())
}
