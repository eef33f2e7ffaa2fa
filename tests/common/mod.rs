//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use json_mock_api::config::parse_routes;
use json_mock_api::observability::Console;
use json_mock_api::{MockServer, SelectorState, ServerConfig, Shutdown};
use tokio::net::TcpListener;

/// A server running on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub selector: Arc<SelectorState>,
    pub shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start a mock server answering from `routes` under `prefix`.
pub async fn start_server(routes: &str, prefix: &str) -> TestServer {
    let table = Arc::new(parse_routes(routes).unwrap());
    let selector = Arc::new(SelectorState::new(table.codes()));
    let config = ServerConfig {
        port: 0,
        prefix: prefix.to_string(),
        interactive: false,
        ..ServerConfig::default()
    };
    let console = Arc::new(Console::new(Box::new(std::io::sink())));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();

    let server = MockServer::new(&config, table, selector.clone(), console);
    tokio::spawn(server.run(listener, shutdown.wait()));

    TestServer {
        addr,
        selector,
        shutdown,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
