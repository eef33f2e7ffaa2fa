//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with the catch-all mock handler
//! - Wire up middleware (tracing)
//! - Bind server to listener
//! - Capture a selector snapshot per request and resolve against it
//! - Apply the artificial delay and write the access line

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::Request,
    response::{IntoResponse, Response},
    Router,
};
use chrono::Local;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::http::request::{decode_path, normalize, request_segments, PathPrefix};
use crate::http::response::Outcome;
use crate::observability::{AccessEntry, Console};
use crate::routing::{resolve, Resolution, RouteTable};
use crate::selector::{SelectorState, Snapshot};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RouteTable>,
    pub selector: Arc<SelectorState>,
    pub prefix: PathPrefix,
    pub console: Arc<Console>,
}

impl AppState {
    /// Decide the outcome for a request path and method under `snapshot`.
    pub fn outcome(&self, path: &str, method: &str, snapshot: &Snapshot) -> Outcome {
        let Some(rest) = self.prefix.strip(path) else {
            return Outcome::InvalidPrefix;
        };
        let normalized = normalize(rest);
        let resolution = match request_segments(&normalized) {
            Some(segments) => resolve(&self.table, &segments, method, snapshot),
            None => Resolution::not_found(),
        };
        Outcome::Resolved(resolution)
    }
}

/// HTTP server for the mock API.
pub struct MockServer {
    router: Router,
}

impl MockServer {
    /// Create a server answering from `table` under the live `selector`.
    pub fn new(
        config: &ServerConfig,
        table: Arc<RouteTable>,
        selector: Arc<SelectorState>,
        console: Arc<Console>,
    ) -> Self {
        let state = AppState {
            table,
            selector,
            prefix: PathPrefix::new(config.prefix.clone()),
            console,
        };
        Self {
            router: Self::build_router(state),
        }
    }

    /// Every path and method reaches the mock handler.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .fallback(mock_handler)
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// The router, for serving on a custom transport or in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve on `listener` until `shutdown` completes.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Catch-all handler.
/// Snapshots the selector once, resolves, logs, sleeps the delay and answers.
async fn mock_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let snapshot = state.selector.snapshot();

    let remote = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let method = request.method().as_str().to_string();
    let path = decode_path(request.uri().path()).into_owned();

    let outcome = state.outcome(&path, &method, &snapshot);
    let status = outcome.status();
    let delay = snapshot.delay();

    tracing::debug!(
        status,
        method = %method,
        path = %path,
        remote = ?remote,
        delay_ms = delay.as_millis(),
        "Mock request"
    );
    state.console.access(&AccessEntry {
        time: Local::now(),
        status,
        method,
        path,
        remote,
    });

    if !delay.is_off() {
        tokio::time::sleep(delay.as_duration()).await;
    }

    outcome.into_response()
}
