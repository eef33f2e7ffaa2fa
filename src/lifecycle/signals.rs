//! OS signal handling.
//!
//! # Responsibilities
//! - Wait for SIGINT (Ctrl+C) or SIGTERM
//! - Restore the terminal and exit the process
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Process-exit model: in-flight requests are not drained
//! - A handler that cannot be installed is logged and never fires

use std::sync::Arc;

use crate::observability::Console;
use crate::terminal::KeyReader;

/// Resolve when the process is asked to terminate.
pub async fn termination() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Wait for termination, release the terminal and exit with status 0.
pub async fn exit_on_termination(reader: Option<Arc<dyn KeyReader>>, console: Arc<Console>) {
    termination().await;
    tracing::info!("Termination signal received");

    console.finish();
    if let Some(reader) = reader {
        reader.close();
    }
    std::process::exit(0);
}
