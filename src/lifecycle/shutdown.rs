//! Shutdown coordination for embedded servers.

use std::future::Future;

use tokio::sync::broadcast;

/// Broadcast trigger that stops a [`MockServer`](crate::http::MockServer).
///
/// The binary exits the process on a termination signal instead; this is
/// for embedding the server and for tests.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// A future completing on the next trigger, to hand to
    /// `MockServer::run`.
    pub fn wait(&self) -> impl Future<Output = ()> + Send + 'static {
        let mut rx = self.tx.subscribe();
        async move {
            let _ = rx.recv().await;
        }
    }

    /// Stop every subscribed server.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
