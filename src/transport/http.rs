//! HTTP transport for the todo API.
//!
//! Builds the axum router around a shared [`ConnectionManager`] and serves it until
//! SIGINT or SIGTERM. Closing the pool is left to the caller, which owns the manager.

use crate::db::ConnectionManager;
use crate::error::{DbError, DbResult};
use crate::handlers;
use axum::Router;
use axum::routing::{get, post, put};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// How long in-flight requests get to finish after a shutdown signal.
const GRACEFUL_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the todo router with the manager injected as state.
pub fn router(connection_manager: Arc<ConnectionManager>) -> Router {
    Router::new()
        .route("/", get(handlers::list_items))
        .route("/todo", post(handlers::create_item))
        .route(
            "/todo/{item_id}",
            put(handlers::update_item).delete(handlers::delete_item),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(connection_manager)
}

/// HTTP transport bound to a host and port.
pub struct HttpTransport {
    connection_manager: Arc<ConnectionManager>,
    host: String,
    port: u16,
}

impl HttpTransport {
    /// Create a new HTTP transport.
    ///
    /// # Arguments
    ///
    /// * `connection_manager` - Shared connection manager, already started
    /// * `host` - Host address to bind to
    /// * `port` - Port to bind to
    pub fn new(
        connection_manager: Arc<ConnectionManager>,
        host: impl Into<String>,
        port: u16,
    ) -> Self {
        Self {
            connection_manager,
            host: host.into(),
            port,
        }
    }

    /// Get the bind address.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Serve until a shutdown signal arrives and in-flight requests drain,
    /// or until [`GRACEFUL_TIMEOUT`] / a second signal forces the exit.
    pub async fn run(&self) -> DbResult<()> {
        let bind_addr = self.bind_addr();
        let app = router(self.connection_manager.clone());

        let listener = TcpListener::bind(&bind_addr).await.map_err(|e| {
            DbError::connection(
                format!("Failed to bind to {}: {}", bind_addr, e),
                "Check that the port is available",
            )
        })?;

        info!(addr = %bind_addr, "Todo API listening");

        let shutdown_notify = Arc::new(tokio::sync::Notify::new());
        let shutdown_notify_clone = shutdown_notify.clone();

        let shutdown_signal = async move {
            wait_for_signal().await;
            shutdown_notify_clone.notify_one();
        };

        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal);

        tokio::select! {
            result = server => {
                match result {
                    Ok(()) => info!("HTTP server stopped"),
                    Err(e) => {
                        error!(error = %e, "HTTP server error");
                        return Err(DbError::internal(format!("HTTP server error: {}", e)));
                    }
                }
            }
            _ = async {
                shutdown_notify.notified().await;
                info!(
                    timeout_secs = GRACEFUL_TIMEOUT.as_secs(),
                    "Waiting for requests to finish (send signal again to force exit)..."
                );

                tokio::select! {
                    _ = tokio::time::sleep(GRACEFUL_TIMEOUT) => {
                        warn!("Graceful shutdown timeout, forcing exit");
                    }
                    _ = wait_for_signal() => {
                        warn!("Received second signal, forcing immediate exit");
                    }
                }
            } => {}
        }

        Ok(())
    }
}

/// Wait for a shutdown signal (SIGINT or SIGTERM).
async fn wait_for_signal() {
    let ctrl_c = signal::ctrl_c();

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
