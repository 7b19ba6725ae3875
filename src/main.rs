//! Todo Server - Main entry point.
//!
//! Loads configuration (with `.env` support), starts the connection manager,
//! serves the HTTP API and stops the manager once the server returns.

use clap::Parser;
use std::sync::Arc;
use todo_server::config::Config;
use todo_server::db::ConnectionManager;
use todo_server::error::DbError;
use todo_server::transport::HttpTransport;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the tracing subscriber for logging.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if config.json_logs {
        subscriber.with(fmt::layer().json()).init();
    } else {
        subscriber
            .with(fmt::layer().with_target(true).with_thread_ids(false))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; DB_SECRET may come from the real environment
    let _ = dotenvy::dotenv();

    let config = Config::parse();
    init_tracing(&config);

    info!(
        addr = %config.http_bind_addr(),
        "Starting todo server v{}",
        env!("CARGO_PKG_VERSION")
    );

    let db_config = config.database().map_err(DbError::config)?;

    let connection_manager = Arc::new(ConnectionManager::new());
    if let Err(e) = connection_manager.start(&db_config).await {
        error!(error = %e, suggestion = ?e.suggestion(), "Failed to start connection manager");
        return Err(e.into());
    }

    let transport = HttpTransport::new(
        connection_manager.clone(),
        &config.http_host,
        config.http_port,
    );
    let result = transport.run().await;

    connection_manager.stop().await;

    if let Err(e) = result {
        error!(error = %e, "Server error");
        return Err(e.into());
    }

    info!("Server shutdown complete");
    Ok(())
}
