mod clients;
mod config;
mod domain;
mod error;
mod http;
mod messages;
mod stores;
mod system;

#[cfg(test)]
mod mock_framework;

use std::net::SocketAddr;

use tracing::{error, info};

use crate::config::Config;
use crate::http::AppState;
use crate::system::{setup_tracing, MarketSystem};

#[tokio::main]
async fn main() -> Result<(), String> {
    dotenvy::dotenv().ok();

    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::from_env();
    info!(host = %config.host, port = config.port, "Starting city-market");

    // Create the entire market system (starts all store actors)
    let system = MarketSystem::new();

    let state = AppState {
        user_client: system.user_client.clone(),
        catalog_client: system.catalog_client.clone(),
        purchase_client: system.purchase_client.clone(),
    };
    let router = http::router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| format!("invalid listen address: {}", e))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("bind failed: {}", e))?;
    info!(%addr, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("server error: {}", e))?;

    // Shutdown the actor system gracefully once the server has drained
    system.shutdown().await?;

    info!("city-market stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
}
