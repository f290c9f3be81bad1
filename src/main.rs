mod domain;
mod clients;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actors;
mod api;
mod error;
mod messages;
mod registry;

use std::env;

use tracing::{error, info};

use crate::app_system::{setup_tracing, RegistrySystem};

const DEFAULT_ADDR: &str = "127.0.0.1:8080";

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let addr = env::var("USER_REGISTRY_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    info!("Starting user registry service");

    let system = RegistrySystem::new();
    let app = api::router(system.registry_client.clone());

    // Bind failure is fatal; there is nothing to serve without a listener.
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", addr, e))?;

    info!(addr = %addr, "Listening for requests");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}

/// Resolves when ctrl-c is received.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
}
