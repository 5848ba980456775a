//! Cameo Relay Server - webhook receiver and forwarder.
//!
//! This binary provides a thin web server that:
//! - Answers drchrono's webhook verification challenge
//! - Receives webhook deliveries and relays them to `RELAY_URL`
//! - Reports configuration status
//!
//! Deliveries are always acknowledged with 200 so the provider never
//! re-delivers; relay failures surface in the logs instead.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use url::Url;

use cameo_relay::{router, AppState, Config, Forwarder};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured JSON logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    info!("relay_server_starting");

    // Load configuration
    let config = Config::from_env();
    info!(
        port = config.port,
        secret_configured = config.secret_configured(),
        relay_url_configured = config.relay_url_configured(),
        relay_timeout_seconds = config.relay_timeout_seconds,
        "config_loaded"
    );

    if Url::parse(&config.relay_url).is_err() {
        // Startup proceeds anyway; relay attempts will fail and be logged
        warn!(relay_url = %config.relay_url, "relay_url_not_parseable");
    }

    // Create the outbound forwarder
    let forwarder = Forwarder::new(&config)?;
    info!(relay_url = %forwarder.relay_url(), "forwarder_created");

    // Create application state and router
    let port = config.port;
    let state = AppState::new(config, forwarder);
    let app = router(state);

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!(address = %addr, "relay_server_listening");

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("relay_server_shutdown_complete");

    Ok(())
}

/// Create a future that completes when a shutdown signal is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT"),
        _ = terminate => info!("Received SIGTERM"),
    }

    info!("relay_server_shutting_down");
}
