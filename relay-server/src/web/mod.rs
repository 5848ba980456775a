//! Web server module for handling inbound webhooks.
//!
//! This module provides a thin web server that:
//! - Answers the provider's verification challenge
//! - Receives webhook deliveries and forwards them to the destination
//! - Reports configuration status
//!
//! Every request is handled statelessly; the only shared state is the
//! read-only configuration and the outbound HTTP client.

pub mod challenge;
pub mod handlers;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub use challenge::challenge_digest;
pub use handlers::{
    health, receive_webhook, verify_challenge, webhook_status, AppState, HealthResponse,
    RelayAck, StatusResponse, VerifyParams, VerifyResponse,
};

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/webhook", get(verify_challenge).post(receive_webhook))
        .route("/webhook/status", get(webhook_status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
