//! Webhook endpoint handlers.
//!
//! These handlers are intentionally thin - they only:
//! 1. Extract the provider headers and JSON body
//! 2. Forward the envelope to the configured destination
//! 3. Acknowledge the provider
//!
//! The delivery endpoint acknowledges with 200 no matter how the relay
//! went: a non-2xx response would trigger the provider's re-delivery,
//! and failed relays are an operator concern, not a provider concern.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::relay::{DeliveryEnvelope, EnvelopeHeaders, Forwarder, RelayError};
use crate::web::challenge::challenge_digest;
use crate::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub forwarder: Forwarder,
}

impl AppState {
    pub fn new(config: Config, forwarder: Forwarder) -> Self {
        Self {
            config: Arc::new(config),
            forwarder,
        }
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "webhook relay is running",
    })
}

// =============================================================================
// Verification Challenge
// =============================================================================

/// Query parameters for the verification challenge.
#[derive(Debug, Deserialize)]
pub struct VerifyParams {
    /// Challenge string supplied by the provider
    pub msg: String,
}

/// Verification challenge response.
///
/// On success only `secret_token` is present; on misconfiguration only
/// `error` is.
#[derive(Serialize)]
pub struct VerifyResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

/// Verification challenge endpoint.
///
/// Answers the provider's setup handshake with the HMAC-SHA256 digest of
/// the supplied message. Refuses with 500 while the secret still carries
/// its placeholder value.
pub async fn verify_challenge(
    State(state): State<AppState>,
    Query(params): Query<VerifyParams>,
) -> impl IntoResponse {
    info!(msg_length = params.msg.len(), "verification_requested");

    if !state.config.secret_configured() {
        error!("verification_secret_not_configured");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(VerifyResponse {
                secret_token: None,
                error: Some("verification failed"),
            }),
        );
    }

    match challenge_digest(&state.config.secret_token, &params.msg) {
        Some(digest) => {
            info!("verification_succeeded");
            (
                StatusCode::OK,
                Json(VerifyResponse {
                    secret_token: Some(digest),
                    error: None,
                }),
            )
        }
        None => {
            error!("verification_digest_failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(VerifyResponse {
                    secret_token: None,
                    error: Some("verification failed"),
                }),
            )
        }
    }
}

// =============================================================================
// Webhook Delivery
// =============================================================================

/// Acknowledgment returned to the provider for every delivery.
#[derive(Serialize)]
pub struct RelayAck {
    pub status: &'static str,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relay_status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_id: Option<String>,
}

/// Webhook delivery endpoint.
///
/// This endpoint:
/// 1. Extracts the drchrono headers and JSON body
/// 2. Forwards the envelope to the configured destination
/// 3. Returns 200 OK regardless of the relay outcome
pub async fn receive_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let envelope_headers = extract_envelope_headers(&headers);

    info!(
        event = %envelope_headers.event,
        delivery_id = %envelope_headers.delivery_id,
        body_length = body.len(),
        "webhook_received"
    );

    let json_body = if body.is_empty() {
        serde_json::Value::Object(serde_json::Map::new())
    } else {
        match serde_json::from_slice(&body) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "webhook_body_not_json");
                serde_json::Value::Object(serde_json::Map::new())
            }
        }
    };

    let envelope = DeliveryEnvelope::new(envelope_headers, json_body);

    match state.forwarder.forward(&envelope).await {
        Ok(relay_status) => (
            StatusCode::OK,
            Json(RelayAck {
                status: "success",
                message: "webhook received and relayed",
                relay_status_code: Some(relay_status.as_u16()),
                event: Some(envelope.headers.event),
                delivery_id: Some(envelope.headers.delivery_id),
            }),
        ),
        Err(e @ RelayError::Timeout { .. }) => {
            error!(error = %e, "relay_forward_timeout");
            (
                StatusCode::OK,
                Json(RelayAck {
                    status: "timeout",
                    message: "webhook received but relay timed out",
                    relay_status_code: None,
                    event: None,
                    delivery_id: None,
                }),
            )
        }
        Err(e) => {
            error!(error = %e, "relay_forward_failed");
            (
                StatusCode::OK,
                Json(RelayAck {
                    status: "error",
                    message: "webhook received but relay failed",
                    relay_status_code: None,
                    event: None,
                    delivery_id: None,
                }),
            )
        }
    }
}

/// Pull the provider headers of interest out of the inbound request.
///
/// Missing headers fall back to the same defaults the provider docs use:
/// `unknown` for the event, empty strings for signature and delivery id,
/// `application/json` for the content type.
fn extract_envelope_headers(headers: &HeaderMap) -> EnvelopeHeaders {
    let header = |name: &str, default: &str| -> String {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(default)
            .to_string()
    };

    EnvelopeHeaders {
        event: header("x-drchrono-event", "unknown"),
        signature: header("x-drchrono-signature", ""),
        delivery_id: header("x-drchrono-delivery", ""),
        content_type: header("content-type", "application/json"),
    }
}

// =============================================================================
// Configuration Status
// =============================================================================

/// Configuration status response.
#[derive(Serialize)]
pub struct StatusResponse {
    pub configured: bool,
    pub secret_set: bool,
    pub relay_url_set: bool,
    pub relay_timeout_seconds: u64,
}

/// Configuration status endpoint.
///
/// Reports whether the secret and destination still carry their
/// placeholder defaults, without echoing either value.
pub async fn webhook_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let secret_set = state.config.secret_configured();
    let relay_url_set = state.config.relay_url_configured();

    Json(StatusResponse {
        configured: secret_set && relay_url_set,
        secret_set,
        relay_url_set,
        relay_timeout_seconds: state.config.relay_timeout_seconds,
    })
}
