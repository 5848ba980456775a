//! Async forwarder for the outbound relay call.
//!
//! The forwarder owns a shared HTTP client and issues one POST per inbound
//! delivery. Failures are classified so the handler can report the relay
//! outcome without ever failing the inbound request.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{error, info};

use super::envelope::DeliveryEnvelope;
use crate::Config;

/// User-Agent sent on every outbound relay request.
pub const RELAY_USER_AGENT: &str = "Cameo-Webhook-Relay/1.0";

/// Why an outbound relay call failed.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("relay to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    #[error("relay to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Outbound relay client with a fixed destination and timeout.
#[derive(Clone)]
pub struct Forwarder {
    client: Client,
    relay_url: String,
    timeout: Duration,
}

impl Forwarder {
    /// Create a forwarder for the configured destination.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(RELAY_USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            relay_url: config.relay_url.clone(),
            timeout: config.relay_timeout(),
        })
    }

    /// Destination URL this forwarder posts to.
    pub fn relay_url(&self) -> &str {
        &self.relay_url
    }

    /// POST the envelope to the destination.
    ///
    /// Returns the destination's HTTP status on any completed exchange;
    /// non-2xx destination responses are logged but are not errors.
    pub async fn forward(&self, envelope: &DeliveryEnvelope) -> Result<StatusCode, RelayError> {
        info!(
            relay_url = %self.relay_url,
            event = %envelope.headers.event,
            delivery_id = %envelope.headers.delivery_id,
            timeout_seconds = self.timeout.as_secs_f64(),
            "relay_forward_starting"
        );

        let response = self
            .client
            .post(&self.relay_url)
            .timeout(self.timeout)
            .json(envelope)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RelayError::Timeout {
                        url: self.relay_url.clone(),
                        timeout: self.timeout,
                    }
                } else {
                    RelayError::Request {
                        url: self.relay_url.clone(),
                        source: e,
                    }
                }
            })?;

        let status = response.status();
        if status.is_success() {
            info!(
                relay_url = %self.relay_url,
                status_code = status.as_u16(),
                "relay_forward_complete"
            );
        } else {
            error!(
                relay_url = %self.relay_url,
                status_code = status.as_u16(),
                "relay_forward_rejected"
            );
        }

        Ok(status)
    }
}
