//! Configuration module for environment variable parsing.
//!
//! Reads all configuration from environment variables once at startup;
//! the resulting `Config` is immutable for the process lifetime.

use std::env;
use std::time::Duration;

/// Placeholder secret token shipped in the deployment docs.
///
/// A secret equal to this value counts as "not configured".
pub const DEFAULT_SECRET_TOKEN: &str = "your-secret-token-here";

/// Placeholder relay destination shipped in the deployment docs.
pub const DEFAULT_RELAY_URL: &str = "https://your-destination-url.com/webhook";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Shared secret used to answer the drchrono verification challenge
    pub secret_token: String,

    /// Destination URL that received webhooks are forwarded to
    pub relay_url: String,

    /// Timeout in seconds for the outbound relay request
    pub relay_timeout_seconds: u64,

    /// Port for the web server to listen on
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            secret_token: env::var("WEBHOOK_SECRET_TOKEN")
                .unwrap_or_else(|_| DEFAULT_SECRET_TOKEN.to_string()),

            relay_url: env::var("RELAY_URL").unwrap_or_else(|_| DEFAULT_RELAY_URL.to_string()),

            relay_timeout_seconds: env::var("RELAY_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),

            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
        }
    }

    /// Whether the verification secret has been set to a real value.
    pub fn secret_configured(&self) -> bool {
        !self.secret_token.is_empty() && self.secret_token != DEFAULT_SECRET_TOKEN
    }

    /// Whether the relay destination has been set to a real value.
    pub fn relay_url_configured(&self) -> bool {
        !self.relay_url.is_empty() && self.relay_url != DEFAULT_RELAY_URL
    }

    /// Outbound relay timeout as a `Duration`.
    pub fn relay_timeout(&self) -> Duration {
        Duration::from_secs(self.relay_timeout_seconds)
    }
}
