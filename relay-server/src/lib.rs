//! Cameo Relay - webhook relay for drchrono event deliveries.
//!
//! This library backs the `cameo-relay` binary and exposes the router so
//! integration tests can drive the full HTTP surface.
//!
//! ## Architecture
//!
//! ```text
//! drchrono → Web Server → DeliveryEnvelope → Forwarder → RELAY_URL
//! ```

pub mod config;
pub mod relay;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use relay::{DeliveryEnvelope, EnvelopeHeaders, Forwarder, RelayError};
pub use web::{router, AppState};
