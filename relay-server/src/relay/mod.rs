//! Relay module for the outbound leg of the webhook pipeline.
//!
//! This module provides:
//! - The envelope format forwarded to the destination
//! - An async forwarder that issues the outbound POST
//!
//! ## Architecture
//!
//! ```text
//! drchrono → Web Server → DeliveryEnvelope → Forwarder → RELAY_URL
//! ```

pub mod envelope;
pub mod forwarder;

pub use envelope::{DeliveryEnvelope, EnvelopeHeaders};
pub use forwarder::{Forwarder, RelayError, RELAY_USER_AGENT};
