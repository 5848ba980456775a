//! Envelope format for relayed webhook deliveries.
//!
//! The destination receives the provider headers of interest plus the
//! original JSON body, wrapped in a single JSON object. Header names are
//! preserved exactly as drchrono documents them so downstream consumers
//! can verify signatures against the original delivery.

use serde::{Deserialize, Serialize};

/// Payload POSTed to the relay destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryEnvelope {
    /// Provider headers extracted from the inbound request
    pub headers: EnvelopeHeaders,
    /// Original JSON body of the delivery (empty object when absent or malformed)
    pub body: serde_json::Value,
}

/// The subset of inbound headers forwarded with every delivery.
///
/// Serialized field names match the wire-format header names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvelopeHeaders {
    /// Event type, e.g. `patient.updated`
    #[serde(rename = "X-drchrono-event")]
    pub event: String,
    /// Provider signature over the delivery
    #[serde(rename = "X-drchrono-signature")]
    pub signature: String,
    /// Unique delivery identifier assigned by the provider
    #[serde(rename = "X-drchrono-delivery")]
    pub delivery_id: String,
    /// Content type of the inbound body
    #[serde(rename = "Content-Type")]
    pub content_type: String,
}

impl DeliveryEnvelope {
    /// Build an envelope from extracted header values and the parsed body.
    pub fn new(headers: EnvelopeHeaders, body: serde_json::Value) -> Self {
        Self { headers, body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_serialization() {
        let envelope = DeliveryEnvelope::new(
            EnvelopeHeaders {
                event: "patient.updated".to_string(),
                signature: "abc".to_string(),
                delivery_id: "123".to_string(),
                content_type: "application/json".to_string(),
            },
            json!({"receiver": "X", "object": "Y"}),
        );

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({
                "headers": {
                    "X-drchrono-event": "patient.updated",
                    "X-drchrono-signature": "abc",
                    "X-drchrono-delivery": "123",
                    "Content-Type": "application/json"
                },
                "body": {"receiver": "X", "object": "Y"}
            })
        );
    }

    #[test]
    fn test_envelope_deserializes_wire_names() {
        let raw = r#"{"headers":{"X-drchrono-event":"appointment.created","X-drchrono-signature":"","X-drchrono-delivery":"d-1","Content-Type":"application/json"},"body":{}}"#;
        let envelope: DeliveryEnvelope = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.headers.event, "appointment.created");
        assert_eq!(envelope.headers.delivery_id, "d-1");
        assert_eq!(envelope.body, json!({}));
    }
}
