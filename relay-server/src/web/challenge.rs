//! drchrono verification challenge response.
//!
//! During webhook setup drchrono issues a GET carrying a `msg` parameter
//! and expects back the HMAC-SHA256 hex digest of that message keyed by
//! the shared secret token.
//! Reference: https://drchrono.com/api-docs/ (webhook verification)

use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::warn;

type HmacSha256 = Hmac<Sha256>;

/// Compute the hex digest that answers a verification challenge.
///
/// Returns `None` when the secret cannot be used as an HMAC key.
pub fn challenge_digest(secret_token: &str, msg: &str) -> Option<String> {
    let mut mac = match HmacSha256::new_from_slice(secret_token.as_bytes()) {
        Ok(m) => m,
        Err(_) => {
            warn!("challenge_invalid_key");
            return None;
        }
    };

    mac.update(msg.as_bytes());

    Some(hex::encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_challenge_digest_rfc4231_case_2() {
        // RFC 4231 test case 2
        assert_eq!(
            challenge_digest("Jefe", "what do ya want for nothing?").unwrap(),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_challenge_digest_known_vector() {
        assert_eq!(
            challenge_digest("key", "The quick brown fox jumps over the lazy dog").unwrap(),
            "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
        );
    }

    #[test]
    fn test_challenge_digest_empty_message() {
        // HMAC is defined for empty messages; the digest must still be stable
        let digest = challenge_digest("key", "").unwrap();
        assert_eq!(digest.len(), 64);
        assert_eq!(digest, challenge_digest("key", "").unwrap());
    }

    #[test]
    fn test_challenge_digest_depends_on_secret() {
        assert_ne!(
            challenge_digest("secret-a", "msg").unwrap(),
            challenge_digest("secret-b", "msg").unwrap()
        );
    }
}
