/**
 * Bearer Token Issuance and Verification
 *
 * This module handles creation and validation of the signed bearer tokens
 * returned by login.
 *
 * # Design
 *
 * - HMAC-SHA256 signatures; issuer and verifier are the same process, so a
 *   shared symmetric secret is sufficient
 * - The secret is loaded once at startup and injected through
 *   `TokenKeys::new`; nothing in this module reads the environment
 * - Tokens are not persisted anywhere. Validity is proven by signature and
 *   expiry alone, and there is no revocation: a token outlives even a
 *   password change until its natural expiry
 */

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Token validity window: 2 hours from issuance.
const TOKEN_TTL_SECS: u64 = 2 * 60 * 60;

/// Claims carried by a bearer token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id, as a string per JWT convention
    pub sub: String,
    /// Username at time of issuance
    pub username: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued-at time (Unix timestamp)
    pub iat: u64,
}

impl Claims {
    /// Parse the subject back into a numeric user id
    pub fn user_id(&self) -> Result<i64, ApiError> {
        self.sub
            .parse::<i64>()
            .map_err(|_| ApiError::Internal(format!("invalid user id in token: {}", self.sub)))
    }
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Token issuer/verifier keys
///
/// Built once from the configured secret and stored in the application
/// state; clones share the underlying keys.
#[derive(Clone)]
pub struct TokenKeys {
    keys: Arc<Keys>,
}

impl TokenKeys {
    /// Build the key pair from the shared signing secret
    pub fn new(secret: &[u8]) -> Self {
        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret),
                decoding: DecodingKey::from_secret(secret),
            }),
        }
    }

    /// Issue a signed token for an authenticated user
    ///
    /// The token binds the user id and username and expires 2 hours after
    /// issuance.
    pub fn issue(&self, user_id: i64, username: &str) -> Result<String, ApiError> {
        let now = unix_now();
        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            exp: now + TOKEN_TTL_SECS,
            iat: now,
        };

        encode(&Header::default(), &claims, &self.keys.encoding)
            .map_err(|e| ApiError::Internal(format!("token signing failed: {e}")))
    }

    /// Verify a token's signature and expiry and return its claims
    ///
    /// Any failure (bad signature, garbled token, expired) collapses to
    /// `Forbidden`; the middleware maps that to 403.
    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        decode::<Claims>(token, &self.keys.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::warn!("Token verification failed: {:?}", e);
                ApiError::Forbidden
            })
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_keys() -> TokenKeys {
        TokenKeys::new(b"test-secret")
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let keys = test_keys();
        let token = keys.issue(42, "alice").unwrap();

        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.user_id().unwrap(), 42);
        assert_eq!(claims.exp, claims.iat + TOKEN_TTL_SECS);
    }

    #[test]
    fn test_garbage_token_rejected() {
        let keys = test_keys();
        assert!(keys.verify("not.a.token").is_err());
        assert!(keys.verify("").is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = test_keys().issue(1, "alice").unwrap();
        let other = TokenKeys::new(b"different-secret");
        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let keys = test_keys();
        let mut token = keys.issue(1, "alice").unwrap();
        token.push('x');
        assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let keys = test_keys();
        let now = unix_now();
        // Well past the default validation leeway.
        let claims = Claims {
            sub: "1".to_string(),
            username: "alice".to_string(),
            exp: now - TOKEN_TTL_SECS,
            iat: now - 2 * TOKEN_TTL_SECS,
        };
        let token = encode(&Header::default(), &claims, &keys.keys.encoding).unwrap();
        assert!(keys.verify(&token).is_err());
    }
}
