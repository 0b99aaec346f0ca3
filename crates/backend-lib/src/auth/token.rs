// ============================
// crates/backend-lib/src/auth/token.rs
// ============================
//! Signed session tokens.
//!
//! Tokens are self-contained: validity is purely a function of signature
//! and expiry, so nothing is persisted server-side and there is no
//! revocation. A leaked token remains valid until it expires.
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Token lifetime. Every issuance (registration or login) opens a fresh
/// 7-day window.
pub const TOKEN_TTL_DAYS: i64 = 7;

/// Token payload: the user id plus issuance and expiry timestamps.
#[derive(Serialize, Deserialize, Debug)]
struct Claims {
    sub: Uuid,
    iat: usize,
    exp: usize,
}

/// Signing and verification keys derived from the configured secret.
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a signed token bound to `user_id`, expiring in 7 days.
    pub fn issue(&self, user_id: Uuid) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            iat: now.timestamp() as usize,
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp() as usize,
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(e.to_string()))
    }

    /// Check signature and expiry, returning the embedded user id.
    /// Malformed, mis-signed and expired tokens all read the same.
    pub fn verify(&self, token: &str) -> Result<Uuid, AppError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|_| AppError::Unauthorized("Not authorized, token failed"))?;
        Ok(data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let keys = TokenKeys::new("test-secret");
        let user_id = Uuid::new_v4();

        let token = keys.issue(user_id).unwrap();
        assert_eq!(keys.verify(&token).unwrap(), user_id);
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let keys = TokenKeys::new("test-secret");
        let other_keys = TokenKeys::new("other-secret");

        let token = keys.issue(Uuid::new_v4()).unwrap();
        assert!(matches!(
            other_keys.verify(&token),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let keys = TokenKeys::new("test-secret");
        assert!(matches!(keys.verify(""), Err(AppError::Unauthorized(_))));
        assert!(matches!(
            keys.verify("not.a.token"),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let keys = TokenKeys::new("test-secret");
        let now = Utc::now();
        let claims = Claims {
            sub: Uuid::new_v4(),
            iat: (now - Duration::days(8)).timestamp() as usize,
            exp: (now - Duration::days(1)).timestamp() as usize,
        };
        let token =
            jsonwebtoken::encode(&Header::default(), &claims, &keys.encoding).unwrap();

        assert!(matches!(keys.verify(&token), Err(AppError::Unauthorized(_))));
    }
}
