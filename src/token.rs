use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::models::Role;

/// The decoded payload of a session token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: String,
    pub email: String,
    pub role: Role,
    /// Expiry, epoch seconds.
    pub exp: i64,
}

impl Claims {
    pub fn is_expired(&self, now_millis: i64) -> bool {
        self.exp * 1000 <= now_millis
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("malformed token")]
    Malformed,
    #[error("expired token")]
    Expired,
}

/// Session token scheme, injected through `AppState` so a different scheme
/// can be substituted without touching call sites.
pub trait TokenCodec: Send + Sync {
    fn issue(&self, claims: &Claims) -> AppResult<String>;
    fn verify(&self, token: &str) -> Result<Claims, TokenError>;
}

/// Legacy codec: base64 of the claims JSON, no signature.
///
/// KNOWN DEFECT: there is no integrity protection, so any client can mint a
/// token with an arbitrary role or expiry. Kept for wire compatibility with
/// existing clients; deployments that set `TOKEN_SECRET` get
/// [`HmacTokenCodec`] instead.
pub struct UnsignedTokenCodec;

impl TokenCodec for UnsignedTokenCodec {
    fn issue(&self, claims: &Claims) -> AppResult<String> {
        let payload = serde_json::to_vec(claims)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("claims serialization: {e}")))?;
        Ok(BASE64.encode(payload))
    }

    fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let payload = BASE64.decode(token).map_err(|_| TokenError::Malformed)?;
        let claims: Claims =
            serde_json::from_slice(&payload).map_err(|_| TokenError::Malformed)?;
        if claims.is_expired(Utc::now().timestamp_millis()) {
            return Err(TokenError::Expired);
        }
        Ok(claims)
    }
}

/// HS256 JWT codec carrying the same claims and expiry rule.
pub struct HmacTokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl HmacTokenCodec {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

impl TokenCodec for HmacTokenCodec {
    fn issue(&self, claims: &Claims) -> AppResult<String> {
        encode(&Header::default(), claims, &self.encoding)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("token encoding: {e}")))
    }

    fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::default();
        validation.leeway = 0;
        match decode::<Claims>(token, &self.decoding, &validation) {
            Ok(data) => Ok(data.claims),
            Err(err) => match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => Err(TokenError::Expired),
                _ => Err(TokenError::Malformed),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(exp: i64) -> Claims {
        Claims {
            user_id: "1".into(),
            email: "admin@example.com".into(),
            role: Role::Admin,
            exp,
        }
    }

    #[test]
    fn unsigned_round_trips_fresh_claims() {
        let codec = UnsignedTokenCodec;
        let original = claims(Utc::now().timestamp() + 86_400);
        let token = codec.issue(&original).unwrap();
        let decoded = codec.verify(&token).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn unsigned_rejects_past_expiry() {
        let codec = UnsignedTokenCodec;
        let stale = claims(Utc::now().timestamp() - 10);
        let token = codec.issue(&stale).unwrap();
        assert_eq!(codec.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn unsigned_rejects_garbage_input() {
        let codec = UnsignedTokenCodec;
        assert_eq!(codec.verify("%%not-base64%%"), Err(TokenError::Malformed));
        // Valid base64 but not a claims object.
        let token = BASE64.encode(b"plain text");
        assert_eq!(codec.verify(&token), Err(TokenError::Malformed));
        // JWT-style segmented input is not a single base64 payload.
        assert_eq!(
            codec.verify("eyJh.eyJi.c2ln"),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn hmac_round_trips_and_rejects_tampering() {
        let codec = HmacTokenCodec::new("test-secret");
        let original = claims(Utc::now().timestamp() + 3600);
        let token = codec.issue(&original).unwrap();
        assert_eq!(codec.verify(&token).unwrap(), original);

        let other = HmacTokenCodec::new("different-secret");
        assert_eq!(other.verify(&token), Err(TokenError::Malformed));
    }

    #[test]
    fn hmac_rejects_unsigned_tokens() {
        let unsigned = UnsignedTokenCodec
            .issue(&claims(Utc::now().timestamp() + 3600))
            .unwrap();
        let codec = HmacTokenCodec::new("test-secret");
        assert_eq!(codec.verify(&unsigned), Err(TokenError::Malformed));
    }
}
