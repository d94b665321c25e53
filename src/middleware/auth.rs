use axum::{extract::FromRequestParts, http::header};

use crate::{error::AppError, state::AppState, token::Claims};

/// Extractor gating protected endpoints.
///
/// The gate checks only that an `Authorization` header is present, matching
/// the existing wire behavior: the token is decoded best-effort but a
/// malformed or expired one does NOT reject the request. Hardened
/// deployments should require `claims` to be `Some` and compare the role
/// against the endpoint's requirement (see DESIGN.md).
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub claims: Option<Claims>,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| AppError::Unauthorized("Unauthorized".into()))?;

        let auth_str = auth_header
            .to_str()
            .map_err(|_| AppError::Unauthorized("Unauthorized".into()))?;

        let token = auth_str.strip_prefix("Bearer ").unwrap_or(auth_str).trim();

        let claims = match state.tokens.verify(token) {
            Ok(claims) => Some(claims),
            Err(err) => {
                tracing::debug!(error = %err, "bearer token did not verify");
                None
            }
        };

        Ok(AuthUser { claims })
    }
}
