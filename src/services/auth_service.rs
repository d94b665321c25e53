use chrono::Utc;

use crate::dto::auth::{AuthResponse, LoginRequest, RegisterRequest};
use crate::error::{AppError, AppResult};
use crate::models::{PublicUser, Role};
use crate::state::AppState;
use crate::token::Claims;

pub fn login(state: &AppState, payload: LoginRequest) -> AppResult<AuthResponse> {
    let LoginRequest { email, password } = payload;

    let account = state
        .accounts
        .authenticate(&email, &password)
        .ok_or_else(|| AppError::Unauthorized("Invalid credentials".into()))?;

    let claims = Claims {
        user_id: account.id.clone(),
        email: account.email.clone(),
        role: account.role,
        exp: Utc::now().timestamp() + state.token_ttl_secs,
    };
    let token = state.tokens.issue(&claims)?;

    tracing::info!(user_id = %account.id, "user logged in");

    Ok(AuthResponse {
        token,
        user: PublicUser::from(&account),
    })
}

/// Registration always succeeds when all three fields are non-empty. The id
/// is synthesized from the clock and nothing is stored, so a duplicate email
/// is not detected; see DESIGN.md for the gap.
pub fn register(state: &AppState, payload: RegisterRequest) -> AppResult<AuthResponse> {
    let RegisterRequest {
        name,
        email,
        password,
    } = payload;

    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(AppError::BadRequest("Missing required fields".into()));
    }

    let id = format!("new-{}", Utc::now().timestamp_millis());
    let claims = Claims {
        user_id: id.clone(),
        email: email.clone(),
        role: Role::Customer,
        exp: Utc::now().timestamp() + state.token_ttl_secs,
    };
    let token = state.tokens.issue(&claims)?;

    tracing::info!(user_id = %id, "user registered");

    Ok(AuthResponse {
        token,
        user: PublicUser {
            id,
            name,
            email,
            role: Role::Customer,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn state() -> AppState {
        AppState::new(&AppConfig::default())
    }

    #[test]
    fn login_issues_a_verifiable_token_for_known_accounts() {
        let state = state();
        let resp = login(
            &state,
            LoginRequest {
                email: "admin@example.com".into(),
                password: "AdminPass123!".into(),
            },
        )
        .unwrap();
        assert_eq!(resp.user.role, Role::Admin);

        let claims = state.tokens.verify(&resp.token).unwrap();
        assert_eq!(claims.user_id, "1");
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn login_rejects_a_wrong_password() {
        let err = login(
            &state(),
            LoginRequest {
                email: "admin@example.com".into(),
                password: "nope".into(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn register_requires_all_fields() {
        let err = register(
            &state(),
            RegisterRequest {
                name: "Jane".into(),
                email: "jane@example.com".into(),
                password: "".into(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn register_synthesizes_a_customer_account() {
        let state = state();
        let resp = register(
            &state,
            RegisterRequest {
                name: "Jane".into(),
                email: "jane@example.com".into(),
                password: "Secret1!".into(),
            },
        )
        .unwrap();
        assert!(resp.user.id.starts_with("new-"));
        assert_eq!(resp.user.role, Role::Customer);
        assert_eq!(
            state.tokens.verify(&resp.token).unwrap().email,
            "jane@example.com"
        );
    }
}
