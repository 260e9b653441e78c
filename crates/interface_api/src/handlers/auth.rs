//! Login handler

use axum::{extract::{rejection::JsonRejection, State}, Json};
use validator::Validate;

use crate::auth::{authenticate, create_token};
use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::{error::ApiError, AppState};

/// Exchanges email and password for a bearer token
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let config = &state.config;
    if let Err(e) = authenticate(
        &request.email,
        &request.password,
        &config.login_email,
        &config.login_password_hash,
    ) {
        tracing::warn!(email = %request.email, error = %e, "Login rejected");
        return Err(e.into());
    }

    let token = create_token(config.login_email.trim(), &config.jwt_secret, config.jwt_expiration_secs)?;
    tracing::info!(email = %config.login_email, "Login succeeded");

    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in: config.jwt_expiration_secs,
    }))
}
