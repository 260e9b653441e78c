//! Summary cache handler

use axum::{extract::State, http::StatusCode, Extension};

use crate::auth::Claims;
use crate::AppState;

/// Drops the caller's cached portfolio summary
pub async fn refresh_cache(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> StatusCode {
    state.investments.clear_cache(&claims.owner()).await;
    StatusCode::NO_CONTENT
}
