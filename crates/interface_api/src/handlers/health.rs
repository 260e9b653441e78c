//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use core_kernel::HealthCheckResult;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub adapters: Vec<HealthCheckResult>,
}

/// Health check endpoint; lists every store that answered
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let adapters = vec![
        state.investments.health().await,
        state.expenses.health().await,
        state.incomes.health().await,
    ];

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        adapters,
    })
}
