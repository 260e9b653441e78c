//! HTTP API Layer
//!
//! This crate provides the REST API for the personal finance core using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for investments, expenses, and incomes
//! - **Middleware**: JWT authentication and audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent JSON error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(AppState::in_memory(config));
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    http::HeaderValue,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_cashflow::{ExpenseService, InMemoryExpensePort, InMemoryIncomePort, IncomeService};
use domain_investment::{InMemoryInvestmentPort, InvestmentService};

use crate::config::ApiConfig;
use crate::handlers::{auth as auth_handlers, cache, expense, health, income, investment};
use crate::middleware::{audit_middleware, auth_middleware};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub investments: InvestmentService,
    pub expenses: ExpenseService,
    pub incomes: IncomeService,
}

impl AppState {
    /// State backed by process-local stores
    pub fn in_memory(config: ApiConfig) -> Self {
        Self {
            config,
            investments: InvestmentService::new(Arc::new(InMemoryInvestmentPort::new())),
            expenses: ExpenseService::new(Arc::new(InMemoryExpensePort::new())),
            incomes: IncomeService::new(Arc::new(InMemoryIncomePort::new())),
        }
    }
}

fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match config
        .cors_allowed_origin
        .as_deref()
        .map(HeaderValue::from_str)
    {
        Some(Ok(origin)) => layer.allow_origin(origin),
        Some(Err(_)) => {
            tracing::warn!("Ignoring invalid CORS origin; allowing any origin");
            layer.allow_origin(Any)
        }
        None => layer.allow_origin(Any),
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Configuration and the domain services
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/login", post(auth_handlers::login));

    let investment_routes = Router::new()
        .route("/", get(investment::list_investments).post(investment::create_investment))
        .route("/summary", get(investment::get_summary))
        .route("/policy/:type", get(investment::get_policy))
        .route(
            "/:id",
            get(investment::get_investment)
                .put(investment::update_investment)
                .delete(investment::delete_investment),
        );

    let expense_routes = Router::new()
        .route("/", get(expense::list_expenses).post(expense::create_expense))
        .route(
            "/:id",
            get(expense::get_expense)
                .put(expense::update_expense)
                .delete(expense::delete_expense),
        );

    let income_routes = Router::new()
        .route("/", get(income::list_incomes).post(income::create_income))
        .route(
            "/:id",
            get(income::get_income)
                .put(income::update_income)
                .delete(income::delete_income),
        );

    // Protected API routes
    let api_routes = Router::new()
        .nest("/investments", investment_routes)
        .nest("/expenses", expense_routes)
        .nest("/incomes", income_routes)
        .route("/cache/refresh", post(cache::refresh_cache))
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(axum_middleware::from_fn_with_state(state.clone(), auth_middleware));

    let cors = cors_layer(&state.config);

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}
