//! Expense handlers

use axum::{
    extract::{rejection::{JsonRejection, PathRejection, QueryRejection}, Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use validator::Validate;

use core_kernel::{ExpenseId, Page};
use domain_cashflow::Expense;

use crate::auth::Claims;
use crate::dto::cashflow::ExpenseRequest;
use crate::dto::paging::PageParams;
use crate::{error::ApiError, AppState};

pub async fn list_expenses(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Page<Expense>>, ApiError> {
    let Query(params) = params?;
    Ok(Json(state.expenses.list(&claims.owner(), params.into()).await?))
}

pub async fn create_expense(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<ExpenseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let Json(request) = payload?;
    request.validate()?;
    let expense = state.expenses.create(&claims.owner(), request.to_draft()?).await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

pub async fn get_expense(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    id: Result<Path<ExpenseId>, PathRejection>,
) -> Result<Json<Expense>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.expenses.get(&claims.owner(), id).await?))
}

/// Updates an expense; a stale `version` in the body yields 409
pub async fn update_expense(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    id: Result<Path<ExpenseId>, PathRejection>,
    payload: Result<Json<ExpenseRequest>, JsonRejection>,
) -> Result<Json<Expense>, ApiError> {
    let Path(id) = id?;
    let Json(request) = payload?;
    request.validate()?;
    let expense = state
        .expenses
        .update(&claims.owner(), id, request.to_draft()?, request.version)
        .await?;
    Ok(Json(expense))
}

pub async fn delete_expense(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    id: Result<Path<ExpenseId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.expenses.delete(&claims.owner(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
