//! Income handlers

use axum::{
    extract::{rejection::{JsonRejection, PathRejection, QueryRejection}, Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use validator::Validate;

use core_kernel::{IncomeId, Page};
use domain_cashflow::Income;

use crate::auth::Claims;
use crate::dto::cashflow::IncomeRequest;
use crate::dto::paging::PageParams;
use crate::{error::ApiError, AppState};

pub async fn list_incomes(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Page<Income>>, ApiError> {
    let Query(params) = params?;
    Ok(Json(state.incomes.list(&claims.owner(), params.into()).await?))
}

pub async fn create_income(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<IncomeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Income>), ApiError> {
    let Json(request) = payload?;
    request.validate()?;
    let income = state.incomes.create(&claims.owner(), request.to_draft()?).await?;
    Ok((StatusCode::CREATED, Json(income)))
}

pub async fn get_income(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    id: Result<Path<IncomeId>, PathRejection>,
) -> Result<Json<Income>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.incomes.get(&claims.owner(), id).await?))
}

/// Updates an income record; a stale `version` in the body yields 409
pub async fn update_income(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    id: Result<Path<IncomeId>, PathRejection>,
    payload: Result<Json<IncomeRequest>, JsonRejection>,
) -> Result<Json<Income>, ApiError> {
    let Path(id) = id?;
    let Json(request) = payload?;
    request.validate()?;
    let income = state
        .incomes
        .update(&claims.owner(), id, request.to_draft()?, request.version)
        .await?;
    Ok(Json(income))
}

pub async fn delete_income(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    id: Result<Path<IncomeId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.incomes.delete(&claims.owner(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
