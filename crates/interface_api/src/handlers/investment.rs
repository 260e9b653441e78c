//! Investment handlers

use axum::{
    extract::{rejection::{JsonRejection, PathRejection, QueryRejection}, Path, Query, State},
    http::StatusCode,
    Extension, Json,
};

use core_kernel::{InvestmentId, Page};
use domain_investment::{resolve_policy, FieldPolicy, FormValues, InvestmentType, PortfolioSummary};

use crate::auth::Claims;
use crate::dto::investment::InvestmentResponse;
use crate::dto::paging::PageParams;
use crate::{error::ApiError, AppState};

/// Lists the caller's investments
pub async fn list_investments(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Page<InvestmentResponse>>, ApiError> {
    let Query(params) = params?;
    let page = state.investments.list(&claims.owner(), params.into()).await?;
    Ok(Json(page.try_map(InvestmentResponse::try_from)?))
}

/// Creates an investment from form values
pub async fn create_investment(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<FormValues>, JsonRejection>,
) -> Result<(StatusCode, Json<InvestmentResponse>), ApiError> {
    let Json(form) = payload?;
    let record = state.investments.create(&claims.owner(), &form).await?;
    Ok((StatusCode::CREATED, Json(record.try_into()?)))
}

/// Gets an investment by ID
pub async fn get_investment(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    id: Result<Path<InvestmentId>, PathRejection>,
) -> Result<Json<InvestmentResponse>, ApiError> {
    let Path(id) = id?;
    let record = state.investments.get(&claims.owner(), id).await?;
    Ok(Json(record.try_into()?))
}

/// Replaces an investment's values, possibly changing its type
pub async fn update_investment(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    id: Result<Path<InvestmentId>, PathRejection>,
    payload: Result<Json<FormValues>, JsonRejection>,
) -> Result<Json<InvestmentResponse>, ApiError> {
    let Path(id) = id?;
    let Json(form) = payload?;
    let record = state.investments.update(&claims.owner(), id, &form).await?;
    Ok(Json(record.try_into()?))
}

/// Deletes an investment
pub async fn delete_investment(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    id: Result<Path<InvestmentId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.investments.delete(&claims.owner(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Portfolio totals for the dashboard
pub async fn get_summary(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<PortfolioSummary>, ApiError> {
    Ok(Json(state.investments.summary(&claims.owner()).await?))
}

/// Field policy for an investment type, so forms can render before submit
pub async fn get_policy(Path(code): Path<String>) -> Result<Json<FieldPolicy>, ApiError> {
    let investment_type: InvestmentType = code.parse()?;
    Ok(Json(resolve_policy(investment_type)))
}
