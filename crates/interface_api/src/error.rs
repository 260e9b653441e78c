//! API error handling

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use core_kernel::PortError;
use domain_cashflow::CashflowError;
use domain_investment::{InvestmentError, ValidationErrors};

use crate::auth::AuthError;

/// One problem with one request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub code: String,
    pub message: String,
}

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        details: Vec<ErrorDetail>,
    },
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ErrorDetail>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, details) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized", "Unauthorized".to_string(), None),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg, None),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", "Internal server error".to_string(), None)
            }
            ApiError::Validation { message, details } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", message, Some(details))
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<PortError> for ApiError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            PortError::Conflict { message } => ApiError::Conflict(message),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation {
            message: errors.to_string(),
            details: errors
                .iter()
                .map(|e| ErrorDetail {
                    field: e.field().map(|f| f.name().to_string()),
                    code: e.code().to_string(),
                    message: e.to_string(),
                })
                .collect(),
        }
    }
}

impl From<InvestmentError> for ApiError {
    fn from(err: InvestmentError) -> Self {
        match err {
            InvestmentError::Validation(errors) => errors.into(),
            InvestmentError::NotFound(id) => ApiError::NotFound(format!("Investment {id} not found")),
            InvestmentError::UnknownType(_) | InvestmentError::UnknownField(_) => {
                ApiError::BadRequest(err.to_string())
            }
            InvestmentError::Overflow(_) => ApiError::Validation {
                message: err.to_string(),
                details: vec![ErrorDetail {
                    field: None,
                    code: "NUMERIC_OVERFLOW".to_string(),
                    message: err.to_string(),
                }],
            },
            InvestmentError::Port(port) => port.into(),
        }
    }
}

impl From<CashflowError> for ApiError {
    fn from(err: CashflowError) -> Self {
        if err.is_validation() {
            return ApiError::Validation {
                message: err.to_string(),
                details: vec![ErrorDetail {
                    field: err.field().map(str::to_string),
                    code: err.code().to_string(),
                    message: err.to_string(),
                }],
            };
        }
        match err {
            CashflowError::NotFound(id) => ApiError::NotFound(format!("Record {id} not found")),
            CashflowError::VersionConflict { .. } => ApiError::Conflict(err.to_string()),
            CashflowError::Port(port) => port.into(),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut details: Vec<ErrorDetail> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| ErrorDetail {
                    field: Some(field.to_string()),
                    code: e.code.to_uppercase(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid")),
                })
            })
            .collect();
        details.sort_by(|a, b| a.field.cmp(&b.field));

        ApiError::Validation {
            message: "Request validation failed".to_string(),
            details,
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Internal(msg) => ApiError::Internal(msg),
            _ => ApiError::Unauthorized,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
