//! Investment domain errors

use thiserror::Error;

use core_kernel::PortError;

use crate::validation::ValidationErrors;

/// Errors that can occur in the investment domain
#[derive(Debug, Error)]
pub enum InvestmentError {
    /// Type code outside the supported set
    #[error("Unknown investment type: {0}")]
    UnknownType(String),

    /// Field name outside the governed form fields
    #[error("Unknown investment field: {0}")]
    UnknownField(String),

    /// Submission rejected under the type's field policy
    #[error("Invalid investment: {0}")]
    Validation(#[from] ValidationErrors),

    /// A computed figure fell outside the decimal range
    #[error("Portfolio {0} exceeds the supported numeric range")]
    Overflow(&'static str),

    #[error("Investment not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Port(PortError),
}

impl From<PortError> for InvestmentError {
    fn from(error: PortError) -> Self {
        match error {
            PortError::NotFound { id, .. } => InvestmentError::NotFound(id),
            other => InvestmentError::Port(other),
        }
    }
}

impl InvestmentError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, InvestmentError::NotFound(_))
    }
}
