//! Cashflow domain errors

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur in the cashflow domain
#[derive(Debug, Error)]
pub enum CashflowError {
    #[error("Unknown expense category: {0}")]
    UnknownCategory(String),

    /// Expense amounts must be strictly positive
    #[error("Expense amount must be greater than zero, got {0}")]
    NonPositiveAmount(Decimal),

    #[error("Income cannot be negative, got {0}")]
    NegativeIncome(Decimal),

    #[error("Income year {0} is outside {min}..={max}", min = crate::income::MIN_INCOME_YEAR, max = crate::income::MAX_INCOME_YEAR)]
    YearOutOfRange(i32),

    #[error("Record not found: {0}")]
    NotFound(String),

    /// The caller edited a copy that has since been changed
    #[error("Version conflict: expected {expected}, found {actual}")]
    VersionConflict { expected: u64, actual: u64 },

    #[error(transparent)]
    Port(PortError),
}

impl CashflowError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CashflowError::NotFound(_))
    }

    /// True for input the caller can correct
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CashflowError::UnknownCategory(_)
                | CashflowError::NonPositiveAmount(_)
                | CashflowError::NegativeIncome(_)
                | CashflowError::YearOutOfRange(_)
        )
    }
}

impl CashflowError {
    /// Request field the error concerns, by its JSON name
    pub fn field(&self) -> Option<&'static str> {
        match self {
            CashflowError::UnknownCategory(_) => Some("category"),
            CashflowError::NonPositiveAmount(_) => Some("amount"),
            CashflowError::NegativeIncome(_) => Some("annualPostTaxIncome"),
            CashflowError::YearOutOfRange(_) => Some("incomeYear"),
            CashflowError::VersionConflict { .. } => Some("version"),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            CashflowError::UnknownCategory(_) => "UNKNOWN_CATEGORY",
            CashflowError::NonPositiveAmount(_) => "NON_POSITIVE_AMOUNT",
            CashflowError::NegativeIncome(_) => "NEGATIVE_INCOME",
            CashflowError::YearOutOfRange(_) => "YEAR_OUT_OF_RANGE",
            CashflowError::NotFound(_) => "NOT_FOUND",
            CashflowError::VersionConflict { .. } => "VERSION_CONFLICT",
            CashflowError::Port(_) => "STORAGE",
        }
    }
}

impl From<PortError> for CashflowError {
    fn from(error: PortError) -> Self {
        match error {
            PortError::NotFound { id, .. } => CashflowError::NotFound(id),
            other => CashflowError::Port(other),
        }
    }
}
