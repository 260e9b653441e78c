//! Annual post-tax income

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use core_kernel::{IncomeId, OwnerId};

use crate::error::CashflowError;
use crate::versioning::Versioned;

pub const MIN_INCOME_YEAR: i32 = 1900;
pub const MAX_INCOME_YEAR: i32 = 2100;

/// Caller-supplied income values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeDraft {
    pub annual_post_tax_income: Decimal,
    pub income_year: i32,
}

impl IncomeDraft {
    pub fn new(annual_post_tax_income: Decimal, income_year: i32) -> Self {
        Self {
            annual_post_tax_income,
            income_year,
        }
    }

    pub fn validate(&self) -> Result<(), CashflowError> {
        if self.annual_post_tax_income < Decimal::ZERO {
            return Err(CashflowError::NegativeIncome(self.annual_post_tax_income));
        }
        if !(MIN_INCOME_YEAR..=MAX_INCOME_YEAR).contains(&self.income_year) {
            return Err(CashflowError::YearOutOfRange(self.income_year));
        }
        Ok(())
    }
}

/// A stored income record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub id: IncomeId,
    #[serde(skip)]
    pub owner_id: OwnerId,
    pub annual_post_tax_income: Decimal,
    pub income_year: i32,
    pub version: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Income {
    pub fn new(owner_id: OwnerId, draft: IncomeDraft) -> Result<Self, CashflowError> {
        draft.validate()?;
        let now = Utc::now();
        Ok(Self {
            id: IncomeId::new_v7(),
            owner_id,
            annual_post_tax_income: draft.annual_post_tax_income,
            income_year: draft.income_year,
            version: 0,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces the values and bumps the version
    pub fn apply(&mut self, draft: IncomeDraft) -> Result<(), CashflowError> {
        draft.validate()?;
        self.annual_post_tax_income = draft.annual_post_tax_income;
        self.income_year = draft.income_year;
        self.version += 1;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Average take-home per month, to two decimal places
    pub fn monthly(&self) -> Decimal {
        (self.annual_post_tax_income / dec!(12)).round_dp(2)
    }
}

impl Versioned for Income {
    fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_bounds_are_inclusive() {
        assert!(IncomeDraft::new(dec!(0), MIN_INCOME_YEAR).validate().is_ok());
        assert!(IncomeDraft::new(dec!(0), MAX_INCOME_YEAR).validate().is_ok());
        assert!(matches!(
            IncomeDraft::new(dec!(0), 1899).validate(),
            Err(CashflowError::YearOutOfRange(1899))
        ));
    }

    #[test]
    fn test_negative_income_rejected() {
        assert!(matches!(
            IncomeDraft::new(dec!(-1), 2024).validate(),
            Err(CashflowError::NegativeIncome(_))
        ));
    }

    #[test]
    fn test_monthly_rounds() {
        let income = Income::new(OwnerId::from("a@b.io"), IncomeDraft::new(dec!(1000000), 2024)).unwrap();
        assert_eq!(income.monthly(), dec!(83333.33));
    }
}
