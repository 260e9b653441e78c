//! Categorised expenses

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{ExpenseId, OwnerId};

use crate::error::CashflowError;
use crate::versioning::Versioned;

/// Spending category shown on the expenses page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Transport,
    Entertainment,
    Shopping,
    Bills,
    Healthcare,
    Education,
    Travel,
    Utilities,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 10] = [
        ExpenseCategory::Food,
        ExpenseCategory::Transport,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Shopping,
        ExpenseCategory::Bills,
        ExpenseCategory::Healthcare,
        ExpenseCategory::Education,
        ExpenseCategory::Travel,
        ExpenseCategory::Utilities,
        ExpenseCategory::Other,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Bills => "Bills",
            ExpenseCategory::Healthcare => "Healthcare",
            ExpenseCategory::Education => "Education",
            ExpenseCategory::Travel => "Travel",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Other => "Other",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food & Dining",
            ExpenseCategory::Transport => "Transportation",
            ExpenseCategory::Bills => "Bills & Utilities",
            other => other.code(),
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ExpenseCategory {
    type Err = CashflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ExpenseCategory::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CashflowError::UnknownCategory(s.to_string()))
    }
}

/// Caller-supplied expense values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub category: ExpenseCategory,
    pub amount: Decimal,
}

impl ExpenseDraft {
    pub fn new(category: ExpenseCategory, amount: Decimal) -> Self {
        Self { category, amount }
    }

    /// Amounts must be strictly positive
    pub fn validate(&self) -> Result<(), CashflowError> {
        if self.amount <= Decimal::ZERO {
            return Err(CashflowError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }
}

/// A stored expense
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: ExpenseId,
    #[serde(skip)]
    pub owner_id: OwnerId,
    pub category: ExpenseCategory,
    pub amount: Decimal,
    pub version: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Creates an expense from a validated draft
    pub fn new(owner_id: OwnerId, draft: ExpenseDraft) -> Result<Self, CashflowError> {
        draft.validate()?;
        let now = Utc::now();
        Ok(Self {
            id: ExpenseId::new_v7(),
            owner_id,
            category: draft.category,
            amount: draft.amount,
            version: 0,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces the values and bumps the version
    pub fn apply(&mut self, draft: ExpenseDraft) -> Result<(), CashflowError> {
        draft.validate()?;
        self.category = draft.category;
        self.amount = draft.amount;
        self.version += 1;
        self.updated_at = Utc::now();
        Ok(())
    }
}

impl Versioned for Expense {
    fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("travel".parse::<ExpenseCategory>().unwrap(), ExpenseCategory::Travel);
        assert!("Crypto".parse::<ExpenseCategory>().is_err());
    }

    #[test]
    fn test_zero_amount_rejected() {
        let draft = ExpenseDraft::new(ExpenseCategory::Food, Decimal::ZERO);
        assert!(matches!(
            Expense::new(OwnerId::from("a@b.io"), draft),
            Err(CashflowError::NonPositiveAmount(_))
        ));
    }

    #[test]
    fn test_apply_bumps_version() {
        let mut expense = Expense::new(
            OwnerId::from("a@b.io"),
            ExpenseDraft::new(ExpenseCategory::Bills, dec!(1200)),
        )
        .unwrap();
        assert_eq!(expense.version, 0);

        expense
            .apply(ExpenseDraft::new(ExpenseCategory::Utilities, dec!(900)))
            .unwrap();
        assert_eq!(expense.version, 1);
        assert_eq!(expense.category, ExpenseCategory::Utilities);
    }

    #[test]
    fn test_failed_apply_keeps_values() {
        let mut expense = Expense::new(
            OwnerId::from("a@b.io"),
            ExpenseDraft::new(ExpenseCategory::Food, dec!(10)),
        )
        .unwrap();
        assert!(expense.apply(ExpenseDraft::new(ExpenseCategory::Food, dec!(-1))).is_err());
        assert_eq!(expense.amount, dec!(10));
        assert_eq!(expense.version, 0);
    }
}
