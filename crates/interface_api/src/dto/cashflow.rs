//! Expense and income DTOs

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use domain_cashflow::{CashflowError, ExpenseCategory, ExpenseDraft, IncomeDraft};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub category: String,
    pub amount: Decimal,
    /// Version the edit was based on; omitted to overwrite unconditionally
    #[serde(default)]
    pub version: Option<u64>,
}

impl ExpenseRequest {
    pub fn to_draft(&self) -> Result<ExpenseDraft, CashflowError> {
        let category: ExpenseCategory = self.category.parse()?;
        let draft = ExpenseDraft::new(category, self.amount);
        draft.validate()?;
        Ok(draft)
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IncomeRequest {
    pub annual_post_tax_income: Decimal,
    #[validate(range(min = 1900, max = 2100, message = "must be between 1900 and 2100"))]
    pub income_year: i32,
    #[serde(default)]
    pub version: Option<u64>,
}

impl IncomeRequest {
    pub fn to_draft(&self) -> Result<IncomeDraft, CashflowError> {
        let draft = IncomeDraft::new(self.annual_post_tax_income, self.income_year);
        draft.validate()?;
        Ok(draft)
    }
}
