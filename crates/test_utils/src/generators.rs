//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use domain_cashflow::{ExpenseCategory, ExpenseDraft, IncomeDraft};
use domain_investment::{FormValues, InvestmentField, InvestmentType};

use crate::fixtures::FormFixtures;

/// Strategy for any supported investment type
pub fn investment_type_strategy() -> impl Strategy<Value = InvestmentType> {
    prop::sample::select(InvestmentType::ALL.to_vec())
}

/// Strategy for any form field
pub fn investment_field_strategy() -> impl Strategy<Value = InvestmentField> {
    prop::sample::select(InvestmentField::ALL.to_vec())
}

/// Strategy for non-negative decimals with two decimal places
pub fn non_negative_amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for strictly positive decimals with two decimal places
pub fn positive_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for an ordered pair of dates between 2000 and roughly 2050
pub fn ordered_dates_strategy() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (0i64..18_000, 0i64..3_650).prop_map(|(offset, length)| {
        let base = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default();
        let start = base + Duration::days(offset);
        (start, start + Duration::days(length))
    })
}

/// Strategy for a complete, valid form of any type with random values
///
/// Disabled fields are filled with noise, which validation must drop.
pub fn valid_form_strategy() -> impl Strategy<Value = FormValues> {
    (
        investment_type_strategy(),
        positive_amount_strategy(),
        positive_amount_strategy(),
        ordered_dates_strategy(),
        non_negative_amount_strategy(),
    )
        .prop_map(|(investment_type, units, price, (start, end), noise)| {
            let mut form = FormFixtures::complete(investment_type);
            for field in InvestmentField::ALL {
                let value = match field {
                    InvestmentField::Type | InvestmentField::Symbol => continue,
                    InvestmentField::Units => units.to_string(),
                    InvestmentField::BuyPrice | InvestmentField::TotalAmountInvested => price.to_string(),
                    InvestmentField::StartDate => start.to_string(),
                    InvestmentField::EndDate => end.to_string(),
                    InvestmentField::InterestRate => "6.5".to_string(),
                    InvestmentField::CurrentPrice | InvestmentField::CurrentValue => noise.to_string(),
                };
                form.set(field, value);
            }
            form
        })
}

/// Strategy for expense categories
pub fn expense_category_strategy() -> impl Strategy<Value = ExpenseCategory> {
    prop::sample::select(ExpenseCategory::ALL.to_vec())
}

/// Strategy for valid expense drafts
pub fn expense_draft_strategy() -> impl Strategy<Value = ExpenseDraft> {
    (expense_category_strategy(), positive_amount_strategy())
        .prop_map(|(category, amount)| ExpenseDraft::new(category, amount))
}

/// Strategy for valid income drafts
pub fn income_draft_strategy() -> impl Strategy<Value = IncomeDraft> {
    (non_negative_amount_strategy(), 1900i32..=2100)
        .prop_map(|(amount, year)| IncomeDraft::new(amount, year))
}
