//! Submission validation
//!
//! Turns raw [`FormValues`] into a [`SubmissionPayload`] under the policy of
//! the selected type.
//!
//! # Rules
//!
//! - Every Required field that is absent, empty, or whitespace-only is
//!   reported as missing
//! - Disabled fields are dropped, whatever the caller supplied
//! - Numeric fields are parsed as decimals; blank optional ones are omitted
//! - Dates are ISO `YYYY-MM-DD` with no timezone
//! - The end date may not precede the start date
//!
//! All failures are collected so a form can show every problem at once.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use core_kernel::temporal::{check_order, parse_iso_date};

use crate::field::{FieldKind, InvestmentField};
use crate::form::FormValues;
use crate::investment_type::InvestmentType;
use crate::policy::resolve_policy;

/// A single reason a submission was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "code", content = "field", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingRequiredField(InvestmentField),

    #[error("{0} is not a valid number")]
    InvalidNumber(InvestmentField),

    #[error("{0} is not a valid YYYY-MM-DD date")]
    InvalidDate(InvestmentField),

    #[error("{0} cannot be negative")]
    NegativeValue(InvestmentField),

    #[error("endDate cannot be before startDate")]
    InvalidDateRange,
}

impl ValidationError {
    /// The field the error points at, if it concerns a single field
    pub fn field(&self) -> Option<InvestmentField> {
        match self {
            ValidationError::MissingRequiredField(f)
            | ValidationError::InvalidNumber(f)
            | ValidationError::InvalidDate(f)
            | ValidationError::NegativeValue(f) => Some(*f),
            ValidationError::InvalidDateRange => None,
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingRequiredField(_) => "MISSING_REQUIRED_FIELD",
            ValidationError::InvalidNumber(_) => "INVALID_NUMBER",
            ValidationError::InvalidDate(_) => "INVALID_DATE",
            ValidationError::NegativeValue(_) => "NEGATIVE_VALUE",
            ValidationError::InvalidDateRange => "INVALID_DATE_RANGE",
        }
    }
}

/// Every reason a submission was rejected, in form order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, error: &ValidationError) -> bool {
        self.0.contains(error)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Names of the required fields that were left blank
    pub fn missing_fields(&self) -> Vec<InvestmentField> {
        self.0
            .iter()
            .filter_map(|e| match e {
                ValidationError::MissingRequiredField(f) => Some(*f),
                _ => None,
            })
            .collect()
    }

    fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// A policy-conformant investment, ready to be stored
///
/// Absent fields are omitted when serialized, never sent as zero or null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    #[serde(rename = "type")]
    pub investment_type: InvestmentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount_invested: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_value: Option<Decimal>,
}

impl SubmissionPayload {
    fn empty(investment_type: InvestmentType) -> Self {
        Self {
            investment_type,
            symbol: None,
            units: None,
            buy_price: None,
            current_price: None,
            start_date: None,
            end_date: None,
            interest_rate: None,
            total_amount_invested: None,
            current_value: None,
        }
    }

    /// The decimal held for a numeric field
    pub fn decimal(&self, field: InvestmentField) -> Option<Decimal> {
        match field {
            InvestmentField::Units => self.units,
            InvestmentField::BuyPrice => self.buy_price,
            InvestmentField::CurrentPrice => self.current_price,
            InvestmentField::InterestRate => self.interest_rate,
            InvestmentField::TotalAmountInvested => self.total_amount_invested,
            InvestmentField::CurrentValue => self.current_value,
            _ => None,
        }
    }

    /// True if the payload carries a value for the field
    pub fn has(&self, field: InvestmentField) -> bool {
        match field {
            InvestmentField::Type => true,
            InvestmentField::Symbol => self.symbol.is_some(),
            InvestmentField::StartDate => self.start_date.is_some(),
            InvestmentField::EndDate => self.end_date.is_some(),
            numeric => self.decimal(numeric).is_some(),
        }
    }

    /// Fields present in the payload, in form order
    pub fn present_fields(&self) -> Vec<InvestmentField> {
        InvestmentField::ALL
            .into_iter()
            .filter(|f| self.has(*f))
            .collect()
    }

    fn set_decimal(&mut self, field: InvestmentField, value: Decimal) {
        match field {
            InvestmentField::Units => self.units = Some(value),
            InvestmentField::BuyPrice => self.buy_price = Some(value),
            InvestmentField::CurrentPrice => self.current_price = Some(value),
            InvestmentField::InterestRate => self.interest_rate = Some(value),
            InvestmentField::TotalAmountInvested => self.total_amount_invested = Some(value),
            InvestmentField::CurrentValue => self.current_value = Some(value),
            _ => {}
        }
    }

    fn set_date(&mut self, field: InvestmentField, value: NaiveDate) {
        match field {
            InvestmentField::StartDate => self.start_date = Some(value),
            InvestmentField::EndDate => self.end_date = Some(value),
            _ => {}
        }
    }
}

/// Parses a decimal the way a number input would produce it
///
/// Accepts plain and scientific notation (`1e3`), nothing else.
fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

/// Validates form input against the policy of the selected type
///
/// # Arguments
///
/// * `investment_type` - The selected type; `None` when nothing was chosen
/// * `form` - Raw form values
///
/// # Returns
///
/// The payload to submit, or every validation failure found
///
/// # Example
///
/// ```rust
/// use domain_investment::{validate_submission, FormValues, InvestmentField, InvestmentType};
///
/// let form = FormValues::new(Some(InvestmentType::Stock))
///     .with(InvestmentField::Symbol, "AAPL")
///     .with(InvestmentField::Units, "10")
///     .with(InvestmentField::StartDate, "2024-03-01")
///     .with(InvestmentField::BuyPrice, "150");
///
/// let payload = validate_submission(Some(InvestmentType::Stock), &form).unwrap();
/// assert!(payload.buy_price.is_none());
/// ```
pub fn validate_submission(
    investment_type: Option<InvestmentType>,
    form: &FormValues,
) -> Result<SubmissionPayload, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let Some(investment_type) = investment_type else {
        errors.push(ValidationError::MissingRequiredField(InvestmentField::Type));
        return Err(errors);
    };

    let policy = resolve_policy(investment_type);
    let mut payload = SubmissionPayload::empty(investment_type);

    for field in InvestmentField::ALL {
        if field == InvestmentField::Type || policy.is_disabled(field) {
            continue;
        }

        let Some(value) = form.trimmed(field) else {
            if policy.is_required(field) {
                errors.push(ValidationError::MissingRequiredField(field));
            }
            continue;
        };

        match field.kind() {
            FieldKind::Text => payload.symbol = Some(value.to_string()),
            FieldKind::Number => match parse_decimal(value) {
                Some(number) if number.is_zero() => payload.set_decimal(field, Decimal::ZERO),
                Some(number) if number.is_sign_negative() && field.is_non_negative() => {
                    errors.push(ValidationError::NegativeValue(field));
                }
                Some(number) => payload.set_decimal(field, number),
                None => errors.push(ValidationError::InvalidNumber(field)),
            },
            FieldKind::Date => match parse_iso_date(value) {
                Ok(date) => payload.set_date(field, date),
                Err(_) => errors.push(ValidationError::InvalidDate(field)),
            },
            FieldKind::Selector => {}
        }
    }

    if check_order(payload.start_date, payload.end_date).is_err() {
        errors.push(ValidationError::InvalidDateRange);
    }

    if !errors.is_empty() {
        tracing::debug!(
            investment_type = %investment_type,
            error_count = errors.len(),
            "Investment submission rejected"
        );
    }

    errors.into_result(payload)
}

/// Validates a form using the type the form itself carries
pub fn validate_form(form: &FormValues) -> Result<SubmissionPayload, ValidationErrors> {
    validate_submission(form.investment_type(), form)
}
