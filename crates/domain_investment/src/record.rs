//! Stored investment records

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::{DateRange, InvestmentId, OwnerId};

use crate::field::InvestmentField;
use crate::form::FormValues;
use crate::investment_type::InvestmentType;
use crate::policy::{resolve_policy, FieldPolicy};
use crate::validation::SubmissionPayload;

/// An investment held by one owner
///
/// Records are only ever built from a validated [`SubmissionPayload`], so
/// fields disabled for the record's type stay empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentRecord {
    pub id: InvestmentId,
    #[serde(skip)]
    pub owner_id: OwnerId,
    #[serde(rename = "type")]
    pub investment_type: InvestmentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount_invested: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InvestmentRecord {
    /// Creates a record from a validated payload
    pub fn from_submission(owner_id: OwnerId, payload: SubmissionPayload) -> Self {
        let now = Utc::now();
        let mut record = Self {
            id: InvestmentId::new_v7(),
            owner_id,
            investment_type: payload.investment_type,
            symbol: None,
            units: None,
            buy_price: None,
            current_price: None,
            start_date: None,
            end_date: None,
            interest_rate: None,
            total_amount_invested: None,
            current_value: None,
            created_at: now,
            updated_at: now,
        };
        record.fill(payload);
        record
    }

    /// Replaces every value with those of a validated payload
    ///
    /// The payload is a full form submission, so a field it omits is cleared.
    /// A type change therefore also clears whatever the new type disables.
    pub fn apply(&mut self, payload: SubmissionPayload) {
        self.fill(payload);
        self.updated_at = Utc::now();
    }

    fn fill(&mut self, payload: SubmissionPayload) {
        self.investment_type = payload.investment_type;
        self.symbol = payload.symbol;
        self.units = payload.units;
        self.buy_price = payload.buy_price;
        self.current_price = payload.current_price;
        self.start_date = payload.start_date;
        self.end_date = payload.end_date;
        self.interest_rate = payload.interest_rate;
        self.total_amount_invested = payload.total_amount_invested;
        self.current_value = payload.current_value;
    }

    /// The field policy of the record's type
    pub fn policy(&self) -> FieldPolicy {
        resolve_policy(self.investment_type)
    }

    /// Holding period, when a start date is known and the dates are ordered
    pub fn holding_period(&self) -> Option<DateRange> {
        self.start_date
            .and_then(|start| DateRange::new(start, self.end_date).ok())
    }

    /// True if the record carries a value for a field its type disables
    pub fn violates_policy(&self) -> bool {
        let policy = self.policy();
        InvestmentField::ALL
            .into_iter()
            .filter(|f| policy.is_disabled(*f))
            .any(|f| self.has_value(f))
    }

    fn has_value(&self, field: InvestmentField) -> bool {
        match field {
            InvestmentField::Type => true,
            InvestmentField::Symbol => self.symbol.is_some(),
            InvestmentField::Units => self.units.is_some(),
            InvestmentField::BuyPrice => self.buy_price.is_some(),
            InvestmentField::CurrentPrice => self.current_price.is_some(),
            InvestmentField::StartDate => self.start_date.is_some(),
            InvestmentField::EndDate => self.end_date.is_some(),
            InvestmentField::InterestRate => self.interest_rate.is_some(),
            InvestmentField::TotalAmountInvested => self.total_amount_invested.is_some(),
            InvestmentField::CurrentValue => self.current_value.is_some(),
        }
    }

    /// Current values as form text, for seeding an edit form
    pub fn to_form_values(&self) -> FormValues {
        let mut form = FormValues::new(Some(self.investment_type));
        let decimals = [
            (InvestmentField::Units, self.units),
            (InvestmentField::BuyPrice, self.buy_price),
            (InvestmentField::CurrentPrice, self.current_price),
            (InvestmentField::InterestRate, self.interest_rate),
            (InvestmentField::TotalAmountInvested, self.total_amount_invested),
            (InvestmentField::CurrentValue, self.current_value),
        ];

        if let Some(symbol) = &self.symbol {
            form.set(InvestmentField::Symbol, symbol.clone());
        }
        for (field, value) in decimals {
            if let Some(value) = value {
                form.set(field, value.to_string());
            }
        }
        if let Some(start) = self.start_date {
            form.set(InvestmentField::StartDate, start.to_string());
        }
        if let Some(end) = self.end_date {
            form.set(InvestmentField::EndDate, end.to_string());
        }
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_form;
    use rust_decimal_macros::dec;

    fn bond_form() -> FormValues {
        FormValues::new(Some(InvestmentType::Bond))
            .with(InvestmentField::Symbol, "GOI-2030")
            .with(InvestmentField::Units, "10")
            .with(InvestmentField::BuyPrice, "1000")
            .with(InvestmentField::StartDate, "2024-01-01")
            .with(InvestmentField::EndDate, "2030-01-01")
            .with(InvestmentField::InterestRate, "7.1")
    }

    #[test]
    fn test_round_trips_through_edit_form() {
        let payload = validate_form(&bond_form()).unwrap();
        let record = InvestmentRecord::from_submission(OwnerId::from("a@b.io"), payload.clone());

        let reseeded = validate_form(&record.to_form_values()).unwrap();
        assert_eq!(reseeded, payload);
    }

    #[test]
    fn test_type_change_clears_disabled_fields() {
        let payload = validate_form(&bond_form()).unwrap();
        let mut record = InvestmentRecord::from_submission(OwnerId::from("a@b.io"), payload);

        let mut form = record.to_form_values();
        form.set_type(Some(InvestmentType::Fd));
        form.set(InvestmentField::TotalAmountInvested, "10000");
        record.apply(validate_form(&form).unwrap());

        assert_eq!(record.investment_type, InvestmentType::Fd);
        assert_eq!(record.units, None);
        assert_eq!(record.buy_price, None);
        assert_eq!(record.total_amount_invested, Some(dec!(10000)));
        assert!(!record.violates_policy());
    }

    #[test]
    fn test_owner_is_not_serialized() {
        let payload = validate_form(&bond_form()).unwrap();
        let record = InvestmentRecord::from_submission(OwnerId::from("a@b.io"), payload);
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("ownerId").is_none());
        assert_eq!(json["type"], "BOND");
    }
}
