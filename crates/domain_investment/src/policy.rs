//! Per-type field policy
//!
//! Each instrument type classifies every form field as Required, Disabled, or
//! Optional. Disabled fields are never stored or submitted for that type;
//! Required fields must be non-empty before a submission is accepted.
//!
//! | Type        | Required                                                    | Disabled                                                              |
//! |-------------|-------------------------------------------------------------|-----------------------------------------------------------------------|
//! | STOCK       | symbol, units, startDate                                    | buyPrice, currentPrice, totalAmountInvested, currentValue, interestRate |
//! | ETF         | symbol, units, startDate, interestRate, buyPrice            | currentPrice, totalAmountInvested, currentValue                       |
//! | MUTUAL_FUND | symbol, units, startDate, interestRate, buyPrice            | currentPrice, totalAmountInvested, currentValue                       |
//! | FD          | symbol, totalAmountInvested, startDate, endDate, interestRate | units, buyPrice, currentPrice, currentValue                         |
//! | BOND        | symbol, units, buyPrice, startDate, endDate, interestRate   | currentPrice, totalAmountInvested, currentValue                       |
//!
//! `type` itself is Required for every concrete type. With no type selected,
//! every field is Optional.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::field::InvestmentField;
use crate::investment_type::InvestmentType;

use InvestmentField::*;

/// Classification of a single field under a policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRequirement {
    Required,
    Disabled,
    Optional,
}

/// Field classification for one instrument type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPolicy {
    investment_type: Option<InvestmentType>,
    requirements: [FieldRequirement; 10],
}

impl FieldPolicy {
    /// The policy in force before any type has been selected
    pub fn unrestricted() -> Self {
        Self {
            investment_type: None,
            requirements: [FieldRequirement::Optional; 10],
        }
    }

    /// Resolves the policy for an optional selection
    pub fn for_selection(selection: Option<InvestmentType>) -> Self {
        selection.map_or_else(Self::unrestricted, resolve_policy)
    }

    fn with_rules(
        investment_type: InvestmentType,
        required: &[InvestmentField],
        disabled: &[InvestmentField],
    ) -> Self {
        let mut requirements = [FieldRequirement::Optional; 10];
        requirements[Type.index()] = FieldRequirement::Required;
        for field in required {
            requirements[field.index()] = FieldRequirement::Required;
        }
        for field in disabled {
            requirements[field.index()] = FieldRequirement::Disabled;
        }
        Self {
            investment_type: Some(investment_type),
            requirements,
        }
    }

    /// The type this policy was resolved for, if any
    pub fn investment_type(&self) -> Option<InvestmentType> {
        self.investment_type
    }

    pub fn requirement(&self, field: InvestmentField) -> FieldRequirement {
        self.requirements[field.index()]
    }

    pub fn is_required(&self, field: InvestmentField) -> bool {
        self.requirement(field) == FieldRequirement::Required
    }

    pub fn is_disabled(&self, field: InvestmentField) -> bool {
        self.requirement(field) == FieldRequirement::Disabled
    }

    pub fn is_optional(&self, field: InvestmentField) -> bool {
        self.requirement(field) == FieldRequirement::Optional
    }

    /// Fields with the given classification, in form order
    pub fn fields_with(&self, requirement: FieldRequirement) -> Vec<InvestmentField> {
        InvestmentField::ALL
            .into_iter()
            .filter(|f| self.requirement(*f) == requirement)
            .collect()
    }

    pub fn required_fields(&self) -> Vec<InvestmentField> {
        self.fields_with(FieldRequirement::Required)
    }

    pub fn disabled_fields(&self) -> Vec<InvestmentField> {
        self.fields_with(FieldRequirement::Disabled)
    }

    pub fn optional_fields(&self) -> Vec<InvestmentField> {
        self.fields_with(FieldRequirement::Optional)
    }
}

impl Serialize for FieldPolicy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("FieldPolicy", 4)?;
        state.serialize_field("type", &self.investment_type)?;
        state.serialize_field("required", &self.required_fields())?;
        state.serialize_field("disabled", &self.disabled_fields())?;
        state.serialize_field("optional", &self.optional_fields())?;
        state.end()
    }
}

/// Resolves the field policy for an instrument type
///
/// The same table serves record creation and record updates.
pub fn resolve_policy(investment_type: InvestmentType) -> FieldPolicy {
    match investment_type {
        InvestmentType::Stock => FieldPolicy::with_rules(
            investment_type,
            &[Symbol, Units, StartDate],
            &[BuyPrice, CurrentPrice, TotalAmountInvested, CurrentValue, InterestRate],
        ),
        InvestmentType::Etf | InvestmentType::MutualFund => FieldPolicy::with_rules(
            investment_type,
            &[Symbol, Units, StartDate, InterestRate, BuyPrice],
            &[CurrentPrice, TotalAmountInvested, CurrentValue],
        ),
        InvestmentType::Fd => FieldPolicy::with_rules(
            investment_type,
            &[Symbol, TotalAmountInvested, StartDate, EndDate, InterestRate],
            &[Units, BuyPrice, CurrentPrice, CurrentValue],
        ),
        InvestmentType::Bond => FieldPolicy::with_rules(
            investment_type,
            &[Symbol, Units, BuyPrice, StartDate, EndDate, InterestRate],
            &[CurrentPrice, TotalAmountInvested, CurrentValue],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_disables_interest_rate() {
        let policy = resolve_policy(InvestmentType::Stock);
        assert!(policy.is_disabled(InterestRate));
        assert!(policy.is_optional(EndDate));
        assert!(policy.is_required(Type));
    }

    #[test]
    fn test_fd_requires_end_date() {
        let policy = resolve_policy(InvestmentType::Fd);
        assert!(policy.is_required(EndDate));
        assert!(policy.is_disabled(Units));
        assert_eq!(policy.optional_fields(), Vec::<InvestmentField>::new());
    }

    #[test]
    fn test_unrestricted_marks_everything_optional() {
        let policy = FieldPolicy::for_selection(None);
        assert_eq!(policy.optional_fields().len(), InvestmentField::ALL.len());
        assert_eq!(policy.investment_type(), None);
    }

    #[test]
    fn test_serializes_grouped_lists() {
        let json = serde_json::to_value(resolve_policy(InvestmentType::Bond)).unwrap();
        assert_eq!(json["type"], "BOND");
        assert_eq!(json["optional"], serde_json::json!([]));
        assert_eq!(
            json["disabled"],
            serde_json::json!(["currentPrice", "totalAmountInvested", "currentValue"])
        );
    }
}
