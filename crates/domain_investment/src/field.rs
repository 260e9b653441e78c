//! The fields an investment form carries

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InvestmentError;

/// How a field's raw text is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// The instrument type selector
    Selector,
    /// Free text, trimmed
    Text,
    /// Decimal number
    Number,
    /// ISO calendar date
    Date,
}

/// One of the ten known investment form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvestmentField {
    #[serde(rename = "type")]
    Type,
    Symbol,
    Units,
    BuyPrice,
    CurrentPrice,
    StartDate,
    EndDate,
    InterestRate,
    TotalAmountInvested,
    CurrentValue,
}

impl InvestmentField {
    /// Every field, in form order
    pub const ALL: [InvestmentField; 10] = [
        InvestmentField::Type,
        InvestmentField::Symbol,
        InvestmentField::Units,
        InvestmentField::BuyPrice,
        InvestmentField::CurrentPrice,
        InvestmentField::StartDate,
        InvestmentField::EndDate,
        InvestmentField::InterestRate,
        InvestmentField::TotalAmountInvested,
        InvestmentField::CurrentValue,
    ];

    /// Wire name of the field
    pub fn name(&self) -> &'static str {
        match self {
            InvestmentField::Type => "type",
            InvestmentField::Symbol => "symbol",
            InvestmentField::Units => "units",
            InvestmentField::BuyPrice => "buyPrice",
            InvestmentField::CurrentPrice => "currentPrice",
            InvestmentField::StartDate => "startDate",
            InvestmentField::EndDate => "endDate",
            InvestmentField::InterestRate => "interestRate",
            InvestmentField::TotalAmountInvested => "totalAmountInvested",
            InvestmentField::CurrentValue => "currentValue",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            InvestmentField::Type => FieldKind::Selector,
            InvestmentField::Symbol => FieldKind::Text,
            InvestmentField::StartDate | InvestmentField::EndDate => FieldKind::Date,
            _ => FieldKind::Number,
        }
    }

    /// Numeric fields that may never go below zero
    ///
    /// The interest rate is the only numeric field left out.
    pub fn is_non_negative(&self) -> bool {
        matches!(
            self,
            InvestmentField::Units
                | InvestmentField::BuyPrice
                | InvestmentField::CurrentPrice
                | InvestmentField::TotalAmountInvested
                | InvestmentField::CurrentValue
        )
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for InvestmentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InvestmentField {
    type Err = InvestmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InvestmentField::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| InvestmentError::UnknownField(s.to_string()))
    }
}
