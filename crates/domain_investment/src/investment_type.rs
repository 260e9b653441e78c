//! Investment instrument types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InvestmentError;

/// The kind of instrument an investment record tracks
///
/// The type decides which form fields are required, disabled, or optional
/// (see [`crate::policy::resolve_policy`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentType {
    /// Listed equity, tracked by units held
    Stock,
    /// Exchange-traded fund
    Etf,
    /// Mutual fund units bought at a NAV
    MutualFund,
    /// Bond with a coupon rate and maturity
    Bond,
    /// Fixed deposit: a lump sum at a fixed rate for a fixed tenure
    #[serde(rename = "FD")]
    Fd,
}

impl InvestmentType {
    /// Every instrument type, in form-selector order
    pub const ALL: [InvestmentType; 5] = [
        InvestmentType::Stock,
        InvestmentType::Etf,
        InvestmentType::MutualFund,
        InvestmentType::Bond,
        InvestmentType::Fd,
    ];

    /// Wire code of the type
    pub fn code(&self) -> &'static str {
        match self {
            InvestmentType::Stock => "STOCK",
            InvestmentType::Etf => "ETF",
            InvestmentType::MutualFund => "MUTUAL_FUND",
            InvestmentType::Bond => "BOND",
            InvestmentType::Fd => "FD",
        }
    }
}

impl fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for InvestmentType {
    type Err = InvestmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        InvestmentType::ALL
            .into_iter()
            .find(|t| t.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| InvestmentError::UnknownType(code.to_string()))
    }
}
