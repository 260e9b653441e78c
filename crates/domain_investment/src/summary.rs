//! Gain/loss summaries
//!
//! Per-record figures for investment cards and portfolio-wide totals for the
//! dashboard. A missing invested amount or current value counts as zero here,
//! and a percentage over nothing invested is reported as zero.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::error::InvestmentError;
use crate::record::InvestmentRecord;

/// Gain/loss of a single investment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSummary {
    pub gain_loss: Decimal,
    pub gain_loss_percent: Decimal,
    /// Zero counts as positive (no loss indicator)
    pub is_positive: bool,
}

/// Portfolio-wide totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_invested: Decimal,
    pub current_value: Decimal,
    pub total_gain_loss: Decimal,
    pub gain_loss_percentage: Decimal,
}

impl PortfolioSummary {
    /// Summary of an empty portfolio
    pub fn empty() -> Self {
        Self {
            total_invested: Decimal::ZERO,
            current_value: Decimal::ZERO,
            total_gain_loss: Decimal::ZERO,
            gain_loss_percentage: Decimal::ZERO,
        }
    }

    /// Derives gain/loss from the two totals
    pub fn from_totals(total_invested: Decimal, current_value: Decimal) -> Result<Self, InvestmentError> {
        let total_gain_loss = current_value
            .checked_sub(total_invested)
            .ok_or(InvestmentError::Overflow("total gain/loss"))?;
        Ok(Self {
            total_invested,
            current_value,
            total_gain_loss,
            gain_loss_percentage: percentage_of(total_gain_loss, total_invested)?,
        })
    }

    pub fn is_gain(&self) -> bool {
        self.total_gain_loss >= Decimal::ZERO
    }
}

impl Default for PortfolioSummary {
    fn default() -> Self {
        Self::empty()
    }
}

/// `part / whole * 100`, or zero when nothing was invested
fn percentage_of(part: Decimal, whole: Decimal) -> Result<Decimal, InvestmentError> {
    if whole <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .ok_or(InvestmentError::Overflow("gain/loss percentage"))
}

/// Gain/loss figures shown on an investment card
///
/// # Example
///
/// ```rust,ignore
/// let card = card_summary(&record)?;
/// if !card.is_positive {
///     println!("down {}%", card.gain_loss_percent.abs());
/// }
/// ```
pub fn card_summary(record: &InvestmentRecord) -> Result<CardSummary, InvestmentError> {
    let invested = record.total_amount_invested.unwrap_or_default();
    let current = record.current_value.unwrap_or_default();
    let gain_loss = current
        .checked_sub(invested)
        .ok_or(InvestmentError::Overflow("gain/loss"))?;

    Ok(CardSummary {
        gain_loss,
        gain_loss_percent: percentage_of(gain_loss, invested)?,
        is_positive: gain_loss >= Decimal::ZERO,
    })
}

/// Totals across every record
///
/// The dashboard summary endpoint is computed with this function, so a client
/// re-deriving it over the same record set gets identical figures. Totals past
/// the decimal range are an error rather than a wrapped or rounded figure.
pub fn aggregate<'a, I>(records: I) -> Result<PortfolioSummary, InvestmentError>
where
    I: IntoIterator<Item = &'a InvestmentRecord>,
{
    let mut invested = Decimal::ZERO;
    let mut current = Decimal::ZERO;
    for record in records {
        invested = invested
            .checked_add(record.total_amount_invested.unwrap_or_default())
            .ok_or(InvestmentError::Overflow("total invested"))?;
        current = current
            .checked_add(record.current_value.unwrap_or_default())
            .ok_or(InvestmentError::Overflow("current value"))?;
    }

    PortfolioSummary::from_totals(invested, current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_guard() {
        assert_eq!(percentage_of(dec!(500), Decimal::ZERO).unwrap(), Decimal::ZERO);
        assert_eq!(percentage_of(dec!(-50), dec!(200)).unwrap(), dec!(-25));
    }

    #[test]
    fn test_empty_portfolio() {
        let summary = aggregate(std::iter::empty()).unwrap();
        assert_eq!(summary, PortfolioSummary::empty());
        assert!(summary.is_gain());
    }

    #[test]
    fn test_serializes_dashboard_keys() {
        let json = serde_json::to_value(PortfolioSummary::from_totals(dec!(100), dec!(110)).unwrap()).unwrap();
        for key in ["totalInvested", "currentValue", "totalGainLoss", "gainLossPercentage"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn test_percentage_past_decimal_range_is_an_error() {
        let result = percentage_of(Decimal::MAX, dec!(0.5));
        assert!(matches!(result, Err(InvestmentError::Overflow(_))));
    }
}
