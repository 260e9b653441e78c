//! Investment DTOs
//!
//! Create and update bodies are raw [`domain_investment::FormValues`];
//! responses add the card-level gain/loss to each record.

use serde::Serialize;

use domain_investment::{card_summary, CardSummary, InvestmentError, InvestmentRecord};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentResponse {
    #[serde(flatten)]
    pub record: InvestmentRecord,
    pub summary: CardSummary,
}

impl TryFrom<InvestmentRecord> for InvestmentResponse {
    type Error = InvestmentError;

    fn try_from(record: InvestmentRecord) -> Result<Self, Self::Error> {
        let summary = card_summary(&record)?;
        Ok(Self { record, summary })
    }
}
