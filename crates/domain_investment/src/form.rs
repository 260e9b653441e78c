//! Raw investment form values
//!
//! A form holds the selected type and the raw text of every other field, the
//! way a user typed it. JSON callers may send numbers instead of strings;
//! both are accepted and kept as text until validation parses them.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::field::InvestmentField;
use crate::investment_type::InvestmentType;

/// Unparsed form input for one investment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormValues {
    #[serde(rename = "type")]
    investment_type: Option<InvestmentType>,
    #[serde(flatten)]
    values: BTreeMap<InvestmentField, String>,
}

impl FormValues {
    pub fn new(investment_type: Option<InvestmentType>) -> Self {
        Self {
            investment_type,
            values: BTreeMap::new(),
        }
    }

    /// Sets a field's raw text, builder style
    pub fn with(mut self, field: InvestmentField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Sets a field's raw text
    ///
    /// Setting `type` goes through [`FormValues::set_type`]; raw text for it is
    /// ignored here.
    pub fn set(&mut self, field: InvestmentField, value: impl Into<String>) {
        if field != InvestmentField::Type {
            self.values.insert(field, value.into());
        }
    }

    pub fn set_type(&mut self, investment_type: Option<InvestmentType>) {
        self.investment_type = investment_type;
    }

    pub fn investment_type(&self) -> Option<InvestmentType> {
        self.investment_type
    }

    /// Raw text of a field, if one was supplied
    pub fn raw(&self, field: InvestmentField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Trimmed text of a field; `None` when absent or blank
    pub fn trimmed(&self, field: InvestmentField) -> Option<&str> {
        self.raw(field).map(str::trim).filter(|v| !v.is_empty())
    }
}

/// A JSON field value as the dashboard sends it
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Text(String),
    Number(serde_json::Number),
}

impl RawValue {
    fn into_text(self) -> String {
        match self {
            RawValue::Text(text) => text,
            RawValue::Number(number) => number.to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for FormValues {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: BTreeMap<String, Option<RawValue>> = BTreeMap::deserialize(deserializer)?;
        let mut form = FormValues::default();

        for (key, value) in raw {
            // Unknown keys (ids, versions, computed summaries) are not form input
            let Ok(field) = key.parse::<InvestmentField>() else {
                continue;
            };
            let Some(text) = value.map(RawValue::into_text) else {
                continue;
            };
            if field == InvestmentField::Type {
                let code = text.trim();
                if !code.is_empty() {
                    let parsed = code.parse::<InvestmentType>().map_err(de::Error::custom)?;
                    form.investment_type = Some(parsed);
                }
            } else {
                form.values.insert(field, text);
            }
        }

        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_numbers_and_strings() {
        let form: FormValues = serde_json::from_value(serde_json::json!({
            "type": "FD",
            "symbol": "FD-001",
            "totalAmountInvested": 15000.5,
            "interestRate": "7.5",
            "units": null,
            "id": "ignored"
        }))
        .unwrap();

        assert_eq!(form.investment_type(), Some(InvestmentType::Fd));
        assert_eq!(form.raw(InvestmentField::TotalAmountInvested), Some("15000.5"));
        assert_eq!(form.raw(InvestmentField::InterestRate), Some("7.5"));
        assert_eq!(form.raw(InvestmentField::Units), None);
    }

    #[test]
    fn test_blank_type_means_no_selection() {
        let form: FormValues = serde_json::from_str(r#"{"type": "", "symbol": "X"}"#).unwrap();
        assert_eq!(form.investment_type(), None);
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result: Result<FormValues, _> = serde_json::from_str(r#"{"type": "CRYPTO"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_trimmed_treats_whitespace_as_blank() {
        let form = FormValues::new(None).with(InvestmentField::Symbol, "   ");
        assert_eq!(form.raw(InvestmentField::Symbol), Some("   "));
        assert_eq!(form.trimmed(InvestmentField::Symbol), None);
    }
}
