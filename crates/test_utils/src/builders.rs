//! Test Data Builders
//!
//! Builder patterns for constructing investment forms and records with
//! sensible defaults, so tests state only the fields they care about.

use rust_decimal::Decimal;

use core_kernel::OwnerId;
use domain_investment::{
    validate_form, FormValues, InvestmentField, InvestmentRecord, InvestmentType,
};

use crate::fixtures::{AuthFixtures, FormFixtures};

/// Builder for investment forms and the records they produce
pub struct TestInvestmentBuilder {
    form: FormValues,
    owner: OwnerId,
    current_value: Option<Decimal>,
}

impl Default for TestInvestmentBuilder {
    fn default() -> Self {
        Self::new(InvestmentType::Stock)
    }
}

impl TestInvestmentBuilder {
    /// Starts from a complete form for the type
    pub fn new(investment_type: InvestmentType) -> Self {
        Self {
            form: FormFixtures::complete(investment_type),
            owner: AuthFixtures::owner(),
            current_value: None,
        }
    }

    /// Sets a field's raw text
    pub fn with(mut self, field: InvestmentField, value: impl Into<String>) -> Self {
        self.form.set(field, value);
        self
    }

    /// Blanks a field
    pub fn without(self, field: InvestmentField) -> Self {
        self.with(field, "")
    }

    /// Changes the selected type, keeping every other value
    pub fn with_type(mut self, investment_type: Option<InvestmentType>) -> Self {
        self.form.set_type(investment_type);
        self
    }

    pub fn with_owner(mut self, owner: OwnerId) -> Self {
        self.owner = owner;
        self
    }

    /// Sets the total invested (FD's own field)
    pub fn with_invested(self, amount: Decimal) -> Self {
        self.with(InvestmentField::TotalAmountInvested, amount.to_string())
    }

    /// Market value to stamp on the built record
    ///
    /// `currentValue` is never accepted from forms, so it is set on the record
    /// directly.
    pub fn with_current_value(mut self, value: Decimal) -> Self {
        self.current_value = Some(value);
        self
    }

    /// Builds the raw form
    pub fn build_form(self) -> FormValues {
        self.form
    }

    /// Validates the form and builds a stored record
    ///
    /// # Panics
    ///
    /// Panics if the form does not pass validation
    pub fn build_record(self) -> InvestmentRecord {
        let payload = validate_form(&self.form)
            .unwrap_or_else(|errors| panic!("builder produced an invalid form: {errors}"));
        let mut record = InvestmentRecord::from_submission(self.owner, payload);
        if self.current_value.is_some() {
            record.current_value = self.current_value;
        }
        record
    }
}
