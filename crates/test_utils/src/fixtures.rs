//! Pre-built Test Fixtures
//!
//! Ready-to-use data for the investment and cashflow domains. Fixtures are
//! valid under the current field policy unless their name says otherwise.

use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::OwnerId;
use domain_cashflow::{ExpenseCategory, ExpenseDraft, IncomeDraft};
use domain_investment::{FormValues, InvestmentField, InvestmentType};

/// Fixture for the login account
pub struct AuthFixtures;

impl AuthFixtures {
    pub fn email() -> &'static str {
        "investor@finsage.test"
    }

    pub fn password() -> &'static str {
        "correct horse battery staple"
    }

    pub fn jwt_secret() -> &'static str {
        "test-secret-please-ignore"
    }

    /// Argon2 PHC hash of [`AuthFixtures::password`]
    pub fn password_hash() -> String {
        Self::hash(Self::password())
    }

    /// Hashes any password with a fixed salt
    pub fn hash(password: &str) -> String {
        let salt = SaltString::encode_b64(b"finsage-fixture-salt").expect("static salt encodes");
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .expect("argon2 hashing succeeds")
            .to_string()
    }

    pub fn owner() -> OwnerId {
        OwnerId::from(Self::email())
    }

    pub fn other_owner() -> OwnerId {
        OwnerId::from("someone-else@finsage.test")
    }
}

/// Fixture for calendar dates
pub struct DateFixtures;

impl DateFixtures {
    pub fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
    }

    pub fn maturity() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date")
    }
}

/// Fixture for investment forms, one complete form per type
pub struct FormFixtures;

impl FormFixtures {
    /// A form for the type with every Required field filled
    pub fn complete(investment_type: InvestmentType) -> FormValues {
        match investment_type {
            InvestmentType::Stock => Self::stock(),
            InvestmentType::Etf => Self::fund(InvestmentType::Etf, "NIFTYBEES"),
            InvestmentType::MutualFund => Self::fund(InvestmentType::MutualFund, "PPFAS-FLEXI"),
            InvestmentType::Fd => Self::fd(),
            InvestmentType::Bond => Self::bond(),
        }
    }

    pub fn stock() -> FormValues {
        FormValues::new(Some(InvestmentType::Stock))
            .with(InvestmentField::Symbol, "AAPL")
            .with(InvestmentField::Units, "10")
            .with(InvestmentField::StartDate, "2024-03-01")
    }

    fn fund(investment_type: InvestmentType, symbol: &str) -> FormValues {
        FormValues::new(Some(investment_type))
            .with(InvestmentField::Symbol, symbol)
            .with(InvestmentField::Units, "25")
            .with(InvestmentField::StartDate, "2023-06-15")
            .with(InvestmentField::InterestRate, "0")
            .with(InvestmentField::BuyPrice, "210.50")
    }

    pub fn fd() -> FormValues {
        FormValues::new(Some(InvestmentType::Fd))
            .with(InvestmentField::Symbol, "FD-001")
            .with(InvestmentField::TotalAmountInvested, "10000")
            .with(InvestmentField::StartDate, "2024-01-01")
            .with(InvestmentField::EndDate, "2025-01-01")
            .with(InvestmentField::InterestRate, "7.5")
    }

    pub fn bond() -> FormValues {
        FormValues::new(Some(InvestmentType::Bond))
            .with(InvestmentField::Symbol, "GOI-2030")
            .with(InvestmentField::Units, "10")
            .with(InvestmentField::BuyPrice, "1000")
            .with(InvestmentField::StartDate, "2024-01-01")
            .with(InvestmentField::EndDate, "2030-01-01")
            .with(InvestmentField::InterestRate, "7.1")
    }

    /// The same form as JSON, the way the dashboard posts it
    pub fn json(form: &FormValues) -> serde_json::Value {
        serde_json::to_value(form).expect("form serializes")
    }
}

/// Fixture for cashflow drafts
pub struct CashflowFixtures;

impl CashflowFixtures {
    pub fn groceries() -> ExpenseDraft {
        ExpenseDraft::new(ExpenseCategory::Food, dec!(2450.75))
    }

    pub fn rent() -> ExpenseDraft {
        ExpenseDraft::new(ExpenseCategory::Bills, dec!(25000))
    }

    pub fn salary_2024() -> IncomeDraft {
        IncomeDraft::new(dec!(1800000), 2024)
    }
}
