//! Investment Domain - Per-type field policy and portfolio summaries
//!
//! This crate provides:
//! - The five supported instrument types and the form fields they govern
//! - Field policy resolution (Required / Disabled / Optional per type)
//! - Submission validation producing a policy-conformant payload
//! - Card-level and portfolio-level gain/loss calculation
//! - A storage port with an in-memory adapter, and the service over it

pub mod error;
pub mod field;
pub mod form;
pub mod investment_type;
pub mod memory;
pub mod policy;
pub mod ports;
pub mod record;
pub mod service;
pub mod summary;
pub mod validation;

pub use error::InvestmentError;
pub use field::{FieldKind, InvestmentField};
pub use form::FormValues;
pub use investment_type::InvestmentType;
pub use memory::InMemoryInvestmentPort;
pub use policy::{resolve_policy, FieldPolicy, FieldRequirement};
pub use ports::InvestmentPort;
pub use record::InvestmentRecord;
pub use service::InvestmentService;
pub use summary::{aggregate, card_summary, CardSummary, PortfolioSummary};
pub use validation::{
    validate_form, validate_submission, SubmissionPayload, ValidationError,
    ValidationErrors,
};
