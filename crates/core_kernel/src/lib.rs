//! Core Kernel - Foundational types shared by the finance domains
//!
//! This crate provides the building blocks used across all domain modules:
//! - Strongly-typed identifiers for records and their owners
//! - Calendar date ranges for holding periods
//! - Port abstractions that storage adapters implement
//! - Paged listing envelopes

pub mod temporal;
pub mod identifiers;
pub mod error;
pub mod ports;
pub mod paging;

pub use temporal::{DateRange, TemporalError};
pub use identifiers::{InvestmentId, ExpenseId, IncomeId, OwnerId};
pub use error::CoreError;
pub use ports::{PortError, DomainPort, HealthCheckResult, HealthCheckable};
pub use paging::{Page, PageRequest};
