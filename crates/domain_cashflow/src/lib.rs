//! Cashflow Domain - Expenses and annual income
//!
//! This crate provides:
//! - Categorised expenses with strictly positive amounts
//! - Annual post-tax income records per calendar year
//! - Version counters guarding concurrent edits
//! - Storage ports, in-memory adapters, and services over them

pub mod error;
pub mod expense;
pub mod income;
pub mod memory;
pub mod ports;
pub mod service;
pub mod versioning;

pub use error::CashflowError;
pub use expense::{Expense, ExpenseCategory, ExpenseDraft};
pub use income::{Income, IncomeDraft, MAX_INCOME_YEAR, MIN_INCOME_YEAR};
pub use memory::{InMemoryExpensePort, InMemoryIncomePort};
pub use ports::{ExpensePort, IncomePort};
pub use service::{ExpenseService, IncomeService};
pub use versioning::{check_version, Versioned};
