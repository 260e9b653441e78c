//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! FinSage test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built forms, drafts, and login credentials
//! - `builders`: Builder patterns for investment form construction
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
