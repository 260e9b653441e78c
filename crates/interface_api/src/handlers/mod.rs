//! Request handlers, one module per resource

pub mod auth;
pub mod cache;
pub mod expense;
pub mod health;
pub mod income;
pub mod investment;
