//! Request and response bodies

pub mod auth;
pub mod cashflow;
pub mod investment;
pub mod paging;
