//! Cashflow storage ports
//!
//! Both ports scope every call to an owner. `replace` is a compare-and-swap on
//! the version: the record passed in must be exactly one version ahead of the
//! stored one, otherwise the adapter reports `PortError::Conflict`.

use async_trait::async_trait;

use core_kernel::{DomainPort, ExpenseId, HealthCheckable, IncomeId, OwnerId, Page, PageRequest, PortError};

use crate::expense::Expense;
use crate::income::Income;

/// Record store for expenses
#[async_trait]
pub trait ExpensePort: DomainPort + HealthCheckable {
    async fn list(&self, owner: &OwnerId, page: PageRequest) -> Result<Page<Expense>, PortError>;

    async fn get(&self, owner: &OwnerId, id: ExpenseId) -> Result<Expense, PortError>;

    async fn insert(&self, expense: Expense) -> Result<Expense, PortError>;

    async fn replace(&self, expense: Expense) -> Result<Expense, PortError>;

    async fn delete(&self, owner: &OwnerId, id: ExpenseId) -> Result<(), PortError>;
}

/// Record store for income records
#[async_trait]
pub trait IncomePort: DomainPort + HealthCheckable {
    async fn list(&self, owner: &OwnerId, page: PageRequest) -> Result<Page<Income>, PortError>;

    async fn get(&self, owner: &OwnerId, id: IncomeId) -> Result<Income, PortError>;

    async fn insert(&self, income: Income) -> Result<Income, PortError>;

    async fn replace(&self, income: Income) -> Result<Income, PortError>;

    async fn delete(&self, owner: &OwnerId, id: IncomeId) -> Result<(), PortError>;
}
