//! Expense and income use cases

use std::sync::Arc;

use core_kernel::{ExpenseId, HealthCheckResult, IncomeId, OwnerId, Page, PageRequest, PortError};

use crate::error::CashflowError;
use crate::expense::{Expense, ExpenseDraft};
use crate::income::{Income, IncomeDraft};
use crate::ports::{ExpensePort, IncomePort};
use crate::versioning::check_version;


/// Expense use cases over a storage port
#[derive(Clone)]
pub struct ExpenseService {
    port: Arc<dyn ExpensePort>,
}

impl ExpenseService {
    pub fn new(port: Arc<dyn ExpensePort>) -> Self {
        Self { port }
    }

    pub async fn list(&self, owner: &OwnerId, page: PageRequest) -> Result<Page<Expense>, CashflowError> {
        Ok(self.port.list(owner, page).await?)
    }

    pub async fn get(&self, owner: &OwnerId, id: ExpenseId) -> Result<Expense, CashflowError> {
        Ok(self.port.get(owner, id).await?)
    }

    pub async fn create(&self, owner: &OwnerId, draft: ExpenseDraft) -> Result<Expense, CashflowError> {
        let expense = self.port.insert(Expense::new(owner.clone(), draft)?).await?;
        tracing::info!(
            expense_id = %expense.id,
            category = %expense.category,
            "Expense created"
        );
        Ok(expense)
    }

    /// Updates an expense, refusing if `expected_version` is stale
    pub async fn update(
        &self,
        owner: &OwnerId,
        id: ExpenseId,
        draft: ExpenseDraft,
        expected_version: Option<u64>,
    ) -> Result<Expense, CashflowError> {
        let mut expense = self.port.get(owner, id).await?;
        check_version(&expense, expected_version)?;
        let based_on = expense.version;
        expense.apply(draft)?;

        let expense = match self.port.replace(expense).await {
            Ok(stored) => stored,
            // Another writer got in between the read and the write
            Err(PortError::Conflict { .. }) => {
                let current = self.port.get(owner, id).await?;
                return Err(CashflowError::VersionConflict {
                    expected: based_on,
                    actual: current.version,
                });
            }
            Err(other) => return Err(other.into()),
        };
        tracing::info!(expense_id = %expense.id, version = expense.version, "Expense updated");
        Ok(expense)
    }

    pub async fn delete(&self, owner: &OwnerId, id: ExpenseId) -> Result<(), CashflowError> {
        self.port.delete(owner, id).await?;
        tracing::info!(expense_id = %id, "Expense deleted");
        Ok(())
    }

    pub async fn health(&self) -> HealthCheckResult {
        self.port.health_check().await
    }
}

/// Income use cases over a storage port
#[derive(Clone)]
pub struct IncomeService {
    port: Arc<dyn IncomePort>,
}

impl IncomeService {
    pub fn new(port: Arc<dyn IncomePort>) -> Self {
        Self { port }
    }

    pub async fn list(&self, owner: &OwnerId, page: PageRequest) -> Result<Page<Income>, CashflowError> {
        Ok(self.port.list(owner, page).await?)
    }

    pub async fn get(&self, owner: &OwnerId, id: IncomeId) -> Result<Income, CashflowError> {
        Ok(self.port.get(owner, id).await?)
    }

    pub async fn create(&self, owner: &OwnerId, draft: IncomeDraft) -> Result<Income, CashflowError> {
        let income = self.port.insert(Income::new(owner.clone(), draft)?).await?;
        tracing::info!(income_id = %income.id, year = income.income_year, "Income recorded");
        Ok(income)
    }

    /// Updates an income record, refusing if `expected_version` is stale
    pub async fn update(
        &self,
        owner: &OwnerId,
        id: IncomeId,
        draft: IncomeDraft,
        expected_version: Option<u64>,
    ) -> Result<Income, CashflowError> {
        let mut income = self.port.get(owner, id).await?;
        check_version(&income, expected_version)?;
        let based_on = income.version;
        income.apply(draft)?;

        let income = match self.port.replace(income).await {
            Ok(stored) => stored,
            // Another writer got in between the read and the write
            Err(PortError::Conflict { .. }) => {
                let current = self.port.get(owner, id).await?;
                return Err(CashflowError::VersionConflict {
                    expected: based_on,
                    actual: current.version,
                });
            }
            Err(other) => return Err(other.into()),
        };
        tracing::info!(income_id = %income.id, version = income.version, "Income updated");
        Ok(income)
    }

    pub async fn delete(&self, owner: &OwnerId, id: IncomeId) -> Result<(), CashflowError> {
        self.port.delete(owner, id).await?;
        tracing::info!(income_id = %id, "Income deleted");
        Ok(())
    }

    pub async fn health(&self) -> HealthCheckResult {
        self.port.health_check().await
    }
}
