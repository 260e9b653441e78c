//! In-memory cashflow stores

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt::{self, Display};
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::RwLock;

use core_kernel::{
    DomainPort, ExpenseId, HealthCheckResult, HealthCheckable, IncomeId, OwnerId, Page,
    PageRequest, PortError,
};

use crate::expense::Expense;
use crate::income::Income;
use crate::ports::{ExpensePort, IncomePort};
use crate::versioning::Versioned;

/// What the shared store needs to know about a record
trait Stored: Versioned + Clone + Send + Sync {
    type Id: Copy + Eq + Hash + Display + Send + Sync;
    const ENTITY: &'static str;

    fn id(&self) -> Self::Id;
    fn owner(&self) -> &OwnerId;
    fn created_at(&self) -> DateTime<Utc>;
}

impl Stored for Expense {
    type Id = ExpenseId;
    const ENTITY: &'static str = "Expense";

    fn id(&self) -> ExpenseId {
        self.id
    }

    fn owner(&self) -> &OwnerId {
        &self.owner_id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Stored for Income {
    type Id = IncomeId;
    const ENTITY: &'static str = "Income";

    fn id(&self) -> IncomeId {
        self.id
    }

    fn owner(&self) -> &OwnerId {
        &self.owner_id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Owner-scoped map shared by both adapters
struct OwnedStore<T: Stored> {
    records: Arc<RwLock<HashMap<T::Id, T>>>,
}

impl<T: Stored> fmt::Debug for OwnedStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedStore").field("entity", &T::ENTITY).finish_non_exhaustive()
    }
}

impl<T: Stored> Clone for OwnedStore<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<T: Stored> Default for OwnedStore<T> {
    fn default() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<T: Stored> OwnedStore<T> {
    async fn list(&self, owner: &OwnerId, page: PageRequest) -> Page<T> {
        let records = self.records.read().await;
        let mut owned: Vec<T> = records
            .values()
            .filter(|r| r.owner() == owner)
            .cloned()
            .collect();
        owned.sort_by_key(|r| r.created_at());
        Page::slice(owned, page)
    }

    async fn get(&self, owner: &OwnerId, id: T::Id) -> Result<T, PortError> {
        self.records
            .read()
            .await
            .get(&id)
            .filter(|r| r.owner() == owner)
            .cloned()
            .ok_or_else(|| PortError::not_found(T::ENTITY, id))
    }

    async fn insert(&self, record: T) -> Result<T, PortError> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.id()) {
            return Err(PortError::conflict(format!("{} already exists", record.id())));
        }
        records.insert(record.id(), record.clone());
        Ok(record)
    }

    async fn replace(&self, record: T) -> Result<T, PortError> {
        let mut records = self.records.write().await;
        let Some(existing) = records.get_mut(&record.id()).filter(|r| r.owner() == record.owner()) else {
            return Err(PortError::not_found(T::ENTITY, record.id()));
        };
        if existing.version() + 1 != record.version() {
            return Err(PortError::conflict(format!(
                "{} {} is at version {}",
                T::ENTITY,
                record.id(),
                existing.version()
            )));
        }
        *existing = record.clone();
        Ok(record)
    }

    async fn delete(&self, owner: &OwnerId, id: T::Id) -> Result<(), PortError> {
        let mut records = self.records.write().await;
        match records.get(&id) {
            Some(existing) if existing.owner() == owner => {
                records.remove(&id);
                Ok(())
            }
            _ => Err(PortError::not_found(T::ENTITY, id)),
        }
    }
}

/// Expenses held in a process-local map
#[derive(Debug, Clone, Default)]
pub struct InMemoryExpensePort {
    store: OwnedStore<Expense>,
}

impl InMemoryExpensePort {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DomainPort for InMemoryExpensePort {}

#[async_trait]
impl HealthCheckable for InMemoryExpensePort {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::healthy("memory-expense-port")
    }
}

#[async_trait]
impl ExpensePort for InMemoryExpensePort {
    async fn list(&self, owner: &OwnerId, page: PageRequest) -> Result<Page<Expense>, PortError> {
        Ok(self.store.list(owner, page).await)
    }

    async fn get(&self, owner: &OwnerId, id: ExpenseId) -> Result<Expense, PortError> {
        self.store.get(owner, id).await
    }

    async fn insert(&self, expense: Expense) -> Result<Expense, PortError> {
        self.store.insert(expense).await
    }

    async fn replace(&self, expense: Expense) -> Result<Expense, PortError> {
        self.store.replace(expense).await
    }

    async fn delete(&self, owner: &OwnerId, id: ExpenseId) -> Result<(), PortError> {
        self.store.delete(owner, id).await
    }
}

/// Income records held in a process-local map
#[derive(Debug, Clone, Default)]
pub struct InMemoryIncomePort {
    store: OwnedStore<Income>,
}

impl InMemoryIncomePort {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DomainPort for InMemoryIncomePort {}

#[async_trait]
impl HealthCheckable for InMemoryIncomePort {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::healthy("memory-income-port")
    }
}

#[async_trait]
impl IncomePort for InMemoryIncomePort {
    async fn list(&self, owner: &OwnerId, page: PageRequest) -> Result<Page<Income>, PortError> {
        Ok(self.store.list(owner, page).await)
    }

    async fn get(&self, owner: &OwnerId, id: IncomeId) -> Result<Income, PortError> {
        self.store.get(owner, id).await
    }

    async fn insert(&self, income: Income) -> Result<Income, PortError> {
        self.store.insert(income).await
    }

    async fn replace(&self, income: Income) -> Result<Income, PortError> {
        self.store.replace(income).await
    }

    async fn delete(&self, owner: &OwnerId, id: IncomeId) -> Result<(), PortError> {
        self.store.delete(owner, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expense::{ExpenseCategory, ExpenseDraft};
    use rust_decimal_macros::dec;

    fn expense() -> Expense {
        Expense::new(
            OwnerId::from("a@b.io"),
            ExpenseDraft::new(ExpenseCategory::Food, dec!(250)),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_replace_requires_next_version() {
        let port = InMemoryExpensePort::new();
        let stored = port.insert(expense()).await.unwrap();

        let mut same_version = stored.clone();
        same_version.amount = dec!(1);
        assert!(matches!(port.replace(same_version).await, Err(PortError::Conflict { .. })));

        let mut next = stored.clone();
        next.apply(ExpenseDraft::new(ExpenseCategory::Food, dec!(300))).unwrap();
        assert_eq!(port.replace(next).await.unwrap().version, 1);
    }

    #[tokio::test]
    async fn test_replace_by_other_owner_is_not_found() {
        let port = InMemoryExpensePort::new();
        let mut stored = port.insert(expense()).await.unwrap();
        stored.owner_id = OwnerId::from("eve@b.io");
        stored.version += 1;
        assert!(port.replace(stored).await.unwrap_err().is_not_found());
    }
}
