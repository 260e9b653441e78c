//! In-memory investment store

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use core_kernel::{
    DomainPort, HealthCheckResult, HealthCheckable, InvestmentId, OwnerId, Page, PageRequest,
    PortError,
};

use crate::ports::InvestmentPort;
use crate::record::InvestmentRecord;

const ENTITY: &str = "Investment";

/// Investments held in a process-local map
///
/// Cloning shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInvestmentPort {
    records: Arc<RwLock<HashMap<InvestmentId, InvestmentRecord>>>,
}

impl InMemoryInvestmentPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the store
    pub async fn with_records(records: Vec<InvestmentRecord>) -> Self {
        let port = Self::new();
        {
            let mut map = port.records.write().await;
            for record in records {
                map.insert(record.id, record);
            }
        }
        port
    }

    async fn owned_by(&self, owner: &OwnerId) -> Vec<InvestmentRecord> {
        let records = self.records.read().await;
        let mut owned: Vec<_> = records
            .values()
            .filter(|r| &r.owner_id == owner)
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.as_uuid().cmp(b.id.as_uuid())));
        owned
    }
}

impl DomainPort for InMemoryInvestmentPort {}

#[async_trait]
impl HealthCheckable for InMemoryInvestmentPort {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::healthy("memory-investment-port")
    }
}

#[async_trait]
impl InvestmentPort for InMemoryInvestmentPort {
    async fn list(&self, owner: &OwnerId, page: PageRequest) -> Result<Page<InvestmentRecord>, PortError> {
        Ok(Page::slice(self.owned_by(owner).await, page))
    }

    async fn list_all(&self, owner: &OwnerId) -> Result<Vec<InvestmentRecord>, PortError> {
        Ok(self.owned_by(owner).await)
    }

    async fn get(&self, owner: &OwnerId, id: InvestmentId) -> Result<InvestmentRecord, PortError> {
        self.records
            .read()
            .await
            .get(&id)
            .filter(|r| &r.owner_id == owner)
            .cloned()
            .ok_or_else(|| PortError::not_found(ENTITY, id))
    }

    async fn insert(&self, record: InvestmentRecord) -> Result<InvestmentRecord, PortError> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.id) {
            return Err(PortError::conflict(format!("{} already exists", record.id)));
        }
        records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn replace(&self, record: InvestmentRecord) -> Result<InvestmentRecord, PortError> {
        let mut records = self.records.write().await;
        match records.get_mut(&record.id) {
            Some(existing) if existing.owner_id == record.owner_id => {
                *existing = record.clone();
                Ok(record)
            }
            _ => Err(PortError::not_found(ENTITY, record.id)),
        }
    }

    async fn delete(&self, owner: &OwnerId, id: InvestmentId) -> Result<(), PortError> {
        let mut records = self.records.write().await;
        match records.get(&id) {
            Some(existing) if &existing.owner_id == owner => {
                records.remove(&id);
                Ok(())
            }
            _ => Err(PortError::not_found(ENTITY, id)),
        }
    }
}
