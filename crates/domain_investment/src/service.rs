//! Investment application service
//!
//! Validates submissions against the type's field policy before anything
//! reaches the store, and keeps each owner's portfolio summary cached until
//! one of their investments changes.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use core_kernel::{HealthCheckResult, InvestmentId, OwnerId, Page, PageRequest};

use crate::error::InvestmentError;
use crate::form::FormValues;
use crate::ports::InvestmentPort;
use crate::record::InvestmentRecord;
use crate::summary::{aggregate, PortfolioSummary};
use crate::validation::validate_form;

/// Cached summaries plus a per-owner write generation
///
/// Every mutation bumps the owner's generation. A summary computed from a
/// read that started under an older generation is never stored.
#[derive(Debug, Default)]
struct SummaryCache {
    entries: HashMap<OwnerId, PortfolioSummary>,
    generations: HashMap<OwnerId, u64>,
}

impl SummaryCache {
    fn generation(&self, owner: &OwnerId) -> u64 {
        self.generations.get(owner).copied().unwrap_or_default()
    }
}

/// Investment use cases over a storage port
#[derive(Clone)]
pub struct InvestmentService {
    port: Arc<dyn InvestmentPort>,
    summaries: Arc<RwLock<SummaryCache>>,
}

impl InvestmentService {
    pub fn new(port: Arc<dyn InvestmentPort>) -> Self {
        Self {
            port,
            summaries: Arc::new(RwLock::new(SummaryCache::default())),
        }
    }

    pub async fn list(
        &self,
        owner: &OwnerId,
        page: PageRequest,
    ) -> Result<Page<InvestmentRecord>, InvestmentError> {
        Ok(self.port.list(owner, page).await?)
    }

    pub async fn get(&self, owner: &OwnerId, id: InvestmentId) -> Result<InvestmentRecord, InvestmentError> {
        Ok(self.port.get(owner, id).await?)
    }

    /// Validates and stores a new investment
    pub async fn create(&self, owner: &OwnerId, form: &FormValues) -> Result<InvestmentRecord, InvestmentError> {
        let payload = validate_form(form)?;
        let record = self
            .port
            .insert(InvestmentRecord::from_submission(owner.clone(), payload))
            .await?;

        self.clear_cache(owner).await;
        tracing::info!(
            investment_id = %record.id,
            investment_type = %record.investment_type,
            "Investment created"
        );
        Ok(record)
    }

    /// Re-validates a full form and replaces the stored values
    ///
    /// The form is checked against the policy of the type it selects, which
    /// may differ from the stored type.
    pub async fn update(
        &self,
        owner: &OwnerId,
        id: InvestmentId,
        form: &FormValues,
    ) -> Result<InvestmentRecord, InvestmentError> {
        let mut record = self.port.get(owner, id).await?;
        let payload = validate_form(form)?;
        let previous_type = record.investment_type;
        record.apply(payload);
        let record = self.port.replace(record).await?;

        self.clear_cache(owner).await;
        tracing::info!(
            investment_id = %record.id,
            from_type = %previous_type,
            to_type = %record.investment_type,
            "Investment updated"
        );
        Ok(record)
    }

    pub async fn delete(&self, owner: &OwnerId, id: InvestmentId) -> Result<(), InvestmentError> {
        self.port.delete(owner, id).await?;
        self.clear_cache(owner).await;
        tracing::info!(investment_id = %id, "Investment deleted");
        Ok(())
    }

    /// The owner's portfolio totals, served from cache when fresh
    pub async fn summary(&self, owner: &OwnerId) -> Result<PortfolioSummary, InvestmentError> {
        if let Some(summary) = self.summaries.read().await.entries.get(owner) {
            tracing::debug!(owner = %owner, "Portfolio summary cache hit");
            return Ok(*summary);
        }
        self.refresh_cache(owner).await
    }

    /// Recomputes the owner's summary and caches it
    ///
    /// The result is returned either way, but it is only cached when no
    /// mutation for the owner landed while the records were being read.
    pub async fn refresh_cache(&self, owner: &OwnerId) -> Result<PortfolioSummary, InvestmentError> {
        let generation = self.summaries.read().await.generation(owner);
        let records = self.port.list_all(owner).await?;
        let summary = aggregate(&records)?;

        let mut cache = self.summaries.write().await;
        if cache.generation(owner) == generation {
            cache.entries.insert(owner.clone(), summary);
            tracing::debug!(owner = %owner, records = records.len(), "Portfolio summary computed");
        } else {
            tracing::debug!(owner = %owner, "Portfolio changed during summary read; not caching");
        }
        Ok(summary)
    }

    /// True when a summary for the owner is currently cached
    pub async fn is_cached(&self, owner: &OwnerId) -> bool {
        self.summaries.read().await.entries.contains_key(owner)
    }

    /// Drops the owner's cached summary; the next read recomputes it
    ///
    /// Also invalidates any summary read already in flight for the owner.
    pub async fn clear_cache(&self, owner: &OwnerId) {
        let mut cache = self.summaries.write().await;
        *cache.generations.entry(owner.clone()).or_default() += 1;
        if cache.entries.remove(owner).is_some() {
            tracing::debug!(owner = %owner, "Portfolio summary cache cleared");
        }
    }

    pub async fn health(&self) -> HealthCheckResult {
        self.port.health_check().await
    }
}
