//! Investment storage port
//!
//! The `InvestmentPort` trait is everything the investment service needs from
//! a record store. Every call names the owner it acts for; a record belonging
//! to someone else is reported as not found.
//!
//! ```rust,ignore
//! let port: Arc<dyn InvestmentPort> = Arc::new(InMemoryInvestmentPort::new());
//! let service = InvestmentService::new(port);
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, InvestmentId, OwnerId, Page, PageRequest, PortError};

use crate::record::InvestmentRecord;

/// Record store for investments
#[async_trait]
pub trait InvestmentPort: DomainPort + HealthCheckable {
    /// One page of the owner's investments, oldest first
    async fn list(&self, owner: &OwnerId, page: PageRequest) -> Result<Page<InvestmentRecord>, PortError>;

    /// Every investment of the owner, oldest first
    async fn list_all(&self, owner: &OwnerId) -> Result<Vec<InvestmentRecord>, PortError>;

    /// Retrieves one investment
    ///
    /// # Returns
    ///
    /// The record, or `PortError::NotFound` when it does not exist or belongs
    /// to another owner
    async fn get(&self, owner: &OwnerId, id: InvestmentId) -> Result<InvestmentRecord, PortError>;

    /// Stores a new record; fails with `Conflict` if the id is taken
    async fn insert(&self, record: InvestmentRecord) -> Result<InvestmentRecord, PortError>;

    /// Replaces a stored record of the same owner
    async fn replace(&self, record: InvestmentRecord) -> Result<InvestmentRecord, PortError>;

    /// Removes an investment
    async fn delete(&self, owner: &OwnerId, id: InvestmentId) -> Result<(), PortError>;
}
