//! Storage ports shared by the finance domains
//!
//! Each domain declares its own port trait (`InvestmentPort`, `ExpensePort`,
//! `IncomePort`) on top of [`DomainPort`] and reports failures as
//! [`PortError`]. Every port call carries the `OwnerId` of the caller
//! explicitly; adapters never look at ambient session state.

use std::fmt;
use thiserror::Error;
use serde::{Deserialize, Serialize};

/// Failure reported by a record store
#[derive(Debug, Error)]
pub enum PortError {
    /// No record with this id exists for the caller
    #[error("Not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: String,
        id: String,
    },

    /// The write clashes with what is stored (duplicate id, stale version)
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
    },
}

impl PortError {
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }
}

/// Marker for domain ports: shareable across async tasks
pub trait DomainPort: Send + Sync + 'static {}

/// An adapter's answer to a health probe
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckResult {
    pub adapter_id: String,
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

impl HealthCheckResult {
    pub fn healthy(adapter_id: impl Into<String>) -> Self {
        Self {
            adapter_id: adapter_id.into(),
            checked_at: chrono::Utc::now(),
        }
    }
}

/// Adapters that can answer a health probe
#[async_trait::async_trait]
pub trait HealthCheckable: Send + Sync {
    async fn health_check(&self) -> HealthCheckResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_entity_and_id() {
        let error = PortError::not_found("Investment", "123");
        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "Not found: Investment with id 123");
    }

    #[test]
    fn test_conflict_is_not_not_found() {
        let conflict = PortError::conflict("stale version");
        assert!(!conflict.is_not_found());
        assert_eq!(conflict.to_string(), "Conflict: stale version");
    }

    #[test]
    fn test_health_result_serializes_camel_case() {
        let json = serde_json::to_value(HealthCheckResult::healthy("memory-investment-port")).unwrap();
        assert_eq!(json["adapterId"], "memory-investment-port");
        assert!(json.get("checkedAt").is_some());
    }
}
