//! Unit tests for the Identifiers module
//!
//! Tests cover identifier creation, parsing, conversion, and display
//! formatting.

use core_kernel::{InvestmentId, ExpenseId, IncomeId, OwnerId};
use std::collections::HashSet;
use uuid::Uuid;

mod investment_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = InvestmentId::new();
        let id2 = InvestmentId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_new_v7_generates_time_ordered_ids() {
        let id1 = InvestmentId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let id2 = InvestmentId::new_v7();
        let uuid1: Uuid = id1.into();
        let uuid2: Uuid = id2.into();
        assert!(uuid1 < uuid2);
    }

    #[test]
    fn test_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = InvestmentId::from_uuid(uuid);
        assert_eq!(*id.as_uuid(), uuid);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(InvestmentId::prefix(), "INV");
        assert_eq!(ExpenseId::prefix(), "EXP");
        assert_eq!(IncomeId::prefix(), "INC");
    }

    #[test]
    fn test_parse_with_and_without_prefix() {
        let uuid = Uuid::new_v4();
        let with_prefix: InvestmentId = format!("INV-{}", uuid).parse().unwrap();
        let bare: InvestmentId = uuid.to_string().parse().unwrap();
        assert_eq!(with_prefix, bare);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let result: Result<InvestmentId, _> = "INV-not-a-uuid".parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_serializes_as_bare_uuid() {
        let uuid = Uuid::new_v4();
        let id = InvestmentId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));
    }

    #[test]
    fn test_hashable() {
        let mut set = HashSet::new();
        let id = InvestmentId::new();
        set.insert(id);
        set.insert(id);
        assert_eq!(set.len(), 1);
    }
}

mod owner_id_tests {
    use super::*;

    #[test]
    fn test_owner_id_round_trips_subject() {
        let owner = OwnerId::new("demo@finsage.local");
        assert_eq!(owner.as_str(), "demo@finsage.local");
        assert_eq!(owner.to_string(), "demo@finsage.local");
    }

    #[test]
    fn test_owner_ids_compare_by_subject() {
        assert_eq!(OwnerId::from("a@x.io"), OwnerId::new("a@x.io".to_string()));
        assert_ne!(OwnerId::from("a@x.io"), OwnerId::from("b@x.io"));
    }
}
