//! Optimistic concurrency for editable records
//!
//! Every stored record carries a `version` that starts at 0 and increases by
//! one on each update. An update may name the version it was based on; if the
//! stored record has moved on, the update is refused.

use crate::error::CashflowError;

/// A record guarded by a version counter
pub trait Versioned {
    fn version(&self) -> u64;
}

/// Checks the caller's expected version against the stored one
///
/// `None` skips the check.
pub fn check_version<T: Versioned>(stored: &T, expected: Option<u64>) -> Result<(), CashflowError> {
    match expected {
        Some(expected) if expected != stored.version() => Err(CashflowError::VersionConflict {
            expected,
            actual: stored.version(),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Doc(u64);

    impl Versioned for Doc {
        fn version(&self) -> u64 {
            self.0
        }
    }

    #[test]
    fn test_matching_or_absent_version_passes() {
        assert!(check_version(&Doc(3), Some(3)).is_ok());
        assert!(check_version(&Doc(3), None).is_ok());
    }

    #[test]
    fn test_stale_version_conflicts() {
        let err = check_version(&Doc(4), Some(3)).unwrap_err();
        assert!(matches!(err, CashflowError::VersionConflict { expected: 3, actual: 4 }));
    }
}
