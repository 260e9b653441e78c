//! Calendar date ranges
//!
//! Holding periods (deposit tenure, bond maturity) are expressed as plain
//! calendar dates with no timezone component. The end date is optional and,
//! when present, may not precede the start.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// ISO calendar-date format used on the wire
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid range: end {end} is before start {start}")]
    EndBeforeStart {
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("Invalid calendar date: {0}")]
    InvalidDate(String),
}

/// Parses an ISO `YYYY-MM-DD` calendar date
///
/// Surrounding whitespace is ignored. Anything carrying a time or timezone
/// component is rejected.
pub fn parse_iso_date(raw: &str) -> Result<NaiveDate, TemporalError> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT)
        .map_err(|_| TemporalError::InvalidDate(trimmed.to_string()))
}

/// A closed-or-open range of calendar dates
///
/// Both bounds are inclusive. A range with no end is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Creates a new range, rejecting an end that precedes the start
    pub fn new(start: NaiveDate, end: Option<NaiveDate>) -> Result<Self, TemporalError> {
        if let Some(end) = end {
            if end < start {
                return Err(TemporalError::EndBeforeStart { start, end });
            }
        }
        Ok(Self { start, end })
    }

    /// Creates an open-ended range
    pub fn open(start: NaiveDate) -> Self {
        Self { start, end: None }
    }

    /// Returns true if the date falls inside the range
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && self.end.map_or(true, |e| date <= e)
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Number of days between start and end, if bounded
    pub fn days(&self) -> Option<i64> {
        self.end.map(|e| (e - self.start).num_days())
    }
}

/// Checks that `end` does not precede `start` when both are known
///
/// Missing bounds are never an error here; requiredness is decided by the
/// caller.
pub fn check_order(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<(), TemporalError> {
    match (start, end) {
        (Some(start), Some(end)) => DateRange::new(start, Some(end)).map(|_| ()),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_day_range_is_valid() {
        let range = DateRange::new(date(2024, 1, 1), Some(date(2024, 1, 1))).unwrap();
        assert_eq!(range.days(), Some(0));
    }

    #[test]
    fn test_parse_rejects_timestamp() {
        assert!(parse_iso_date("2024-01-01T00:00:00Z").is_err());
        assert_eq!(parse_iso_date(" 2024-02-29 ").unwrap(), date(2024, 2, 29));
    }
}
