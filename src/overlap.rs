//! Detection of editorial periods whose date windows collide.
//!
//! Both bounds of an interval are inclusive calendar days, so two periods
//! that share a single day overlap. The check runs against a snapshot of the
//! stored periods; a conflicting write landing between the check and the
//! subsequent insert or update is not detected.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::domain::editorial_number::EditorialNumber;

/// A stored period seen through the overlap check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateInterval {
    pub id: i32,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub active: bool,
}

impl DateInterval {
    /// Whether `day` falls inside the period, bounds included.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

impl From<&EditorialNumber> for DateInterval {
    fn from(value: &EditorialNumber) -> Self {
        Self {
            id: value.id,
            start: value.start_date,
            end: value.end_date,
            active: value.is_active,
        }
    }
}

/// Candidate window checked against the stored periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("la fecha de inicio debe ser anterior a la fecha de fin")]
pub struct InvalidRange;

impl DateRange {
    /// Build a range, requiring `start` to be strictly before `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, InvalidRange> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(InvalidRange)
        }
    }

    fn intersects(&self, interval: &DateInterval) -> bool {
        self.start <= interval.end && interval.start <= self.end
    }
}

/// Returns the first active interval, other than `exclude_id`, that overlaps
/// `candidate`.
pub fn find_overlap<'a>(
    candidate: &DateRange,
    existing: &'a [DateInterval],
    exclude_id: Option<i32>,
) -> Option<&'a DateInterval> {
    existing
        .iter()
        .filter(|interval| interval.active)
        .filter(|interval| Some(interval.id) != exclude_id)
        .find(|interval| candidate.intersects(interval))
}
