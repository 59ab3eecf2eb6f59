//! Visible date window.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// An inclusive range of dates the schedule grid currently shows.
///
/// Workload capacity is computed per window: `week_count` rounds partial
/// weeks up, so a 10-day window counts as two weeks of capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Create a window. Returns `None` when `end` precedes `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Number of days in the window, inclusive of both endpoints.
    pub fn days(&self) -> u32 {
        u32::try_from((self.end - self.start).num_days()).unwrap_or(0) + 1
    }

    /// Number of capacity weeks, partial weeks rounded up.
    pub fn week_count(&self) -> u32 {
        self.days().div_ceil(7)
    }

    /// Whether `date` falls within the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Iterate every date in the window in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let days = self.days() as u64;
        (0..days).filter_map(|offset| self.start.checked_add_days(Days::new(offset)))
    }
}
