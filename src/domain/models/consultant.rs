//! Consultant and leave domain models.
//!
//! Leave intervals feed two things: backup substitution in the
//! transformer, and the on-leave flag on workload summaries. Only
//! approved leave affects either.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Approval status of a leave interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// One contiguous leave booking for a consultant, dates inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveInterval {
    pub consultant_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: LeaveStatus,
}

impl LeaveInterval {
    /// Whether `date` falls within this interval.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// A staff member eligible for payroll assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consultant {
    pub id: Uuid,
    pub name: String,
    pub role: String,
}

impl Consultant {
    pub fn new(id: Uuid, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            role: role.into(),
        }
    }
}

/// Indexed lookup over approved leave intervals.
///
/// Missing data degrades to "not on leave" rather than an error, so a
/// failed or not-yet-arrived leave fetch never blocks the schedule from
/// rendering.
#[derive(Debug, Clone, Default)]
pub struct LeaveCalendar {
    by_consultant: HashMap<Uuid, Vec<LeaveInterval>>,
}

impl LeaveCalendar {
    /// Build a calendar from raw intervals, keeping only approved ones.
    pub fn from_intervals(intervals: Vec<LeaveInterval>) -> Self {
        let mut by_consultant: HashMap<Uuid, Vec<LeaveInterval>> = HashMap::new();
        for interval in intervals {
            if interval.status == LeaveStatus::Approved {
                by_consultant
                    .entry(interval.consultant_id)
                    .or_default()
                    .push(interval);
            }
        }
        Self { by_consultant }
    }

    /// An empty calendar: nobody is on leave.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether `consultant_id` has approved leave covering `date`.
    pub fn is_on_leave(&self, consultant_id: Uuid, date: NaiveDate) -> bool {
        self.by_consultant
            .get(&consultant_id)
            .is_some_and(|intervals| intervals.iter().any(|i| i.contains(date)))
    }

    /// Whether `consultant_id` has approved leave intersecting the
    /// inclusive range `[start, end]`.
    pub fn is_on_leave_in_range(&self, consultant_id: Uuid, start: NaiveDate, end: NaiveDate) -> bool {
        self.by_consultant
            .get(&consultant_id)
            .is_some_and(|intervals| {
                intervals
                    .iter()
                    .any(|i| i.start_date <= end && start <= i.end_date)
            })
    }
}
