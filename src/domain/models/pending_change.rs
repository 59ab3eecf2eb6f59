//! Pending reassignment, the unit of commit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A payroll-level summary of one or more uncommitted ledger entries.
///
/// Multiple moved dates of the same payroll collapse into one pending
/// change; `affected_dates` lists them in ascending order. Commit issues
/// exactly one persistence call per pending change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingChange {
    pub payroll_id: Uuid,
    pub payroll_name: String,
    pub from_consultant_id: Uuid,
    pub from_consultant_name: String,
    pub to_consultant_id: Uuid,
    pub to_consultant_name: String,
    /// Dates of this payroll with an active override, ascending.
    pub affected_dates: Vec<NaiveDate>,
}

impl PendingChange {
    /// Human-readable one-line summary, used in logs.
    pub fn describe(&self) -> String {
        format!(
            "{}: {} -> {} ({} date{})",
            self.payroll_name,
            self.from_consultant_name,
            self.to_consultant_name,
            self.affected_dates.len(),
            if self.affected_dates.len() == 1 { "" } else { "s" },
        )
    }
}
