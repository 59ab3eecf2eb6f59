//! Domain errors for the scheduling engine.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use super::models::ScheduleMode;

/// Domain-level errors that can occur in the scheduling engine.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Assignment not found: {0}")]
    AssignmentNotFound(Uuid),

    #[error("Payroll not found: {0}")]
    PayrollNotFound(Uuid),

    #[error("Consultant not found: {0}")]
    ConsultantNotFound(Uuid),

    #[error("No occurrence of payroll {payroll_id} on {date}")]
    OccurrenceNotFound { payroll_id: Uuid, date: NaiveDate },

    #[error("Invalid mode transition from {from} to {to}: {reason}")]
    InvalidModeTransition {
        from: ScheduleMode,
        to: ScheduleMode,
        reason: String,
    },

    #[error("Uncommitted edits present; revert or commit before navigating")]
    UncommittedEdits,

    #[error("Invalid date window: {0}")]
    InvalidWindow(String),

    #[error("Data fetch failed: {0}")]
    FetchFailed(String),

    #[error("Commit failed for {failed} of {total} pending changes")]
    CommitFailed { failed: usize, total: usize },

    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

/// Convenience alias for domain results.
pub type DomainResult<T> = Result<T, DomainError>;

impl From<crate::domain::ports::SourceError> for DomainError {
    fn from(err: crate::domain::ports::SourceError) -> Self {
        DomainError::FetchFailed(err.to_string())
    }
}
