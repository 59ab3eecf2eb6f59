//! Errors surfaced by port implementations.

use thiserror::Error;
use uuid::Uuid;

/// Errors from the read-side data sources.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Upstream query failed: {0}")]
    QueryFailed(String),

    #[error("Upstream returned malformed data: {0}")]
    MalformedData(String),

    #[error("Not authorized to read schedule data")]
    Unauthorized,

    #[error("Upstream unavailable: {0}")]
    Unavailable(String),
}

/// Errors from the reassignment write path.
///
/// Variants are split by whether a retry can plausibly succeed; the
/// commit retry policy only re-attempts transient failures.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Upstream rejected reassignment of payroll {payroll_id}: {reason}")]
    Rejected { payroll_id: Uuid, reason: String },

    #[error("Payroll {0} no longer exists upstream")]
    UnknownPayroll(Uuid),

    #[error("Not authorized to reassign payrolls")]
    Unauthorized,

    #[error("Upstream unavailable: {0}")]
    Unavailable(String),

    #[error("Request timed out: {0}")]
    Timeout(String),
}

impl PersistError {
    /// Whether a retry of the same call can plausibly succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::Timeout(_))
    }
}
