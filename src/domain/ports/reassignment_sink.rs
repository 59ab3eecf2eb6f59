use crate::domain::ports::errors::PersistError;
use async_trait::async_trait;
use uuid::Uuid;

/// Port for persisting payroll reassignments, one call per payroll.
///
/// Implementations must be idempotent: setting the same consultant twice
/// is harmless, because a retried commit re-issues every pending change
/// including ones that already succeeded. The upstream is also expected
/// to clear any backup-consultant override on the payroll record, since
/// backup substitution is re-derived from leave state, not persisted.
#[async_trait]
pub trait ReassignmentSink: Send + Sync {
    /// Set `payroll_id`'s assigned consultant to `consultant_id`.
    async fn persist_reassignment(
        &self,
        payroll_id: Uuid,
        consultant_id: Uuid,
    ) -> Result<(), PersistError>;
}
