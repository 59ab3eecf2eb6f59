use crate::domain::models::{Consultant, RawPayrollDateRecord};
use crate::domain::ports::errors::SourceError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Port for the authoritative payroll-date assignment data.
///
/// Implementations wrap whatever transport the host application uses;
/// the engine only depends on this contract.
#[async_trait]
pub trait AssignmentSource: Send + Sync {
    /// Fetch all payroll-date records whose adjusted EFT date falls in
    /// the inclusive range `[start, end]`.
    async fn fetch_assignments(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RawPayrollDateRecord>, SourceError>;

    /// Fetch the full consultant roster (identity and role only;
    /// workload totals are computed locally).
    async fn fetch_consultants(&self) -> Result<Vec<Consultant>, SourceError>;
}
