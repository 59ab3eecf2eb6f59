use crate::domain::models::LeaveInterval;
use crate::domain::ports::errors::SourceError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Port for consultant leave data.
#[async_trait]
pub trait LeaveSource: Send + Sync {
    /// Fetch leave intervals intersecting the inclusive range
    /// `[start, end]`. Implementations may return non-approved intervals;
    /// the engine filters to approved ones itself.
    async fn fetch_leave(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<LeaveInterval>, SourceError>;
}
