use crate::domain::models::Holiday;
use crate::domain::ports::errors::SourceError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Port for public-holiday lookups. Display-only data; a failed fetch
/// degrades to an empty calendar.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    /// Fetch holidays for `country_code` in the inclusive range
    /// `[start, end]`.
    async fn fetch_holidays(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        country_code: &str,
    ) -> Result<Vec<Holiday>, SourceError>;
}
