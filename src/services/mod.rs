//! Engine services: pure scheduling logic over the domain models.

pub mod edit_ledger;
pub mod pending_changes;
pub mod projection;
pub mod retry;
pub mod transformer;
pub mod workload;

pub use edit_ledger::{EditLedger, OccurrenceKey, OverrideEntry, ScheduleSnapshot};
pub use retry::RetryPolicy;
pub use workload::ConsultantWorkload;
