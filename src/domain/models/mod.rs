//! Domain models for the payroll scheduling engine.

pub mod assignment;
pub mod config;
pub mod consultant;
pub mod holiday;
pub mod mode;
pub mod pending_change;
pub mod window;

pub use assignment::{Assignment, ConsultantRef, GhostOrigin, RawPayrollDateRecord};
pub use config::{
    CommitRetryConfig, Config, LoggingConfig, RefreshConfig, WorkloadConfig,
};
pub use consultant::{Consultant, LeaveCalendar, LeaveInterval, LeaveStatus};
pub use holiday::{Holiday, HolidayCalendar};
pub use mode::ScheduleMode;
pub use pending_change::PendingChange;
pub use window::DateWindow;
