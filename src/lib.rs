//! Paymaster - Payroll Assignment Scheduling Engine
//!
//! Paymaster is the state engine behind a payroll scheduling board: it
//! lets a manager preview drag-reassignments of payrolls between
//! consultants across a visible date window, tracks the uncommitted
//! edits in a ledger, projects the edited schedule (including ghost
//! markers at vacated cells), aggregates per-consultant workload live,
//! and commits the minimal batch of payroll-level changes.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture
//! principles:
//!
//! - **Domain Layer** (`domain`): models, the mode state machine, and
//!   the port traits the host application implements
//! - **Service Layer** (`services`): pure scheduling logic — transform,
//!   ledger, projection, workload aggregation, pending-change compilation
//! - **Application Layer** (`application`): the stateful editing session
//!   and the idle refresh daemon
//! - **Infrastructure Layer** (`infrastructure`): config loading,
//!   logging setup, and in-memory adapters
//!
//! # Example
//!
//! ```ignore
//! use paymaster::application::ScheduleSession;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Wire real port adapters, load config, create a session,
//!     // then load() and drive it from the UI layer.
//!     Ok(())
//! }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use application::{CommitReport, RefreshDaemon, ScheduleSession};
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    Assignment, Config, Consultant, ConsultantRef, DateWindow, Holiday, LeaveInterval,
    LeaveStatus, PendingChange, RawPayrollDateRecord, ScheduleMode,
};
pub use domain::ports::{
    AssignmentSource, HolidaySource, LeaveSource, PersistError, ReassignmentSink, SourceError,
};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{ConsultantWorkload, EditLedger, ScheduleSnapshot};
