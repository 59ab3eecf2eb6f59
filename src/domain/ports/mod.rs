//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines async trait interfaces that infrastructure adapters
//! must implement:
//! - AssignmentSource: payroll-date records and the consultant roster
//! - LeaveSource: consultant leave intervals
//! - HolidaySource: public holidays for grid decoration
//! - ReassignmentSink: the per-payroll reassignment write path
//!
//! These traits define the contracts that allow the engine to be
//! independent of the host application's transport.

pub mod assignment_source;
pub mod errors;
pub mod holiday_source;
pub mod leave_source;
pub mod reassignment_sink;

pub use assignment_source::AssignmentSource;
pub use errors::{PersistError, SourceError};
pub use holiday_source::HolidaySource;
pub use leave_source::LeaveSource;
pub use reassignment_sink::ReassignmentSink;
