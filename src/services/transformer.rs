//! Assignment transformer.
//!
//! Converts raw payroll-date records into normalized [`Assignment`]s,
//! resolving the effective consultant for each occurrence: the primary,
//! or the designated backup when the primary has approved leave on the
//! adjusted EFT date. Deterministic; never mutates source data.

use tracing::debug;

use crate::domain::models::{Assignment, LeaveCalendar, RawPayrollDateRecord};

/// Missing employee counts default to zero.
const DEFAULT_EMPLOYEE_COUNT: u32 = 0;
/// Missing processing times default to one hour.
const DEFAULT_PROCESSING_TIME: f64 = 1.0;

/// Transform raw records into base assignments with backup substitution
/// applied.
pub fn transform(records: &[RawPayrollDateRecord], leave: &LeaveCalendar) -> Vec<Assignment> {
    records.iter().map(|record| transform_record(record, leave)).collect()
}

fn transform_record(record: &RawPayrollDateRecord, leave: &LeaveCalendar) -> Assignment {
    let mut consultant = record.primary_consultant.clone();
    let mut is_backup = false;
    let mut substituted_for = None;

    if leave.is_on_leave(record.primary_consultant.id, record.adjusted_eft_date) {
        if let Some(backup) = &record.backup_consultant {
            debug!(
                payroll = %record.payroll_name,
                date = %record.adjusted_eft_date,
                primary = %record.primary_consultant.name,
                backup = %backup.name,
                "substituting backup consultant for primary on leave"
            );
            consultant = backup.clone();
            is_backup = true;
            substituted_for = Some(record.primary_consultant.clone());
        }
    }

    Assignment {
        id: record.id,
        payroll_id: record.payroll_id,
        payroll_name: record.payroll_name.clone(),
        client_name: record.client_name.clone(),
        original_eft_date: record.original_eft_date,
        adjusted_eft_date: record.adjusted_eft_date,
        processing_date: record.processing_date,
        employee_count: record.employee_count.unwrap_or(DEFAULT_EMPLOYEE_COUNT),
        processing_time: record.processing_time.unwrap_or(DEFAULT_PROCESSING_TIME),
        consultant_id: consultant.id,
        consultant_name: consultant.name,
        is_backup,
        substituted_for,
        is_ghost: false,
        ghost: None,
        is_moved: false,
        moved_from_consultant: None,
    }
}
