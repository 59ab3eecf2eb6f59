//! Per-consultant workload aggregation.
//!
//! Recomputed from the visible assignment set on every projection
//! change, so the totals track preview edits live. Ghosts are excluded;
//! a moved occurrence counts only at its new consultant, which keeps the
//! window's total hours invariant under moves.

use serde::Serialize;
use std::collections::HashSet;
use uuid::Uuid;

use crate::domain::models::{Assignment, Consultant, DateWindow, LeaveCalendar};

/// Aggregated workload for one consultant over a date window.
#[derive(Debug, Clone, Serialize)]
pub struct ConsultantWorkload {
    pub consultant_id: Uuid,
    pub consultant_name: String,
    pub role: String,
    /// Distinct payrolls with at least one occurrence in the window.
    pub payroll_count: usize,
    /// Employees across all occurrences in the window.
    pub employee_count: u64,
    /// Processing hours summed per occurrence; each date is a distinct
    /// processing run.
    pub processing_hours: f64,
    /// Hours over window capacity. A heuristic, not a constraint; may
    /// exceed 1.0.
    pub utilization: f64,
    /// Whether any date in the window intersects approved leave.
    pub on_leave: bool,
}

impl ConsultantWorkload {
    /// Whether this consultant is over nominal capacity for the window.
    pub fn is_overallocated(&self) -> bool {
        self.utilization > 1.0
    }
}

/// Compute workload summaries for every consultant in the roster.
///
/// The output is sorted for display: consultants on leave last, the rest
/// by descending processing hours with name as tiebreak.
pub fn aggregate(
    visible: &[Assignment],
    consultants: &[Consultant],
    window: &DateWindow,
    leave: &LeaveCalendar,
    capacity_hours_per_week: f64,
) -> Vec<ConsultantWorkload> {
    let capacity = f64::from(window.week_count()) * capacity_hours_per_week;

    let mut workloads: Vec<ConsultantWorkload> = consultants
        .iter()
        .map(|consultant| {
            let mut payrolls: HashSet<Uuid> = HashSet::new();
            let mut employee_count: u64 = 0;
            let mut processing_hours = 0.0;

            for assignment in visible.iter().filter(|a| {
                a.is_schedulable()
                    && a.consultant_id == consultant.id
                    && window.contains(a.adjusted_eft_date)
            }) {
                payrolls.insert(assignment.payroll_id);
                employee_count += u64::from(assignment.employee_count);
                processing_hours += assignment.processing_time;
            }

            let utilization = if capacity > 0.0 {
                processing_hours / capacity
            } else {
                0.0
            };

            ConsultantWorkload {
                consultant_id: consultant.id,
                consultant_name: consultant.name.clone(),
                role: consultant.role.clone(),
                payroll_count: payrolls.len(),
                employee_count,
                processing_hours,
                utilization,
                on_leave: leave.is_on_leave_in_range(consultant.id, window.start, window.end),
            }
        })
        .collect();

    workloads.sort_by(|a, b| {
        a.on_leave
            .cmp(&b.on_leave)
            .then_with(|| {
                b.processing_hours
                    .partial_cmp(&a.processing_hours)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .then_with(|| a.consultant_name.cmp(&b.consultant_name))
    });
    workloads
}
