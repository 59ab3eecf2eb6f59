//! Payroll assignment domain model.
//!
//! An [`Assignment`] is one scheduled processing run of a payroll on one
//! adjusted EFT date. Assignments are derived from [`RawPayrollDateRecord`]s
//! at load time, re-derived on every preview change, and never persisted
//! directly; only payroll-level reassignments are written back.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lightweight identity reference to a consultant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultantRef {
    pub id: Uuid,
    pub name: String,
}

impl ConsultantRef {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// One payroll-date row as returned by the upstream assignment source.
///
/// Carries the parent payroll's identity and sizing data denormalized onto
/// each date record. `employee_count` and `processing_time` may be absent
/// on the source payroll; the transformer fills in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPayrollDateRecord {
    /// Stable identifier of this date record.
    pub id: Uuid,
    pub payroll_id: Uuid,
    pub payroll_name: String,
    pub client_name: String,
    /// EFT date before holiday/weekend adjustment.
    pub original_eft_date: NaiveDate,
    /// EFT date after adjustment; the date the occurrence is scheduled on.
    pub adjusted_eft_date: NaiveDate,
    /// Date the payroll must be processed by a consultant.
    pub processing_date: NaiveDate,
    pub employee_count: Option<u32>,
    /// Estimated processing effort in hours.
    pub processing_time: Option<f64>,
    pub primary_consultant: ConsultantRef,
    pub backup_consultant: Option<ConsultantRef>,
}

/// Origin data carried by a ghost assignment: the vacated cell it
/// memorializes and where the real occurrence went.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GhostOrigin {
    /// Consultant who held the occurrence before the move.
    pub from_consultant_id: Uuid,
    pub from_consultant_name: String,
    /// Date cell the occurrence was moved away from.
    pub from_date: NaiveDate,
    /// Name of the consultant the occurrence now sits with.
    pub to_consultant_name: String,
}

/// One scheduled occurrence of a payroll on one adjusted EFT date.
///
/// Exactly one non-ghost assignment exists per `(payroll_id,
/// adjusted_eft_date)` in any projection. Ghosts are synthetic preview
/// markers: they carry a freshly generated id on every derivation and are
/// excluded from workload aggregation and persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: Uuid,
    pub payroll_id: Uuid,
    pub payroll_name: String,
    pub client_name: String,
    pub original_eft_date: NaiveDate,
    pub adjusted_eft_date: NaiveDate,
    pub processing_date: NaiveDate,
    pub employee_count: u32,
    /// Processing effort in hours, always positive.
    pub processing_time: f64,
    /// Effective consultant after backup substitution and any preview move.
    pub consultant_id: Uuid,
    pub consultant_name: String,
    /// True when the backup consultant was substituted for a primary on
    /// approved leave.
    pub is_backup: bool,
    /// The primary this occurrence's backup stands in for. Display only;
    /// distinct from the edit-ledger notion of "original consultant".
    pub substituted_for: Option<ConsultantRef>,
    /// True for synthetic vacated-cell markers.
    pub is_ghost: bool,
    /// Present iff `is_ghost`.
    pub ghost: Option<GhostOrigin>,
    /// True when a preview move relocated this occurrence.
    pub is_moved: bool,
    /// Name of the consultant this occurrence was moved away from.
    pub moved_from_consultant: Option<String>,
}

impl Assignment {
    /// Whether this assignment represents real schedulable work.
    pub fn is_schedulable(&self) -> bool {
        !self.is_ghost
    }

    /// Grid cell this assignment occupies.
    pub fn cell(&self) -> (Uuid, NaiveDate) {
        (self.consultant_id, self.adjusted_eft_date)
    }

    /// Ledger key for this occurrence.
    pub fn occurrence_key(&self) -> (Uuid, NaiveDate) {
        (self.payroll_id, self.adjusted_eft_date)
    }
}
