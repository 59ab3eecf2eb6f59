//! Uncommitted reassignment ledger and the original-schedule snapshot
//! it is resolved against.
//!
//! The ledger is a value type: every mutation returns a new ledger and
//! leaves the input untouched, so the owning session can re-derive the
//! projection from any (snapshot, ledger) pair deterministically. A key's
//! absence means "use the original consultant"; writing an entry whose
//! target equals the original deletes the key instead of storing a no-op,
//! which keeps moved-detection exact and the pending-change list minimal.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Assignment, ConsultantRef};

/// Ledger key: one payroll occurrence.
pub type OccurrenceKey = (Uuid, NaiveDate);

/// One uncommitted consultant override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideEntry {
    pub consultant_id: Uuid,
    pub consultant_name: String,
    /// Monotonic write sequence; highest value is the most recent write.
    pub seq: u64,
}

/// Immutable index over the base (pre-edit) assignment set.
///
/// Built once per load, refresh, or commit rebase. Group moves and
/// original-consultant lookups resolve against this snapshot, never
/// against the currently displayed projection.
#[derive(Debug, Clone, Default)]
pub struct ScheduleSnapshot {
    assignments: Vec<Assignment>,
    by_key: HashMap<OccurrenceKey, usize>,
    by_id: HashMap<Uuid, usize>,
    dates_by_payroll: HashMap<Uuid, Vec<NaiveDate>>,
}

impl ScheduleSnapshot {
    /// Index a transformed assignment set.
    pub fn from_assignments(assignments: Vec<Assignment>) -> Self {
        let mut by_key = HashMap::new();
        let mut by_id = HashMap::new();
        let mut dates_by_payroll: HashMap<Uuid, Vec<NaiveDate>> = HashMap::new();

        for (idx, assignment) in assignments.iter().enumerate() {
            by_key.insert(assignment.occurrence_key(), idx);
            by_id.insert(assignment.id, idx);
            dates_by_payroll
                .entry(assignment.payroll_id)
                .or_default()
                .push(assignment.adjusted_eft_date);
        }
        for dates in dates_by_payroll.values_mut() {
            dates.sort_unstable();
        }

        Self {
            assignments,
            by_key,
            by_id,
            dates_by_payroll,
        }
    }

    /// All base assignments in load order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Look up a base assignment by its stable record id.
    pub fn by_id(&self, id: Uuid) -> Option<&Assignment> {
        self.by_id.get(&id).map(|&idx| &self.assignments[idx])
    }

    /// Look up the base assignment for one payroll occurrence.
    pub fn occurrence(&self, payroll_id: Uuid, date: NaiveDate) -> Option<&Assignment> {
        self.by_key
            .get(&(payroll_id, date))
            .map(|&idx| &self.assignments[idx])
    }

    /// The consultant who held an occurrence before any edits.
    pub fn original_consultant(&self, payroll_id: Uuid, date: NaiveDate) -> Option<ConsultantRef> {
        self.occurrence(payroll_id, date)
            .map(|a| ConsultantRef::new(a.consultant_id, a.consultant_name.clone()))
    }

    /// All scheduled dates of a payroll, ascending.
    pub fn dates_for_payroll(&self, payroll_id: Uuid) -> &[NaiveDate] {
        self.dates_by_payroll
            .get(&payroll_id)
            .map_or(&[], Vec::as_slice)
    }

    /// Any base assignment of a payroll (earliest date). With group-move
    /// semantics every date of a payroll starts with the same consultant,
    /// so any occurrence answers payroll-level questions.
    pub fn any_for_payroll(&self, payroll_id: Uuid) -> Option<&Assignment> {
        self.dates_for_payroll(payroll_id)
            .first()
            .and_then(|&date| self.occurrence(payroll_id, date))
    }
}

/// The set of uncommitted reassignment edits.
#[derive(Debug, Clone, Default)]
pub struct EditLedger {
    entries: BTreeMap<OccurrenceKey, OverrideEntry>,
    next_seq: u64,
}

impl EditLedger {
    /// An empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of active per-date overrides.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The override for one occurrence, if any.
    pub fn entry(&self, payroll_id: Uuid, date: NaiveDate) -> Option<&OverrideEntry> {
        self.entries.get(&(payroll_id, date))
    }

    /// Iterate all entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&OccurrenceKey, &OverrideEntry)> {
        self.entries.iter()
    }

    /// Distinct payrolls with at least one active override.
    pub fn payroll_ids(&self) -> Vec<Uuid> {
        let mut ids: Vec<Uuid> = self.entries.keys().map(|(payroll_id, _)| *payroll_id).collect();
        ids.dedup();
        ids
    }

    /// Apply a group move: point every scheduled date of `payroll_id` at
    /// `target`, resolving originals against `snapshot`.
    ///
    /// Dates whose original consultant equals `target` have their entries
    /// deleted rather than stored, so moving a payroll back to its
    /// original consultant exactly cancels a prior move. Re-applying the
    /// same move is a no-op. Returns the updated ledger; `self` is
    /// unchanged.
    pub fn move_payroll(
        &self,
        snapshot: &ScheduleSnapshot,
        payroll_id: Uuid,
        target: &ConsultantRef,
    ) -> DomainResult<Self> {
        let dates = snapshot.dates_for_payroll(payroll_id);
        if dates.is_empty() {
            return Err(DomainError::PayrollNotFound(payroll_id));
        }

        let mut next = self.clone();
        for &date in dates {
            let original = snapshot
                .original_consultant(payroll_id, date)
                .ok_or(DomainError::OccurrenceNotFound { payroll_id, date })?;
            let key = (payroll_id, date);

            if original.id == target.id {
                next.entries.remove(&key);
                continue;
            }

            // Rewriting the same target must not look like a newer edit.
            let already_current = next
                .entries
                .get(&key)
                .is_some_and(|entry| entry.consultant_id == target.id);
            if already_current {
                continue;
            }

            let seq = next.next_seq;
            next.next_seq += 1;
            next.entries.insert(
                key,
                OverrideEntry {
                    consultant_id: target.id,
                    consultant_name: target.name.clone(),
                    seq,
                },
            );
        }
        Ok(next)
    }

    /// Drop every override.
    pub fn cleared(&self) -> Self {
        Self {
            entries: BTreeMap::new(),
            next_seq: self.next_seq,
        }
    }
}
