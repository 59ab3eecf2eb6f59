//! Projection engine.
//!
//! Pure re-derivation of the visible assignment set from the base
//! snapshot plus the edit ledger. Recomputed in full on every change;
//! consumers index the output by (consultant, date), so ordering is
//! not significant.

use tracing::trace;
use uuid::Uuid;

use crate::domain::models::{Assignment, GhostOrigin};
use crate::services::edit_ledger::{EditLedger, ScheduleSnapshot};

/// Derive the visible assignments for the current preview state.
///
/// Moved occurrences are relocated to their override consultant with
/// `is_moved` set. When `show_ghosts` is true, each moved occurrence is
/// paired with exactly one ghost marker at the vacated cell; ghosts get
/// a freshly generated id on every derivation so they can never collide
/// with or mask a real assignment id. Toggling `show_ghosts` is purely a
/// display concern: the ledger is never touched here.
pub fn project(
    snapshot: &ScheduleSnapshot,
    ledger: &EditLedger,
    show_ghosts: bool,
) -> Vec<Assignment> {
    let mut visible = Vec::with_capacity(snapshot.assignments().len());
    let mut moved = 0usize;

    for base in snapshot.assignments() {
        let entry = ledger.entry(base.payroll_id, base.adjusted_eft_date);
        match entry {
            Some(entry) if entry.consultant_id != base.consultant_id => {
                moved += 1;
                let mut relocated = base.clone();
                relocated.consultant_id = entry.consultant_id;
                relocated.consultant_name = entry.consultant_name.clone();
                relocated.is_moved = true;
                relocated.moved_from_consultant = Some(base.consultant_name.clone());
                visible.push(relocated);

                if show_ghosts {
                    visible.push(make_ghost(base, &entry.consultant_name));
                }
            }
            _ => visible.push(base.clone()),
        }
    }

    trace!(total = visible.len(), moved, show_ghosts, "projection derived");
    visible
}

/// Synthesize the vacated-cell marker for a moved occurrence.
fn make_ghost(base: &Assignment, to_consultant_name: &str) -> Assignment {
    let mut ghost = base.clone();
    ghost.id = Uuid::new_v4();
    ghost.is_ghost = true;
    ghost.ghost = Some(GhostOrigin {
        from_consultant_id: base.consultant_id,
        from_consultant_name: base.consultant_name.clone(),
        from_date: base.adjusted_eft_date,
        to_consultant_name: to_consultant_name.to_string(),
    });
    ghost
}
