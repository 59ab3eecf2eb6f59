//! Pending-change compiler.
//!
//! Reduces the per-date edit ledger to one [`PendingChange`] per affected
//! payroll. The "from" consultant comes from the original snapshot (any
//! date suffices; group moves start from one consultant per payroll) and
//! the "to" consultant is the most recently written entry in the group,
//! which matters only if per-date entries ever disagree.

use std::collections::BTreeMap;
use uuid::Uuid;

use crate::domain::models::PendingChange;
use crate::services::edit_ledger::{EditLedger, OverrideEntry, ScheduleSnapshot};

/// Compile the ledger into the minimal set of payroll-level changes.
///
/// A payroll with no ledger entries produces no change; the output length
/// equals the number of payrolls with at least one outstanding move.
pub fn compile(ledger: &EditLedger, original: &ScheduleSnapshot) -> Vec<PendingChange> {
    let mut groups: BTreeMap<Uuid, Vec<(&chrono::NaiveDate, &OverrideEntry)>> = BTreeMap::new();
    for ((payroll_id, date), entry) in ledger.iter().map(|(k, e)| ((k.0, &k.1), e)) {
        groups.entry(payroll_id).or_default().push((date, entry));
    }

    groups
        .into_iter()
        .filter_map(|(payroll_id, entries)| {
            let base = original.any_for_payroll(payroll_id)?;
            let target = entries.iter().map(|(_, e)| *e).max_by_key(|e| e.seq)?;

            let mut affected_dates: Vec<_> = entries.iter().map(|(date, _)| **date).collect();
            affected_dates.sort_unstable();

            Some(PendingChange {
                payroll_id,
                payroll_name: base.payroll_name.clone(),
                from_consultant_id: base.consultant_id,
                from_consultant_name: base.consultant_name.clone(),
                to_consultant_id: target.consultant_id,
                to_consultant_name: target.consultant_name.clone(),
                affected_dates,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Assignment, ConsultantRef};
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn assignment(payroll_id: Uuid, day: u32, consultant: &ConsultantRef) -> Assignment {
        Assignment {
            id: Uuid::new_v4(),
            payroll_id,
            payroll_name: "Acme Weekly".to_string(),
            client_name: "Acme".to_string(),
            original_eft_date: date(day),
            adjusted_eft_date: date(day),
            processing_date: date(day),
            employee_count: 10,
            processing_time: 2.0,
            consultant_id: consultant.id,
            consultant_name: consultant.name.clone(),
            is_backup: false,
            substituted_for: None,
            is_ghost: false,
            ghost: None,
            is_moved: false,
            moved_from_consultant: None,
        }
    }

    #[test]
    fn test_empty_ledger_compiles_to_nothing() {
        let alice = ConsultantRef::new(Uuid::new_v4(), "Alice");
        let snapshot = ScheduleSnapshot::from_assignments(vec![assignment(
            Uuid::new_v4(),
            3,
            &alice,
        )]);

        assert!(compile(&EditLedger::new(), &snapshot).is_empty());
    }

    #[test]
    fn test_group_move_collapses_to_one_change() {
        let payroll_id = Uuid::new_v4();
        let alice = ConsultantRef::new(Uuid::new_v4(), "Alice");
        let bob = ConsultantRef::new(Uuid::new_v4(), "Bob");
        let snapshot = ScheduleSnapshot::from_assignments(vec![
            assignment(payroll_id, 3, &alice),
            assignment(payroll_id, 5, &alice),
        ]);
        let ledger = EditLedger::new()
            .move_payroll(&snapshot, payroll_id, &bob)
            .unwrap();

        let changes = compile(&ledger, &snapshot);

        assert_eq!(changes.len(), 1);
        let change = &changes[0];
        assert_eq!(change.payroll_id, payroll_id);
        assert_eq!(change.from_consultant_id, alice.id);
        assert_eq!(change.to_consultant_id, bob.id);
        assert_eq!(change.affected_dates, vec![date(3), date(5)]);
    }

    #[test]
    fn test_one_change_per_affected_payroll() {
        let alice = ConsultantRef::new(Uuid::new_v4(), "Alice");
        let bob = ConsultantRef::new(Uuid::new_v4(), "Bob");
        let payroll_a = Uuid::new_v4();
        let payroll_b = Uuid::new_v4();
        let payroll_untouched = Uuid::new_v4();
        let snapshot = ScheduleSnapshot::from_assignments(vec![
            assignment(payroll_a, 3, &alice),
            assignment(payroll_b, 4, &alice),
            assignment(payroll_untouched, 5, &alice),
        ]);
        let ledger = EditLedger::new()
            .move_payroll(&snapshot, payroll_a, &bob)
            .unwrap()
            .move_payroll(&snapshot, payroll_b, &bob)
            .unwrap();

        let changes = compile(&ledger, &snapshot);

        assert_eq!(changes.len(), 2);
        assert!(changes.iter().all(|c| c.payroll_id != payroll_untouched));
    }

    #[test]
    fn test_divergent_dates_report_most_recent_target() {
        // Two dates of one payroll pointed at different consultants at
        // the ledger level: the summary reports the later write.
        let payroll_id = Uuid::new_v4();
        let alice = ConsultantRef::new(Uuid::new_v4(), "Alice");
        let bob = ConsultantRef::new(Uuid::new_v4(), "Bob");
        let carol = ConsultantRef::new(Uuid::new_v4(), "Carol");

        // Build per-date divergence with single-date snapshots so the
        // group move touches one date at a time.
        let a3 = assignment(payroll_id, 3, &alice);
        let a5 = assignment(payroll_id, 5, &alice);
        let full = ScheduleSnapshot::from_assignments(vec![a3.clone(), a5.clone()]);
        let only_d3 = ScheduleSnapshot::from_assignments(vec![a3]);
        let only_d5 = ScheduleSnapshot::from_assignments(vec![a5]);

        let ledger = EditLedger::new()
            .move_payroll(&only_d3, payroll_id, &bob)
            .unwrap()
            .move_payroll(&only_d5, payroll_id, &carol)
            .unwrap();

        let changes = compile(&ledger, &full);

        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].to_consultant_id, carol.id);
        assert_eq!(changes[0].affected_dates, vec![date(3), date(5)]);
    }
}
