//! Partial-commit contract: a failed persistence call must never
//! partially clear the ledger, and a retry re-issues every pending
//! change.

mod common;

use std::sync::Arc;

use chrono::NaiveDate;
use common::{date, loaded_session, payroll_record, test_config, march_week};
use paymaster::domain::models::{Consultant, ConsultantRef};
use paymaster::infrastructure::memory::{FixtureStore, RecordingSink};
use paymaster::{ScheduleMode, ScheduleSession};
use uuid::Uuid;

/// Three single-occurrence payrolls, all Alice's, plus Bob as a target.
struct ThreePayrolls {
    alice: ConsultantRef,
    bob: ConsultantRef,
    payroll_ids: [Uuid; 3],
    record_ids: [Uuid; 3],
    store: Arc<FixtureStore>,
}

impl ThreePayrolls {
    fn new() -> Self {
        let alice = ConsultantRef::new(Uuid::new_v4(), "Alice");
        let bob = ConsultantRef::new(Uuid::new_v4(), "Bob");
        let payroll_ids = [Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
        let record_ids = [Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
        let names = ["Initech Weekly", "Umbrella Weekly", "Stark Weekly"];
        let days: [NaiveDate; 3] = [date(2025, 3, 3), date(2025, 3, 4), date(2025, 3, 5)];

        let records = (0..3)
            .map(|i| {
                payroll_record(
                    record_ids[i],
                    payroll_ids[i],
                    names[i],
                    names[i].split(' ').next().unwrap(),
                    days[i],
                    &alice,
                    None,
                )
            })
            .collect();

        let consultants = vec![
            Consultant::new(alice.id, "Alice", "Consultant"),
            Consultant::new(bob.id, "Bob", "Consultant"),
        ];
        let store = Arc::new(FixtureStore::new(records, consultants, Vec::new(), Vec::new()));

        Self {
            alice,
            bob,
            payroll_ids,
            record_ids,
            store,
        }
    }

    async fn session_with_all_moved(&self, sink: Arc<RecordingSink>) -> ScheduleSession {
        let mut session = loaded_session(self.store.clone(), sink).await;
        session.begin_edit().unwrap();
        for record_id in self.record_ids {
            session.request_move(record_id, self.bob.id).unwrap();
        }
        assert_eq!(session.pending_changes().len(), 3);
        session
    }
}

#[tokio::test]
async fn test_partial_failure_keeps_full_ledger() {
    let fixture = ThreePayrolls::new();
    let sink = Arc::new(RecordingSink::new());
    sink.fail_payroll(fixture.payroll_ids[2]);
    let mut session = fixture.session_with_all_moved(sink.clone()).await;

    let report = session.commit().await.unwrap();

    assert!(!report.is_success());
    assert_eq!(report.succeeded.len(), 2);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].payroll_id, fixture.payroll_ids[2]);
    assert_eq!(session.mode(), ScheduleMode::CommitFailed);

    // All three payrolls stay pending, not just the failed one.
    let still_pending = session.pending_changes();
    assert_eq!(still_pending.len(), 3);
}

#[tokio::test]
async fn test_retry_reissues_every_pending_change() {
    let fixture = ThreePayrolls::new();
    let sink = Arc::new(RecordingSink::new());
    sink.fail_payroll(fixture.payroll_ids[2]);
    let mut session = fixture.session_with_all_moved(sink.clone()).await;

    let first = session.commit().await.unwrap();
    assert!(!first.is_success());

    sink.heal_payroll(fixture.payroll_ids[2]);
    let second = session.commit().await.unwrap();

    assert!(second.is_success());
    assert_eq!(second.succeeded.len(), 3);
    assert_eq!(session.mode(), ScheduleMode::View);
    assert!(!session.has_pending_edits());

    // Both commits attempted all three payrolls; the succeeded-then-
    // reissued calls rely on sink idempotence.
    for payroll_id in fixture.payroll_ids {
        assert_eq!(sink.call_count_for(payroll_id), 2);
    }
}

#[tokio::test]
async fn test_transient_failures_are_retried_within_commit() {
    let fixture = ThreePayrolls::new();
    let sink = Arc::new(RecordingSink::new());
    sink.set_fail_transiently(true);
    sink.fail_payroll(fixture.payroll_ids[0]);
    let mut session = fixture.session_with_all_moved(sink.clone()).await;

    let report = session.commit().await.unwrap();

    assert!(!report.is_success());
    // Initial attempt plus two configured retries.
    assert_eq!(sink.call_count_for(fixture.payroll_ids[0]), 3);
    // Permanent-path payrolls are attempted exactly once.
    assert_eq!(sink.call_count_for(fixture.payroll_ids[1]), 1);
}

#[tokio::test]
async fn test_revert_from_failed_commit_discards_edits() {
    let fixture = ThreePayrolls::new();
    let sink = Arc::new(RecordingSink::new());
    sink.fail_payroll(fixture.payroll_ids[1]);
    let mut session = fixture.session_with_all_moved(sink.clone()).await;

    let report = session.commit().await.unwrap();
    assert!(!report.is_success());

    session.revert().unwrap();

    assert_eq!(session.mode(), ScheduleMode::View);
    assert!(session.pending_changes().is_empty());
    assert!(session
        .projection()
        .iter()
        .all(|a| a.consultant_id == fixture.alice.id));
}

#[tokio::test]
async fn test_commit_with_empty_ledger_is_a_clean_noop() {
    let fixture = ThreePayrolls::new();
    let sink = Arc::new(RecordingSink::new());
    let mut session = loaded_session(fixture.store.clone(), sink.clone()).await;
    session.begin_edit().unwrap();

    let report = session.commit().await.unwrap();

    assert!(report.is_success());
    assert_eq!(report.attempted(), 0);
    assert_eq!(session.mode(), ScheduleMode::View);
    assert!(sink.calls().is_empty());
}

#[tokio::test]
async fn test_assignment_fetch_failure_surfaces_error() {
    let fixture = ThreePayrolls::new();
    fixture.store.set_fail_assignments(true);
    let mut session = ScheduleSession::new(
        fixture.store.clone(),
        fixture.store.clone(),
        fixture.store.clone(),
        Arc::new(RecordingSink::new()),
        test_config(),
        march_week(),
    );

    assert!(session.load().await.is_err());
}
