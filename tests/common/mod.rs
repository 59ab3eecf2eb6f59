//! Common test utilities for integration tests
//!
//! Provides shared fixtures and builders used across multiple
//! integration test files.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use paymaster::domain::models::{
    CommitRetryConfig, Config, Consultant, ConsultantRef, DateWindow, LeaveInterval, LeaveStatus,
    RawPayrollDateRecord,
};
use paymaster::infrastructure::memory::{FixtureStore, RecordingSink};
use paymaster::ScheduleSession;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// The window every fixture lives in: Mon 2025-03-03 .. Sun 2025-03-09.
pub fn march_week() -> DateWindow {
    DateWindow::new(date(2025, 3, 3), date(2025, 3, 9)).unwrap()
}

/// Engine config tuned for tests: near-zero retry backoff.
pub fn test_config() -> Config {
    Config {
        commit_retry: CommitRetryConfig {
            max_retries: 2,
            initial_backoff_ms: 1,
            max_backoff_ms: 4,
        },
        ..Config::default()
    }
}

/// A deterministic schedule: two payrolls, three consultants.
///
/// - "Acme Weekly" (Alice primary, Carol backup): Mon 3rd and Wed 5th
/// - "Globex Monthly" (Bob primary, no backup): Thu 6th
pub struct ScheduleFixture {
    pub alice: ConsultantRef,
    pub bob: ConsultantRef,
    pub carol: ConsultantRef,
    pub acme_id: Uuid,
    pub acme_monday_record: Uuid,
    pub globex_id: Uuid,
    pub records: Vec<RawPayrollDateRecord>,
    pub consultants: Vec<Consultant>,
}

impl ScheduleFixture {
    pub fn new() -> Self {
        let alice = ConsultantRef::new(Uuid::new_v4(), "Alice");
        let bob = ConsultantRef::new(Uuid::new_v4(), "Bob");
        let carol = ConsultantRef::new(Uuid::new_v4(), "Carol");
        let acme_id = Uuid::new_v4();
        let globex_id = Uuid::new_v4();
        let acme_monday_record = Uuid::new_v4();

        let records = vec![
            payroll_record(
                acme_monday_record,
                acme_id,
                "Acme Weekly",
                "Acme",
                date(2025, 3, 3),
                &alice,
                Some(&carol),
            ),
            payroll_record(
                Uuid::new_v4(),
                acme_id,
                "Acme Weekly",
                "Acme",
                date(2025, 3, 5),
                &alice,
                Some(&carol),
            ),
            payroll_record(
                Uuid::new_v4(),
                globex_id,
                "Globex Monthly",
                "Globex",
                date(2025, 3, 6),
                &bob,
                None,
            ),
        ];

        let consultants = vec![
            Consultant::new(alice.id, "Alice", "Consultant"),
            Consultant::new(bob.id, "Bob", "Consultant"),
            Consultant::new(carol.id, "Carol", "Senior Consultant"),
        ];

        Self {
            alice,
            bob,
            carol,
            acme_id,
            acme_monday_record,
            globex_id,
            records,
            consultants,
        }
    }

    /// Approved leave for Alice covering the whole fixture window.
    pub fn alice_on_leave(&self) -> Vec<LeaveInterval> {
        vec![LeaveInterval {
            consultant_id: self.alice.id,
            start_date: date(2025, 3, 3),
            end_date: date(2025, 3, 9),
            status: LeaveStatus::Approved,
        }]
    }

    /// Store serving this fixture's data with no leave or holidays.
    pub fn store(&self) -> Arc<FixtureStore> {
        self.store_with_leave(Vec::new())
    }

    pub fn store_with_leave(&self, leave: Vec<LeaveInterval>) -> Arc<FixtureStore> {
        Arc::new(FixtureStore::new(
            self.records.clone(),
            self.consultants.clone(),
            leave,
            Vec::new(),
        ))
    }
}

pub fn payroll_record(
    id: Uuid,
    payroll_id: Uuid,
    payroll_name: &str,
    client_name: &str,
    eft_date: NaiveDate,
    primary: &ConsultantRef,
    backup: Option<&ConsultantRef>,
) -> RawPayrollDateRecord {
    RawPayrollDateRecord {
        id,
        payroll_id,
        payroll_name: payroll_name.to_string(),
        client_name: client_name.to_string(),
        original_eft_date: eft_date,
        adjusted_eft_date: eft_date,
        processing_date: eft_date,
        employee_count: Some(10),
        processing_time: Some(2.0),
        primary_consultant: primary.clone(),
        backup_consultant: backup.cloned(),
    }
}

/// Build a loaded session over the given adapters.
pub async fn loaded_session(
    store: Arc<FixtureStore>,
    sink: Arc<RecordingSink>,
) -> ScheduleSession {
    let mut session = ScheduleSession::new(
        store.clone(),
        store.clone(),
        store,
        sink,
        test_config(),
        march_week(),
    );
    session.load().await.expect("fixture load should succeed");
    session
}
