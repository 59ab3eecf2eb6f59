//! In-memory reassignment sink with scriptable failures.
//!
//! Records every persistence call and can be told to reject specific
//! payrolls, which is how the partial-commit contract gets exercised.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{PersistError, ReassignmentSink};

/// One recorded persistence call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedReassignment {
    pub payroll_id: Uuid,
    pub consultant_id: Uuid,
}

#[derive(Debug, Default)]
struct Inner {
    calls: Vec<RecordedReassignment>,
    fail_payrolls: HashSet<Uuid>,
    fail_transiently: bool,
}

/// Recording in-memory [`ReassignmentSink`].
#[derive(Debug, Default)]
pub struct RecordingSink {
    inner: Mutex<Inner>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject future calls for `payroll_id`.
    pub fn fail_payroll(&self, payroll_id: Uuid) {
        self.inner.lock().unwrap().fail_payrolls.insert(payroll_id);
    }

    /// Stop rejecting `payroll_id`.
    pub fn heal_payroll(&self, payroll_id: Uuid) {
        self.inner.lock().unwrap().fail_payrolls.remove(&payroll_id);
    }

    /// Choose whether scripted failures look transient (retryable) or
    /// permanent.
    pub fn set_fail_transiently(&self, transient: bool) {
        self.inner.lock().unwrap().fail_transiently = transient;
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<RecordedReassignment> {
        self.inner.lock().unwrap().calls.clone()
    }

    /// Number of calls made for one payroll.
    pub fn call_count_for(&self, payroll_id: Uuid) -> usize {
        self.inner
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|c| c.payroll_id == payroll_id)
            .count()
    }
}

#[async_trait]
impl ReassignmentSink for RecordingSink {
    async fn persist_reassignment(
        &self,
        payroll_id: Uuid,
        consultant_id: Uuid,
    ) -> Result<(), PersistError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(RecordedReassignment {
            payroll_id,
            consultant_id,
        });
        if inner.fail_payrolls.contains(&payroll_id) {
            if inner.fail_transiently {
                return Err(PersistError::Unavailable("scripted outage".to_string()));
            }
            return Err(PersistError::Rejected {
                payroll_id,
                reason: "scripted rejection".to_string(),
            });
        }
        Ok(())
    }
}
