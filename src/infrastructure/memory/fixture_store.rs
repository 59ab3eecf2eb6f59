//! In-memory implementation of the read-side ports.
//!
//! Serves fixed data for tests and local development. Fetches filter by
//! the requested date range the way a real upstream would, and any port
//! can be switched to fail for exercising degradation paths.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Mutex;

use crate::domain::models::{Consultant, Holiday, LeaveInterval, RawPayrollDateRecord};
use crate::domain::ports::{
    AssignmentSource, HolidaySource, LeaveSource, SourceError,
};

/// Static schedule data served through the source ports.
#[derive(Debug, Default)]
pub struct FixtureStore {
    records: Vec<RawPayrollDateRecord>,
    consultants: Vec<Consultant>,
    leave: Vec<LeaveInterval>,
    holidays: Vec<Holiday>,
    fail_assignments: Mutex<bool>,
    fail_leave: Mutex<bool>,
    fail_holidays: Mutex<bool>,
}

impl FixtureStore {
    pub fn new(
        records: Vec<RawPayrollDateRecord>,
        consultants: Vec<Consultant>,
        leave: Vec<LeaveInterval>,
        holidays: Vec<Holiday>,
    ) -> Self {
        Self {
            records,
            consultants,
            leave,
            holidays,
            fail_assignments: Mutex::new(false),
            fail_leave: Mutex::new(false),
            fail_holidays: Mutex::new(false),
        }
    }

    /// Make subsequent assignment fetches fail.
    pub fn set_fail_assignments(&self, fail: bool) {
        *self.fail_assignments.lock().unwrap() = fail;
    }

    /// Make subsequent leave fetches fail.
    pub fn set_fail_leave(&self, fail: bool) {
        *self.fail_leave.lock().unwrap() = fail;
    }

    /// Make subsequent holiday fetches fail.
    pub fn set_fail_holidays(&self, fail: bool) {
        *self.fail_holidays.lock().unwrap() = fail;
    }
}

#[async_trait]
impl AssignmentSource for FixtureStore {
    async fn fetch_assignments(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RawPayrollDateRecord>, SourceError> {
        if *self.fail_assignments.lock().unwrap() {
            return Err(SourceError::Unavailable("fixture outage".to_string()));
        }
        Ok(self
            .records
            .iter()
            .filter(|r| start <= r.adjusted_eft_date && r.adjusted_eft_date <= end)
            .cloned()
            .collect())
    }

    async fn fetch_consultants(&self) -> Result<Vec<Consultant>, SourceError> {
        if *self.fail_assignments.lock().unwrap() {
            return Err(SourceError::Unavailable("fixture outage".to_string()));
        }
        Ok(self.consultants.clone())
    }
}

#[async_trait]
impl LeaveSource for FixtureStore {
    async fn fetch_leave(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<LeaveInterval>, SourceError> {
        if *self.fail_leave.lock().unwrap() {
            return Err(SourceError::Unavailable("fixture outage".to_string()));
        }
        Ok(self
            .leave
            .iter()
            .filter(|l| l.start_date <= end && start <= l.end_date)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl HolidaySource for FixtureStore {
    async fn fetch_holidays(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        country_code: &str,
    ) -> Result<Vec<Holiday>, SourceError> {
        if *self.fail_holidays.lock().unwrap() {
            return Err(SourceError::Unavailable("fixture outage".to_string()));
        }
        Ok(self
            .holidays
            .iter()
            .filter(|h| {
                h.country_code == country_code && start <= h.date && h.date <= end
            })
            .cloned()
            .collect())
    }
}
