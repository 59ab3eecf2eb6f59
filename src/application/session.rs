//! Schedule editing session.
//!
//! Owns the authoritative snapshot, the edit ledger, and the mode state
//! machine; orchestrates load/refresh, preview moves, and the commit /
//! revert flow. Edits live only in this in-memory session until
//! committed; nothing intermediate is ever persisted.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{
    Assignment, Config, Consultant, ConsultantRef, DateWindow, Holiday, HolidayCalendar,
    LeaveCalendar, PendingChange, ScheduleMode,
};
use crate::domain::ports::{
    AssignmentSource, HolidaySource, LeaveSource, ReassignmentSink,
};
use crate::services::edit_ledger::{EditLedger, ScheduleSnapshot};
use crate::services::retry::RetryPolicy;
use crate::services::workload::ConsultantWorkload;
use crate::services::{pending_changes, projection, transformer, workload};

/// One failed persistence call within a commit attempt.
#[derive(Debug, Clone)]
pub struct CommitFailure {
    pub payroll_id: Uuid,
    pub payroll_name: String,
    pub error: String,
}

/// Outcome of a commit attempt.
///
/// On any failure the ledger is left fully intact — including entries
/// whose persistence call succeeded — so a retry re-issues every pending
/// change. The sink contract makes the re-issues harmless.
#[derive(Debug, Clone, Default)]
pub struct CommitReport {
    /// Payrolls whose persistence call succeeded.
    pub succeeded: Vec<Uuid>,
    /// Payrolls whose persistence call failed, with the error text.
    pub failed: Vec<CommitFailure>,
}

impl CommitReport {
    /// Whether every pending change persisted.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Total persistence calls attempted.
    pub fn attempted(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}

/// A manager's editing session over one visible date window.
pub struct ScheduleSession {
    assignment_source: Arc<dyn AssignmentSource>,
    leave_source: Arc<dyn LeaveSource>,
    holiday_source: Arc<dyn HolidaySource>,
    sink: Arc<dyn ReassignmentSink>,

    config: Config,
    retry: RetryPolicy,

    window: DateWindow,
    mode: ScheduleMode,
    show_ghosts: bool,

    snapshot: ScheduleSnapshot,
    consultants: Vec<Consultant>,
    leave: LeaveCalendar,
    holidays: HolidayCalendar,
    ledger: EditLedger,
    last_commit_report: Option<CommitReport>,
}

impl ScheduleSession {
    /// Create an unloaded session; call [`load`](Self::load) before use.
    pub fn new(
        assignment_source: Arc<dyn AssignmentSource>,
        leave_source: Arc<dyn LeaveSource>,
        holiday_source: Arc<dyn HolidaySource>,
        sink: Arc<dyn ReassignmentSink>,
        config: Config,
        window: DateWindow,
    ) -> Self {
        let retry = RetryPolicy::from_config(&config.commit_retry);
        let show_ghosts = config.show_ghosts;
        Self {
            assignment_source,
            leave_source,
            holiday_source,
            sink,
            config,
            retry,
            window,
            mode: ScheduleMode::View,
            show_ghosts,
            snapshot: ScheduleSnapshot::default(),
            consultants: Vec::new(),
            leave: LeaveCalendar::empty(),
            holidays: HolidayCalendar::empty(),
            ledger: EditLedger::new(),
            last_commit_report: None,
        }
    }

    // -------------------------------------------------------------------------
    // Data loading
    // -------------------------------------------------------------------------

    /// Fetch authoritative data for the current window and rebuild the
    /// base snapshot.
    ///
    /// Assignment and consultant fetches are required; leave and holiday
    /// fetches degrade to empty calendars with a warning, so missing
    /// lookup data renders the schedule without substitution or
    /// decoration rather than blocking it.
    pub async fn load(&mut self) -> DomainResult<()> {
        let records = self
            .assignment_source
            .fetch_assignments(self.window.start, self.window.end)
            .await?;
        self.consultants = self.assignment_source.fetch_consultants().await?;

        self.leave = match self
            .leave_source
            .fetch_leave(self.window.start, self.window.end)
            .await
        {
            Ok(intervals) => LeaveCalendar::from_intervals(intervals),
            Err(err) => {
                warn!(error = %err, "leave fetch failed, treating everyone as available");
                LeaveCalendar::empty()
            }
        };

        self.holidays = match self
            .holiday_source
            .fetch_holidays(self.window.start, self.window.end, &self.config.country_code)
            .await
        {
            Ok(holidays) => HolidayCalendar::from_holidays(holidays),
            Err(err) => {
                warn!(error = %err, "holiday fetch failed, rendering without holidays");
                HolidayCalendar::empty()
            }
        };

        let assignments = transformer::transform(&records, &self.leave);
        info!(
            records = assignments.len(),
            consultants = self.consultants.len(),
            window_start = %self.window.start,
            window_end = %self.window.end,
            "schedule loaded"
        );
        self.snapshot = ScheduleSnapshot::from_assignments(assignments);
        Ok(())
    }

    /// Refetch authoritative data while idle. Refused outside `View` so
    /// polling can never clobber an edit in progress.
    pub async fn refresh(&mut self) -> DomainResult<()> {
        if self.mode != ScheduleMode::View {
            return Err(DomainError::InvalidModeTransition {
                from: self.mode,
                to: ScheduleMode::View,
                reason: "refresh only runs while idle in view mode".to_string(),
            });
        }
        self.load().await
    }

    /// Move the visible window. Uncommitted edits block navigation; the
    /// caller must commit or revert first.
    pub async fn set_window(&mut self, window: DateWindow) -> DomainResult<()> {
        match self.mode {
            ScheduleMode::Committing => {
                return Err(DomainError::InvalidModeTransition {
                    from: self.mode,
                    to: ScheduleMode::View,
                    reason: "commit in flight".to_string(),
                })
            }
            _ if !self.ledger.is_empty() => return Err(DomainError::UncommittedEdits),
            _ => {}
        }
        self.window = window;
        self.load().await
    }

    // -------------------------------------------------------------------------
    // Mode control
    // -------------------------------------------------------------------------

    /// Enter preview (edit) mode with an empty ledger.
    pub fn begin_edit(&mut self) -> DomainResult<()> {
        self.transition(ScheduleMode::Preview, "begin edit")?;
        self.ledger = EditLedger::new();
        self.last_commit_report = None;
        Ok(())
    }

    /// Discard every uncommitted edit and return to view mode.
    pub fn revert(&mut self) -> DomainResult<()> {
        self.transition(ScheduleMode::View, "revert edits")?;
        let dropped = self.ledger.len();
        self.ledger = self.ledger.cleared();
        info!(dropped, "edits reverted");
        Ok(())
    }

    fn transition(&mut self, to: ScheduleMode, action: &str) -> DomainResult<()> {
        if !self.mode.can_transition_to(to) {
            return Err(DomainError::InvalidModeTransition {
                from: self.mode,
                to,
                reason: action.to_string(),
            });
        }
        self.mode = to;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Editing
    // -------------------------------------------------------------------------

    /// Apply a drag/drop move command: reassign the dragged occurrence's
    /// whole payroll to the target consultant (group-move semantics).
    ///
    /// Moving onto the occurrence's current consultant is a no-op, and
    /// moving back to the original consultant cancels the prior move.
    /// Ghost markers are not draggable; their ids are never resolvable
    /// here.
    pub fn request_move(
        &mut self,
        assignment_id: Uuid,
        target_consultant_id: Uuid,
    ) -> DomainResult<()> {
        if !self.mode.is_editable() {
            return Err(DomainError::InvalidModeTransition {
                from: self.mode,
                to: ScheduleMode::Preview,
                reason: "moves are only accepted in preview mode".to_string(),
            });
        }

        let assignment = self
            .snapshot
            .by_id(assignment_id)
            .ok_or(DomainError::AssignmentNotFound(assignment_id))?;
        let target = self
            .consultants
            .iter()
            .find(|c| c.id == target_consultant_id)
            .map(|c| ConsultantRef::new(c.id, c.name.clone()))
            .ok_or(DomainError::ConsultantNotFound(target_consultant_id))?;

        let payroll_id = assignment.payroll_id;
        self.ledger = self.ledger.move_payroll(&self.snapshot, payroll_id, &target)?;
        info!(
            payroll = %payroll_id,
            target = %target.name,
            ledger_entries = self.ledger.len(),
            "group move applied"
        );
        Ok(())
    }

    /// Toggle ghost markers. Display only; never touches the ledger.
    pub fn set_show_ghosts(&mut self, show_ghosts: bool) {
        self.show_ghosts = show_ghosts;
    }

    // -------------------------------------------------------------------------
    // Derived views
    // -------------------------------------------------------------------------

    /// The visible assignment set for the current preview state.
    pub fn projection(&self) -> Vec<Assignment> {
        projection::project(&self.snapshot, &self.ledger, self.show_ghosts)
    }

    /// Live per-consultant workload summaries for the current window.
    pub fn workloads(&self) -> Vec<ConsultantWorkload> {
        workload::aggregate(
            &self.projection(),
            &self.consultants,
            &self.window,
            &self.leave,
            self.config.workload.capacity_hours_per_week,
        )
    }

    /// The minimal batch of payroll-level changes awaiting commit.
    pub fn pending_changes(&self) -> Vec<PendingChange> {
        pending_changes::compile(&self.ledger, &self.snapshot)
    }

    /// Holiday decoration for a grid date, if any.
    pub fn holiday_on(&self, date: NaiveDate) -> Option<&Holiday> {
        self.holidays.holiday_on(date)
    }

    // -------------------------------------------------------------------------
    // Commit
    // -------------------------------------------------------------------------

    /// Persist every pending change, one call per payroll.
    ///
    /// All-or-nothing from the ledger's perspective: if any call fails
    /// the ledger keeps every entry (succeeded calls included) and the
    /// session lands in [`ScheduleMode::CommitFailed`]; a retry re-issues
    /// the full set. On success the ledger clears, the committed
    /// projection becomes the new original snapshot, and a refetch of
    /// authoritative data is attempted.
    pub async fn commit(&mut self) -> DomainResult<CommitReport> {
        if !self.mode.can_commit() {
            return Err(DomainError::InvalidModeTransition {
                from: self.mode,
                to: ScheduleMode::Committing,
                reason: "nothing to commit in this mode".to_string(),
            });
        }
        let changes = self.pending_changes();
        self.transition(ScheduleMode::Committing, "commit")?;

        let mut report = CommitReport::default();
        for change in &changes {
            info!(change = %change.describe(), "persisting reassignment");
            let outcome = self
                .retry
                .execute(|| {
                    self.sink
                        .persist_reassignment(change.payroll_id, change.to_consultant_id)
                })
                .await;
            match outcome {
                Ok(()) => report.succeeded.push(change.payroll_id),
                Err(err) => {
                    warn!(
                        payroll = %change.payroll_name,
                        error = %err,
                        "reassignment persistence failed"
                    );
                    report.failed.push(CommitFailure {
                        payroll_id: change.payroll_id,
                        payroll_name: change.payroll_name.clone(),
                        error: err.to_string(),
                    });
                }
            }
        }

        if report.is_success() {
            self.rebase_after_commit();
            self.transition(ScheduleMode::View, "commit succeeded")?;
            info!(committed = report.succeeded.len(), "commit complete");
            if let Err(err) = self.load().await {
                // The commit itself stands; the rebased snapshot serves
                // until the next successful refresh.
                warn!(error = %err, "post-commit refetch failed");
            }
        } else {
            self.transition(ScheduleMode::CommitFailed, "commit failed")?;
            warn!(
                failed = report.failed.len(),
                total = report.attempted(),
                "commit failed; ledger retained for retry"
            );
        }

        self.last_commit_report = Some(report.clone());
        Ok(report)
    }

    /// Fold the committed edits into a fresh original snapshot.
    fn rebase_after_commit(&mut self) {
        let mut committed = projection::project(&self.snapshot, &self.ledger, false);
        for assignment in &mut committed {
            assignment.is_moved = false;
            assignment.moved_from_consultant = None;
        }
        self.snapshot = ScheduleSnapshot::from_assignments(committed);
        self.ledger = self.ledger.cleared();
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn mode(&self) -> ScheduleMode {
        self.mode
    }

    pub fn window(&self) -> DateWindow {
        self.window
    }

    pub fn show_ghosts(&self) -> bool {
        self.show_ghosts
    }

    pub fn consultants(&self) -> &[Consultant] {
        &self.consultants
    }

    /// Whether any uncommitted edits exist.
    pub fn has_pending_edits(&self) -> bool {
        !self.ledger.is_empty()
    }

    /// The most recent commit attempt's outcome.
    pub fn last_commit_report(&self) -> Option<&CommitReport> {
        self.last_commit_report.as_ref()
    }
}
