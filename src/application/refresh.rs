//! Background refresh daemon.
//!
//! Polls the authoritative sources at a fixed interval so external
//! schedule changes show up while the session sits idle. Ticks are
//! skipped whenever the session is not in view mode, so polling never
//! races an edit or an in-flight commit.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, RwLock};
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::application::session::ScheduleSession;
use crate::domain::models::{RefreshConfig, ScheduleMode};

/// Reason the daemon stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Requested via [`RefreshDaemonHandle::stop`].
    Requested,
    /// Too many consecutive refresh failures.
    TooManyFailures,
}

/// Point-in-time counters for the daemon.
#[derive(Debug, Clone, Default)]
pub struct RefreshStatus {
    pub total_runs: u64,
    pub successful_runs: u64,
    pub failed_runs: u64,
    pub skipped_runs: u64,
}

/// Handle for stopping a running daemon and inspecting its counters.
pub struct RefreshDaemonHandle {
    stop_tx: watch::Sender<bool>,
    status: Arc<RwLock<RefreshStatus>>,
}

impl RefreshDaemonHandle {
    /// Ask the daemon to stop after its current tick.
    pub fn stop(&self) {
        let _ = self.stop_tx.send(true);
    }

    /// Current run counters.
    pub async fn status(&self) -> RefreshStatus {
        self.status.read().await.clone()
    }
}

/// Periodic refetcher over a shared [`ScheduleSession`].
pub struct RefreshDaemon {
    session: Arc<RwLock<ScheduleSession>>,
    config: RefreshConfig,
}

impl RefreshDaemon {
    pub fn new(session: Arc<RwLock<ScheduleSession>>, config: RefreshConfig) -> Self {
        Self { session, config }
    }

    /// Spawn the polling loop onto the current runtime and return a
    /// handle plus the join task's stop reason on completion.
    pub fn spawn(self) -> (RefreshDaemonHandle, tokio::task::JoinHandle<StopReason>) {
        let (stop_tx, stop_rx) = watch::channel(false);
        let status = Arc::new(RwLock::new(RefreshStatus::default()));
        let handle = RefreshDaemonHandle {
            stop_tx,
            status: Arc::clone(&status),
        };
        let join = tokio::spawn(self.run(stop_rx, status));
        (handle, join)
    }

    async fn run(
        self,
        mut stop_rx: watch::Receiver<bool>,
        status: Arc<RwLock<RefreshStatus>>,
    ) -> StopReason {
        let period = Duration::from_secs(self.config.poll_interval_secs.max(1));
        let mut ticker = interval(period);
        let mut consecutive_failures: u32 = 0;

        info!(interval_secs = period.as_secs(), "refresh daemon started");
        if !self.config.run_on_startup {
            // Consume the immediate first tick.
            ticker.tick().await;
        }

        loop {
            tokio::select! {
                changed = stop_rx.changed() => {
                    // A dropped handle counts as a stop request.
                    if changed.is_err() || *stop_rx.borrow() {
                        info!("refresh daemon stopping on request");
                        return StopReason::Requested;
                    }
                }
                _ = ticker.tick() => {
                    let mut counters = status.write().await;
                    counters.total_runs += 1;
                    drop(counters);

                    match self.tick().await {
                        TickOutcome::Refreshed => {
                            consecutive_failures = 0;
                            status.write().await.successful_runs += 1;
                        }
                        TickOutcome::Skipped(mode) => {
                            debug!(mode = %mode, "refresh skipped; session not idle");
                            status.write().await.skipped_runs += 1;
                        }
                        TickOutcome::Failed(err) => {
                            consecutive_failures += 1;
                            status.write().await.failed_runs += 1;
                            warn!(
                                error = %err,
                                consecutive_failures,
                                "refresh failed"
                            );
                            if consecutive_failures >= self.config.max_consecutive_failures {
                                warn!("refresh daemon stopping after repeated failures");
                                return StopReason::TooManyFailures;
                            }
                        }
                    }
                }
            }
        }
    }

    async fn tick(&self) -> TickOutcome {
        // Cheap read first so an edit in progress never waits on a fetch.
        let mode = self.session.read().await.mode();
        if mode != ScheduleMode::View {
            return TickOutcome::Skipped(mode);
        }

        let mut session = self.session.write().await;
        if session.mode() != ScheduleMode::View {
            return TickOutcome::Skipped(session.mode());
        }
        match session.refresh().await {
            Ok(()) => TickOutcome::Refreshed,
            Err(err) => TickOutcome::Failed(err.to_string()),
        }
    }
}

enum TickOutcome {
    Refreshed,
    Skipped(ScheduleMode),
    Failed(String),
}
