//! Retry policy with exponential backoff for persistence calls.
//!
//! Backoff doubles per attempt up to the configured maximum. Only
//! transient errors are retried; rejections and authorization failures
//! fail fast.

use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::domain::models::CommitRetryConfig;
use crate::domain::ports::PersistError;

/// Retry policy configuration for handling transient persistence errors.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of retries before giving up.
    max_retries: u32,
    /// Initial backoff duration in milliseconds.
    initial_backoff_ms: u64,
    /// Maximum backoff duration in milliseconds.
    max_backoff_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff_ms: 500,
            max_backoff_ms: 10_000,
        }
    }
}

impl RetryPolicy {
    /// Create a new retry policy with custom settings.
    pub fn new(max_retries: u32, initial_backoff_ms: u64, max_backoff_ms: u64) -> Self {
        Self {
            max_retries,
            initial_backoff_ms,
            max_backoff_ms,
        }
    }

    /// Construct from loaded configuration.
    pub fn from_config(config: &CommitRetryConfig) -> Self {
        Self::new(
            config.max_retries,
            config.initial_backoff_ms,
            config.max_backoff_ms,
        )
    }

    /// Execute `operation`, retrying transient failures with exponential
    /// backoff.
    ///
    /// Returns the first success, the first permanent error, or the last
    /// transient error once retries are exhausted.
    pub async fn execute<F, Fut, T>(&self, mut operation: F) -> Result<T, PersistError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, PersistError>>,
    {
        let mut backoff_ms = self.initial_backoff_ms;
        let mut attempt = 0;

        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(err) if !err.is_transient() => {
                    debug!(error = %err, "permanent persistence error, not retrying");
                    return Err(err);
                }
                Err(err) if attempt >= self.max_retries => {
                    warn!(
                        error = %err,
                        attempts = attempt + 1,
                        "persistence retries exhausted"
                    );
                    return Err(err);
                }
                Err(err) => {
                    attempt += 1;
                    warn!(
                        error = %err,
                        attempt,
                        backoff_ms,
                        "transient persistence error, backing off"
                    );
                    sleep(Duration::from_millis(backoff_ms)).await;
                    backoff_ms = (backoff_ms * 2).min(self.max_backoff_ms);
                }
            }
        }
    }
}
