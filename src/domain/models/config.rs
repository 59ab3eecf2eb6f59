//! Engine configuration model.
//!
//! Loaded hierarchically by
//! [`ConfigLoader`](crate::infrastructure::config::ConfigLoader):
//! defaults, then `.paymaster/config.yaml`, then `.paymaster/local.yaml`,
//! then `PAYMASTER_*` environment variables.

use serde::{Deserialize, Serialize};

/// Main configuration structure for the scheduling engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// ISO country code used for holiday lookups.
    #[serde(default = "default_country_code")]
    pub country_code: String,

    /// Whether ghost markers are shown when a session starts.
    #[serde(default = "default_show_ghosts")]
    pub show_ghosts: bool,

    /// Workload/capacity configuration.
    #[serde(default)]
    pub workload: WorkloadConfig,

    /// Idle refresh polling configuration.
    #[serde(default)]
    pub refresh: RefreshConfig,

    /// Commit retry policy configuration.
    #[serde(default)]
    pub commit_retry: CommitRetryConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_country_code() -> String {
    "AU".to_string()
}

const fn default_show_ghosts() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            country_code: default_country_code(),
            show_ghosts: default_show_ghosts(),
            workload: WorkloadConfig::default(),
            refresh: RefreshConfig::default(),
            commit_retry: CommitRetryConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Capacity settings for the workload aggregator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct WorkloadConfig {
    /// Nominal weekly capacity per consultant in processing hours.
    /// Utilization is hours / (weeks x capacity); it may exceed 100%.
    #[serde(default = "default_capacity_hours_per_week")]
    pub capacity_hours_per_week: f64,
}

const fn default_capacity_hours_per_week() -> f64 {
    40.0
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            capacity_hours_per_week: default_capacity_hours_per_week(),
        }
    }
}

/// Idle refresh polling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RefreshConfig {
    /// Seconds between idle refetches of authoritative data.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Whether the refresh daemon runs a fetch immediately on startup.
    #[serde(default = "default_run_on_startup")]
    pub run_on_startup: bool,

    /// Consecutive failures after which the daemon stops.
    #[serde(default = "default_max_consecutive_failures")]
    pub max_consecutive_failures: u32,
}

const fn default_poll_interval_secs() -> u64 {
    120
}

const fn default_run_on_startup() -> bool {
    false
}

const fn default_max_consecutive_failures() -> u32 {
    5
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
            run_on_startup: default_run_on_startup(),
            max_consecutive_failures: default_max_consecutive_failures(),
        }
    }
}

/// Retry policy configuration for commit persistence calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CommitRetryConfig {
    /// Maximum retry attempts per persistence call.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Initial backoff delay in milliseconds.
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,

    /// Maximum backoff delay in milliseconds.
    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,
}

const fn default_max_retries() -> u32 {
    3
}

const fn default_initial_backoff_ms() -> u64 {
    500
}

const fn default_max_backoff_ms() -> u64 {
    10_000
}

impl Default for CommitRetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            initial_backoff_ms: default_initial_backoff_ms(),
            max_backoff_ms: default_max_backoff_ms(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.country_code, "AU");
        assert!(config.show_ghosts);
        assert!((config.workload.capacity_hours_per_week - 40.0).abs() < f64::EPSILON);
        assert_eq!(config.refresh.poll_interval_secs, 120);
        assert_eq!(config.commit_retry.max_retries, 3);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"country_code": "NZ"}"#).unwrap();
        assert_eq!(config.country_code, "NZ");
        assert_eq!(config.refresh.poll_interval_secs, 120);
        assert_eq!(config.commit_retry.initial_backoff_ms, 500);
    }
}
