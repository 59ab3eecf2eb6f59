use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid capacity_hours_per_week: {0}. Must be positive")]
    InvalidCapacity(f64),

    #[error("Invalid poll_interval_secs: {0}. Must be at least 1")]
    InvalidPollInterval(u64),

    #[error("Invalid country_code: {0:?}. Must be a two-letter ISO code")]
    InvalidCountryCode(String),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error(
        "Invalid backoff configuration: initial_backoff_ms ({0}) must be less than max_backoff_ms ({1})"
    )]
    InvalidBackoff(u64, u64),

    #[error("Invalid max_consecutive_failures: {0}. Cannot be 0")]
    InvalidMaxFailures(u32),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .paymaster/config.yaml (project config)
    /// 3. .paymaster/local.yaml (project local overrides, optional)
    /// 4. Environment variables (PAYMASTER_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".paymaster/config.yaml"))
            .merge(Yaml::file(".paymaster/local.yaml"))
            .merge(Env::prefixed("PAYMASTER_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.workload.capacity_hours_per_week <= 0.0 {
            return Err(ConfigError::InvalidCapacity(
                config.workload.capacity_hours_per_week,
            ));
        }

        if config.refresh.poll_interval_secs == 0 {
            return Err(ConfigError::InvalidPollInterval(
                config.refresh.poll_interval_secs,
            ));
        }

        if config.refresh.max_consecutive_failures == 0 {
            return Err(ConfigError::InvalidMaxFailures(
                config.refresh.max_consecutive_failures,
            ));
        }

        if config.country_code.len() != 2
            || !config.country_code.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(ConfigError::InvalidCountryCode(config.country_code.clone()));
        }

        match config.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => return Err(ConfigError::InvalidLogLevel(other.to_string())),
        }

        match config.logging.format.as_str() {
            "json" | "pretty" => {}
            other => return Err(ConfigError::InvalidLogFormat(other.to_string())),
        }

        if config.commit_retry.initial_backoff_ms >= config.commit_retry.max_backoff_ms {
            return Err(ConfigError::InvalidBackoff(
                config.commit_retry.initial_backoff_ms,
                config.commit_retry.max_backoff_ms,
            ));
        }

        Ok(())
    }
}
