//! Environment-variable configuration. All connection parameters come from
//! the environment; a missing required variable is a startup failure.

use std::time::Duration;

use crate::shared::error::ConfigError;

pub fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name.to_string()))
}

pub fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Poll interval for a source binary: the per-source default, unless
/// `POLL_INTERVAL_SECS` overrides it.
pub fn poll_interval(default_secs: u64) -> Result<Duration, ConfigError> {
    match std::env::var("POLL_INTERVAL_SECS") {
        Err(_) => Ok(Duration::from_secs(default_secs)),
        Ok(value) => value
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|e| ConfigError::Invalid {
                var: "POLL_INTERVAL_SECS".to_string(),
                reason: e.to_string(),
            }),
    }
}
