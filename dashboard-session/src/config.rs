//! Session configuration.
//!
//! Configuration is loaded from environment variables with defaults suitable
//! for local development.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding the maximum session age in seconds.
pub const MAX_AGE_ENV: &str = "DASHBOARD_SESSION_MAX_AGE_SECS";

/// Environment variable holding the storage key for the persisted session.
pub const STORAGE_KEY_ENV: &str = "DASHBOARD_SESSION_STORAGE_KEY";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue {
        /// Configuration key.
        key: String,
        /// Error message.
        message: String,
    },
}

/// Session lifecycle configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionConfig {
    /// Persisted sessions older than this are rejected on restore.
    pub max_age_secs: u64,

    /// Key under which the caller stores the persisted session.
    pub storage_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_age_secs: 86_400,
            storage_key: "dashboard.session".to_string(),
        }
    }
}

impl SessionConfig {
    /// Load configuration from environment variables, ignoring bad values.
    ///
    /// Environment variables:
    /// - `DASHBOARD_SESSION_MAX_AGE_SECS`: Maximum session age (default: 86400)
    /// - `DASHBOARD_SESSION_STORAGE_KEY`: Storage key (default: dashboard.session)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok()).unwrap_or_default()
    }

    /// Load configuration from environment variables, rejecting bad values.
    pub fn try_from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Absent keys fall back to defaults. A max age that is not a positive
    /// integer is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();

        let max_age_secs = match lookup(MAX_AGE_ENV) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(0) => {
                    return Err(ConfigError::InvalidValue {
                        key: MAX_AGE_ENV.to_string(),
                        message: "must be greater than zero".to_string(),
                    })
                }
                Ok(secs) => secs,
                Err(e) => {
                    return Err(ConfigError::InvalidValue {
                        key: MAX_AGE_ENV.to_string(),
                        message: e.to_string(),
                    })
                }
            },
            None => default.max_age_secs,
        };

        let storage_key = lookup(STORAGE_KEY_ENV)
            .filter(|key| !key.trim().is_empty())
            .unwrap_or(default.storage_key);

        Ok(Self {
            max_age_secs,
            storage_key,
        })
    }

    /// Get the maximum session age as a Duration.
    ///
    /// Saturates at the largest span chrono can represent.
    pub fn max_age(&self) -> Duration {
        let secs = i64::try_from(self.max_age_secs)
            .unwrap_or(i64::MAX)
            .min(i64::MAX / 1000);
        Duration::seconds(secs)
    }
}
