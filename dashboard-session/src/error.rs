//! Error types for session operations
//!
//! These cover the session lifecycle: restoring a persisted session,
//! requiring an authenticated subject, and permission denials raised while
//! gating a mutation.

use dashboard_rbac::RbacError;
use thiserror::Error;

use crate::config::ConfigError;

/// Session error types.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No subject is logged in
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Nothing was persisted to restore from
    #[error("No persisted session")]
    Missing,

    /// Persisted session could not be read
    #[error("Invalid persisted session: {0}")]
    InvalidPersistedSession(String),

    /// Persisted session is older than the configured maximum age
    #[error("Session expired after {age_secs}s")]
    Expired {
        /// Age of the persisted session in seconds.
        age_secs: i64,
    },

    /// Session could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Authorization error
    #[error(transparent)]
    Rbac(#[from] RbacError),
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

impl SessionError {
    /// Check if this error should be logged at error level.
    ///
    /// Expired or missing sessions and denials are expected during normal
    /// use.
    pub fn is_server_error(&self) -> bool {
        matches!(self, SessionError::Serialization(_) | SessionError::Config(_))
    }

    /// Check if this error requires the user to log in again.
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            SessionError::NotAuthenticated
                | SessionError::Missing
                | SessionError::InvalidPersistedSession(_)
                | SessionError::Expired { .. }
        )
    }

    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            SessionError::NotAuthenticated
            | SessionError::Missing
            | SessionError::InvalidPersistedSession(_)
            | SessionError::Expired { .. } => 401,

            SessionError::Rbac(e) => e.status_code(),

            SessionError::Serialization(_) | SessionError::Config(_) => 500,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            SessionError::NotAuthenticated => "NOT_AUTHENTICATED",
            SessionError::Missing => "SESSION_MISSING",
            SessionError::InvalidPersistedSession(_) => "SESSION_INVALID",
            SessionError::Expired { .. } => "SESSION_EXPIRED",
            SessionError::Serialization(_) => "SERIALIZATION_ERROR",
            SessionError::Config(_) => "CONFIG_ERROR",
            SessionError::Rbac(e) => e.error_code(),
        }
    }
}
