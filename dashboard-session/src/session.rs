//! Session lifecycle for the logged-in subject
//!
//! This module provides the `Session` type that owns the dashboard's current
//! identity. A session starts on login, registration, or restoration of a
//! persisted blob, and ends on logout or when the persisted blob turns out to
//! be unusable. The authorization model never reads this state directly; the
//! session hands its subject to `dashboard_rbac::can` explicitly.

use chrono::{DateTime, Utc};
use dashboard_rbac::{Action, Subject, Target};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};

/// How a session came to be established.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EstablishedBy {
    /// Successful login
    Login,
    /// Successful registration
    Registration,
    /// Restored from a persisted session
    Restore,
}

/// An authenticated session.
///
/// This is also the persisted form written by [`Session::persist`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSession {
    /// Session ID
    pub session_id: Uuid,

    /// The logged-in subject
    pub subject: Subject,

    /// When the subject authenticated; kept across restores
    pub established_at: DateTime<Utc>,

    /// How the session was last established
    pub source: EstablishedBy,
}

impl ActiveSession {
    /// Age of the session at `now`.
    pub fn age_at(&self, now: DateTime<Utc>) -> chrono::Duration {
        now - self.established_at
    }
}

/// Current identity state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Nobody is logged in
    #[default]
    Anonymous,
    /// A subject is logged in
    Authenticated(ActiveSession),
}

/// Holder of the dashboard's current subject.
///
/// # Examples
///
/// ```
/// use dashboard_rbac::{Action, Subject};
/// use dashboard_session::{EstablishedBy, Session, SessionConfig};
///
/// let mut session = Session::new(SessionConfig::default());
/// assert!(!session.can(Action::Create, None));
///
/// session.establish(Subject::manager("m1"), EstablishedBy::Login);
/// assert!(session.can(Action::Create, None));
///
/// let blob = session.persist().unwrap();
/// session.end();
/// assert!(!session.is_authenticated());
///
/// session.restore_now(&blob).unwrap();
/// assert_eq!(session.subject().map(|s| s.id.as_str()), Some("m1"));
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    state: SessionState,
}

impl Session {
    /// Creates an anonymous session.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            state: SessionState::Anonymous,
        }
    }

    /// Get the session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Get the current identity state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Get the active session, if any.
    pub fn active(&self) -> Option<&ActiveSession> {
        match &self.state {
            SessionState::Authenticated(active) => Some(active),
            SessionState::Anonymous => None,
        }
    }

    /// Get the logged-in subject, if any.
    pub fn subject(&self) -> Option<&Subject> {
        self.active().map(|active| &active.subject)
    }

    /// Check if a subject is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.active().is_some()
    }

    /// Start a session for a subject authenticated elsewhere.
    ///
    /// Replaces any prior session. A subject's role only changes by
    /// establishing a new session. Returns the new session ID.
    pub fn establish(&mut self, subject: Subject, by: EstablishedBy) -> Uuid {
        let active = ActiveSession {
            session_id: Uuid::now_v7(),
            subject,
            established_at: Utc::now(),
            source: by,
        };

        tracing::info!(
            session_id = %active.session_id,
            subject_id = %active.subject.id,
            role = %active.subject.role,
            source = ?by,
            "Session established"
        );

        let session_id = active.session_id;
        self.state = SessionState::Authenticated(active);
        session_id
    }

    /// Restore a session from a blob produced by [`Session::persist`].
    ///
    /// Any failure tears the current session down.
    ///
    /// # Errors
    ///
    /// - [`SessionError::Missing`] for an empty blob
    /// - [`SessionError::InvalidPersistedSession`] for malformed JSON, an
    ///   unknown role, or a timestamp in the future
    /// - [`SessionError::Expired`] when older than the configured max age
    pub fn restore(&mut self, persisted: &str, now: DateTime<Utc>) -> SessionResult<&Subject> {
        match self.decode(persisted, now) {
            Ok(mut active) => {
                active.source = EstablishedBy::Restore;
                tracing::info!(
                    session_id = %active.session_id,
                    subject_id = %active.subject.id,
                    "Session restored"
                );
                self.state = SessionState::Authenticated(active);
                self.subject().ok_or(SessionError::NotAuthenticated)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Rejected persisted session");
                self.end();
                Err(e)
            }
        }
    }

    /// Restore a session, measuring its age against the current time.
    pub fn restore_now(&mut self, persisted: &str) -> SessionResult<&Subject> {
        self.restore(persisted, Utc::now())
    }

    fn decode(&self, persisted: &str, now: DateTime<Utc>) -> SessionResult<ActiveSession> {
        if persisted.trim().is_empty() {
            return Err(SessionError::Missing);
        }

        let active: ActiveSession = serde_json::from_str(persisted)
            .map_err(|e| SessionError::InvalidPersistedSession(e.to_string()))?;

        let age = active.age_at(now);
        if age < chrono::Duration::zero() {
            return Err(SessionError::InvalidPersistedSession(
                "established in the future".to_string(),
            ));
        }
        if age > self.config.max_age() {
            return Err(SessionError::Expired {
                age_secs: age.num_seconds(),
            });
        }

        Ok(active)
    }

    /// End the session (logout). Ending an anonymous session is a no-op.
    pub fn end(&mut self) {
        if let SessionState::Authenticated(active) = &self.state {
            tracing::info!(
                session_id = %active.session_id,
                subject_id = %active.subject.id,
                "Session ended"
            );
        }
        self.state = SessionState::Anonymous;
    }

    /// Serialize the active session for the caller's storage.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotAuthenticated`] when nobody is logged in.
    pub fn persist(&self) -> SessionResult<String> {
        let active = self.active().ok_or(SessionError::NotAuthenticated)?;
        serde_json::to_string(active).map_err(|e| SessionError::Serialization(e.to_string()))
    }

    /// Decide whether the logged-in subject may perform `action`.
    ///
    /// Anonymous sessions are always denied.
    pub fn can(&self, action: Action, target: Option<&Target>) -> bool {
        self.subject()
            .is_some_and(|subject| dashboard_rbac::can(subject, action, target))
    }

    /// Require a logged-in subject permitted to perform `action`.
    ///
    /// # Errors
    ///
    /// - [`SessionError::NotAuthenticated`] when nobody is logged in
    /// - [`SessionError::Rbac`] wrapping `Forbidden` when the policy denies
    pub fn require(&self, action: Action, target: Option<&Target>) -> SessionResult<&Subject> {
        let subject = self.subject().ok_or(SessionError::NotAuthenticated)?;
        dashboard_rbac::authorize(subject, action, target)?;
        Ok(subject)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use dashboard_rbac::Role;

    #[test]
    fn test_new_session_is_anonymous() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.state(), &SessionState::Anonymous);
        assert!(session.subject().is_none());
    }

    #[test]
    fn test_establish_replaces_prior_session() {
        let mut session = Session::default();
        let first = session.establish(Subject::user("u1"), EstablishedBy::Login);
        let second = session.establish(Subject::admin("a1"), EstablishedBy::Registration);

        assert_ne!(first, second);
        assert_eq!(session.subject(), Some(&Subject::admin("a1")));
        assert_eq!(
            session.active().map(|a| a.source),
            Some(EstablishedBy::Registration)
        );
    }

    #[test]
    fn test_end_is_idempotent() {
        let mut session = Session::default();
        session.establish(Subject::user("u1"), EstablishedBy::Login);
        session.end();
        session.end();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_persist_requires_authentication() {
        let session = Session::default();
        assert!(matches!(session.persist(), Err(SessionError::NotAuthenticated)));
    }

    #[test]
    fn test_restore_keeps_original_timestamp() {
        let mut session = Session::default();
        session.establish(Subject::manager("m1"), EstablishedBy::Login);
        let original = session.active().cloned().unwrap();
        let blob = session.persist().unwrap();

        let mut restored = Session::default();
        let now = original.established_at + Duration::minutes(5);
        restored.restore(&blob, now).unwrap();

        let active = restored.active().unwrap();
        assert_eq!(active.session_id, original.session_id);
        assert_eq!(active.established_at, original.established_at);
        assert_eq!(active.source, EstablishedBy::Restore);
    }

    #[test]
    fn test_restore_rejects_expired() {
        let config = SessionConfig {
            max_age_secs: 60,
            ..SessionConfig::default()
        };
        let mut session = Session::new(config);
        session.establish(Subject::user("u1"), EstablishedBy::Login);
        let blob = session.persist().unwrap();
        let established = session.active().unwrap().established_at;

        let err = session
            .restore(&blob, established + Duration::seconds(61))
            .unwrap_err();
        assert!(matches!(err, SessionError::Expired { age_secs: 61 }));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_restore_rejects_future_timestamp() {
        let mut session = Session::default();
        session.establish(Subject::user("u1"), EstablishedBy::Login);
        let blob = session.persist().unwrap();
        let established = session.active().unwrap().established_at;

        let err = session
            .restore(&blob, established - Duration::seconds(1))
            .unwrap_err();
        assert!(matches!(err, SessionError::InvalidPersistedSession(_)));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_restore_rejects_missing_and_malformed() {
        let mut session = Session::default();
        session.establish(Subject::user("u1"), EstablishedBy::Login);

        assert!(matches!(session.restore_now("  "), Err(SessionError::Missing)));
        assert!(!session.is_authenticated());

        session.establish(Subject::user("u1"), EstablishedBy::Login);
        let err = session.restore_now("{not json").unwrap_err();
        assert!(matches!(err, SessionError::InvalidPersistedSession(_)));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_restore_rejects_unknown_role() {
        let blob = format!(
            r#"{{"sessionId":"{}","subject":{{"id":"u1","role":"root"}},"establishedAt":"{}","source":"login"}}"#,
            Uuid::now_v7(),
            Utc::now().to_rfc3339()
        );
        let mut session = Session::default();
        let err = session.restore_now(&blob).unwrap_err();
        assert!(err.requires_login());
    }

    #[test]
    fn test_anonymous_is_denied() {
        let session = Session::default();
        let me = Target::user("u1", Role::User);
        assert!(!session.can(Action::Update, Some(&me)));
        assert!(matches!(
            session.require(Action::Create, None),
            Err(SessionError::NotAuthenticated)
        ));
    }

    #[test]
    fn test_require_delegates_to_policy() {
        let mut session = Session::default();
        session.establish(Subject::admin("a1"), EstablishedBy::Login);

        let user_row = Target::user("u5", Role::User);
        let subject = session.require(Action::ChangeRole, Some(&user_row)).unwrap();
        assert_eq!(subject.id, "a1");

        let self_row = Target::user("a1", Role::Admin);
        let err = session.require(Action::Delete, Some(&self_row)).unwrap_err();
        assert_eq!(err.status_code(), 403);
    }
}
