//! The acting subject of an authorization decision.

use serde::{Deserialize, Serialize};

use crate::roles::Role;

/// The currently authenticated account whose permissions are evaluated.
///
/// The subject is always passed explicitly to [`crate::can`]; this crate
/// never reads it from ambient state.
///
/// # Examples
///
/// ```
/// use dashboard_rbac::{Role, Subject};
///
/// let subject = Subject::new("u1", Role::User);
/// assert!(subject.is("u1"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Subject {
    /// Opaque account identifier.
    pub id: String,
    /// The subject's single permission role.
    pub role: Role,
}

impl Subject {
    /// Create a subject from an identifier and role.
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
        }
    }

    /// Shorthand for an admin subject.
    pub fn admin(id: impl Into<String>) -> Self {
        Self::new(id, Role::Admin)
    }

    /// Shorthand for a manager subject.
    pub fn manager(id: impl Into<String>) -> Self {
        Self::new(id, Role::Manager)
    }

    /// Shorthand for a user subject.
    pub fn user(id: impl Into<String>) -> Self {
        Self::new(id, Role::User)
    }

    /// Check if this subject has the given identifier.
    pub fn is(&self, id: &str) -> bool {
        self.id == id
    }
}
