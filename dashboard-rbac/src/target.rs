//! # Targets
//!
//! The entity an action is performed against. Each resource kind has its own
//! variant so the policy can match exhaustively on what it is looking at.

use serde::{Deserialize, Serialize};

use crate::resources::ResourceType;
use crate::roles::Role;

/// The entity instance an action would be performed against.
///
/// # Example
///
/// ```
/// use dashboard_rbac::{ResourceType, Role, Target};
///
/// let target = Target::user("u9", Role::User);
/// assert_eq!(target.resource(), ResourceType::User);
/// assert_eq!(target.role(), Some(Role::User));
///
/// let company = Target::company("c1");
/// assert_eq!(company.role(), None);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Target {
    /// A user row with its current permission role.
    User {
        /// Identifier of the user.
        id: String,
        /// The user's current role.
        role: Role,
    },

    /// A company row.
    Company {
        /// Identifier of the company.
        id: String,
        /// Account that owns the company, if known.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        owner_id: Option<String>,
    },
}

impl Target {
    /// Create a user target.
    pub fn user(id: impl Into<String>, role: Role) -> Self {
        Target::User {
            id: id.into(),
            role,
        }
    }

    /// Create a company target with no known owner.
    pub fn company(id: impl Into<String>) -> Self {
        Target::Company {
            id: id.into(),
            owner_id: None,
        }
    }

    /// Create a company target owned by the given account.
    pub fn owned_company(id: impl Into<String>, owner_id: impl Into<String>) -> Self {
        Target::Company {
            id: id.into(),
            owner_id: Some(owner_id.into()),
        }
    }

    /// Get the target's identifier.
    pub fn id(&self) -> &str {
        match self {
            Target::User { id, .. } | Target::Company { id, .. } => id,
        }
    }

    /// Get the resource kind of the target.
    pub fn resource(&self) -> ResourceType {
        match self {
            Target::User { .. } => ResourceType::User,
            Target::Company { .. } => ResourceType::Company,
        }
    }

    /// Get the target's permission role; only user targets have one.
    pub fn role(&self) -> Option<Role> {
        match self {
            Target::User { role, .. } => Some(*role),
            Target::Company { .. } => None,
        }
    }
}
