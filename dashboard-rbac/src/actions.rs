//! # Actions
//!
//! Defines the operations the dashboard can request against a resource.
//! Each action is evaluated independently; there is no implication between
//! actions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RbacError;
use crate::resources::ResourceType;

/// Operations that can be requested against a dashboard resource.
///
/// - **Create**: Add a new user or company
/// - **Update**: Edit an existing row
/// - **Delete**: Remove an existing row
/// - **ChangeRole**: Regrade a user's permission role (user resource only)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    /// Create a new row.
    ///
    /// Does not act on an existing entity, so no target is needed.
    Create,

    /// Update an existing row.
    Update,

    /// Delete an existing row.
    Delete,

    /// Change a user's permission role.
    ///
    /// The most sensitive action; only admins are ever granted it.
    ChangeRole,
}

impl Action {
    /// Get the string representation of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::ChangeRole => "change-role",
        }
    }

    /// Parse action from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive, supports aliases)
    ///
    /// # Returns
    ///
    /// `Some(Action)` if valid, `None` otherwise
    ///
    /// # Example
    ///
    /// ```
    /// use dashboard_rbac::Action;
    ///
    /// assert_eq!(Action::parse("update"), Some(Action::Update));
    /// assert_eq!(Action::parse("edit"), Some(Action::Update)); // Alias
    /// assert_eq!(Action::parse("change_role"), Some(Action::ChangeRole));
    /// assert_eq!(Action::parse("read"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "create" | "add" | "new" => Some(Action::Create),
            "update" | "edit" | "modify" | "put" | "patch" => Some(Action::Update),
            "delete" | "remove" | "destroy" => Some(Action::Delete),
            "change-role" | "change_role" | "changerole" | "permission" => {
                Some(Action::ChangeRole)
            }
            _ => None,
        }
    }

    /// Get all actions, in menu order.
    pub fn all() -> [Self; 4] {
        [
            Action::Create,
            Action::Update,
            Action::Delete,
            Action::ChangeRole,
        ]
    }

    /// Check if the action operates on an existing entity.
    ///
    /// Target-requiring actions are denied when no target is supplied.
    ///
    /// # Example
    ///
    /// ```
    /// use dashboard_rbac::Action;
    ///
    /// assert!(!Action::Create.requires_target());
    /// assert!(Action::Delete.requires_target());
    /// ```
    pub fn requires_target(&self) -> bool {
        !matches!(self, Action::Create)
    }

    /// Check if the action exists for a resource type.
    ///
    /// Companies have no permission role, so `ChangeRole` only applies to
    /// users.
    pub fn applies_to(&self, resource: ResourceType) -> bool {
        match self {
            Action::ChangeRole => resource == ResourceType::User,
            Action::Create | Action::Update | Action::Delete => true,
        }
    }

    /// Check if this is a destructive action.
    pub fn is_destructive(&self) -> bool {
        matches!(self, Action::Delete)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = RbacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| RbacError::UnknownAction(s.to_string()))
    }
}
