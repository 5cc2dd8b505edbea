//! Dashboard roles
//!
//! This module defines the closed set of permission levels a dashboard
//! account can hold. The same enumeration describes the logged-in subject
//! and, for user rows, the target being acted upon.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RbacError;

/// Permission level of a dashboard account.
///
/// Roles are ordered `User < Manager < Admin`, but the ordering is only a
/// convenience for display and sorting. Authorization is decided by the
/// rules in [`crate::policy`], which are deliberately not transitive: an
/// admin cannot act on another admin.
///
/// # Examples
///
/// ```
/// use dashboard_rbac::Role;
///
/// assert_eq!(Role::parse("Manager"), Some(Role::Manager));
/// assert!(Role::Admin.is_admin());
/// assert!(Role::Manager.can_create());
/// assert!(!Role::User.can_create());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular account; may only edit itself
    User = 0,

    /// Can create records and manage user-role accounts
    Manager = 1,

    /// Full control, except over other admins and its own role
    Admin = 2,
}

impl Role {
    /// Check if this role is the admin role.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Check if this role is allowed to create new records.
    ///
    /// # Returns
    ///
    /// `true` for Manager and Admin roles
    pub fn can_create(&self) -> bool {
        *self >= Role::Manager
    }

    /// Parse role from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(Role)` if valid, `None` otherwise
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "user" => Some(Self::User),
            "manager" => Some(Self::Manager),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Get string representation of the role.
    ///
    /// # Examples
    ///
    /// ```
    /// use dashboard_rbac::Role;
    ///
    /// assert_eq!(Role::Manager.as_str(), "manager");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Manager => "manager",
            Self::Admin => "admin",
        }
    }

    /// Get a human-readable display name for the role.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Manager => "Manager",
            Self::Admin => "Admin",
        }
    }

    /// Get all roles, lowest first.
    pub fn all() -> [Self; 3] {
        [Self::User, Self::Manager, Self::Admin]
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::User
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RbacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| RbacError::UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_ordering() {
        assert!(Role::Admin > Role::Manager);
        assert!(Role::Manager > Role::User);
    }

    #[test]
    fn test_role_capabilities() {
        assert!(!Role::User.can_create());
        assert!(Role::Manager.can_create());
        assert!(Role::Admin.can_create());
        assert!(Role::Admin.is_admin());
        assert!(!Role::Manager.is_admin());
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("MANAGER"), Some(Role::Manager));
        assert_eq!(Role::parse(" user "), Some(Role::User));
        assert_eq!(Role::parse("owner"), None);
    }

    #[test]
    fn test_role_from_str_error() {
        let err = "superuser".parse::<Role>().unwrap_err();
        assert!(matches!(err, RbacError::UnknownRole(ref s) if s == "superuser"));
    }

    #[test]
    fn test_role_serde_form() {
        let json = serde_json::to_string(&Role::Manager).unwrap();
        assert_eq!(json, "\"manager\"");
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn test_default_role_is_least_privileged() {
        assert_eq!(Role::default(), Role::User);
    }
}
