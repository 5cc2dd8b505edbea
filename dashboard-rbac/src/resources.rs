//! # Resource Types
//!
//! The two resources managed through the dashboard.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::actions::Action;
use crate::error::RbacError;

/// Resource types that actions can be performed against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    /// Dashboard accounts, each carrying a permission role.
    User,
    /// Companies listed in the dashboard.
    Company,
}

impl ResourceType {
    /// Get the string representation of the resource type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::User => "user",
            ResourceType::Company => "company",
        }
    }

    /// Parse resource type from string representation.
    ///
    /// Accepts both the singular form and the plural collection name used by
    /// the backend routes (`/users`, `/companies`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "user" | "users" => Some(ResourceType::User),
            "company" | "companies" => Some(ResourceType::Company),
            _ => None,
        }
    }

    /// Get the backend collection name for this resource.
    ///
    /// # Example
    ///
    /// ```
    /// use dashboard_rbac::ResourceType;
    ///
    /// assert_eq!(ResourceType::Company.collection(), "companies");
    /// ```
    pub fn collection(&self) -> &'static str {
        match self {
            ResourceType::User => "users",
            ResourceType::Company => "companies",
        }
    }

    /// Get the actions that exist for this resource type.
    pub fn actions(&self) -> Vec<Action> {
        Action::all()
            .into_iter()
            .filter(|action| action.applies_to(*self))
            .collect()
    }

    /// Get all resource types.
    pub fn all() -> [Self; 2] {
        [ResourceType::User, ResourceType::Company]
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = RbacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| RbacError::UnknownResource(s.to_string()))
    }
}
