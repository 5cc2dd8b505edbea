//! Error types for authorization operations
//!
//! The decision function [`crate::can`] never fails. These errors cover the
//! fallible edges around it: parsing identifiers received as strings and
//! turning a denial into a typed rejection before a mutation is dispatched.

use thiserror::Error;

use crate::actions::Action;
use crate::resources::ResourceType;
use crate::roles::Role;

/// Authorization error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RbacError {
    /// Role string is not one of admin, manager, user
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Action string is not a recognized operation
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// Resource string is not a recognized resource type
    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    /// Subject is not permitted to perform the action
    #[error("Forbidden: {role} {subject_id} may not {action} {resource}")]
    Forbidden {
        /// Identifier of the acting subject.
        subject_id: String,
        /// Role of the acting subject.
        role: Role,
        /// Requested action.
        action: Action,
        /// Resource kind of the target, if one was supplied.
        resource: ResourceLabel,
    },
}

/// Result type for authorization operations.
pub type RbacResult<T> = Result<T, RbacError>;

/// Resource kind named in a [`RbacError::Forbidden`] message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceLabel {
    /// A specific resource kind.
    Known(ResourceType),
    /// No target was supplied with the request.
    Unspecified,
}

impl std::fmt::Display for ResourceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceLabel::Known(resource) => write!(f, "{}", resource),
            ResourceLabel::Unspecified => f.write_str("an unspecified target"),
        }
    }
}

impl From<Option<ResourceType>> for ResourceLabel {
    fn from(resource: Option<ResourceType>) -> Self {
        resource.map_or(ResourceLabel::Unspecified, ResourceLabel::Known)
    }
}

impl RbacError {
    /// Check if this error is a permission denial.
    pub fn is_forbidden(&self) -> bool {
        matches!(self, RbacError::Forbidden { .. })
    }

    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            RbacError::UnknownRole(_)
            | RbacError::UnknownAction(_)
            | RbacError::UnknownResource(_) => 400,

            RbacError::Forbidden { .. } => 403,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            RbacError::UnknownRole(_) => "UNKNOWN_ROLE",
            RbacError::UnknownAction(_) => "UNKNOWN_ACTION",
            RbacError::UnknownResource(_) => "UNKNOWN_RESOURCE",
            RbacError::Forbidden { .. } => "FORBIDDEN",
        }
    }
}
