//! # Dashboard RBAC (Role-Based Access Control)
//!
//! This crate provides the authorization model for the company/user
//! administration dashboard.
//!
//! ## Overview
//!
//! The dashboard-rbac crate handles:
//! - **Roles**: The closed set of permission levels (admin, manager, user)
//! - **Actions**: Operations requested against a resource
//! - **Resources**: Users and companies
//! - **Targets**: The row an action is performed against
//! - **Policy**: The pure `can` decision plus guard helpers
//! - **Records**: Backend rows and their projection into targets
//!
//! ## Architecture
//!
//! ```text
//! can(Subject, Action, Option<Target>) -> bool
//!
//! Subject = { id, role }
//! Target  = User { id, role } | Company { id, owner_id? }
//! ```
//!
//! The UI consults `can` before rendering an affordance, and again through
//! `authorize` before dispatching a mutation.
//!
//! ## Usage
//!
//! ```rust
//! use dashboard_rbac::{can, Action, Role, Subject, Target};
//!
//! let admin = Subject::admin("a1");
//! assert!(can(&admin, Action::ChangeRole, Some(&Target::user("u5", Role::User))));
//!
//! // No self-delete.
//! assert!(!can(&admin, Action::Delete, Some(&Target::user("a1", Role::Admin))));
//! ```

pub mod actions;
pub mod error;
pub mod policy;
pub mod records;
pub mod resources;
pub mod roles;
pub mod subject;
pub mod target;

// Re-export main types for convenience
pub use actions::Action;
pub use error::{RbacError, RbacResult, ResourceLabel};
pub use policy::{allowed_actions, authorize, can};
pub use records::{CompanyRecord, UserRecord};
pub use resources::ResourceType;
pub use roles::Role;
pub use subject::Subject;
pub use target::Target;
