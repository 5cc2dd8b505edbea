//! # Records
//!
//! JSON rows of the `users` and `companies` resources as exchanged with the
//! backend API, and their projection into authorization inputs.

use serde::{Deserialize, Serialize};

use crate::roles::Role;
use crate::subject::Subject;
use crate::target::Target;

/// A row of the `users` resource.
///
/// # Example
///
/// ```
/// use dashboard_rbac::records::UserRecord;
/// use dashboard_rbac::{Role, Target};
///
/// let row: UserRecord = serde_json::from_str(
///     r#"{"id":"u9","name":"Ana","email":"ana@example.com","role":"user"}"#,
/// ).unwrap();
/// assert_eq!(row.to_target(), Target::user("u9", Role::User));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// User ID
    pub id: String,

    /// Display name
    pub name: String,

    /// Login email
    pub email: String,

    /// Permission role
    pub role: Role,

    /// Company the user belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,

    /// Creation timestamp as sent by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl UserRecord {
    /// Project this row into an authorization target.
    pub fn to_target(&self) -> Target {
        Target::user(self.id.clone(), self.role)
    }

    /// Project this row into a subject, for the account that just logged in.
    pub fn to_subject(&self) -> Subject {
        Subject::new(self.id.clone(), self.role)
    }
}

impl From<&UserRecord> for Target {
    fn from(record: &UserRecord) -> Self {
        record.to_target()
    }
}

impl From<&UserRecord> for Subject {
    fn from(record: &UserRecord) -> Self {
        record.to_subject()
    }
}

/// A row of the `companies` resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    /// Company ID
    pub id: String,

    /// Company name
    pub name: String,

    /// Account that owns the company
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,

    /// Headcount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employees: Option<u32>,

    /// Annual revenue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<f64>,

    /// Creation timestamp as sent by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl CompanyRecord {
    /// Project this row into an authorization target.
    pub fn to_target(&self) -> Target {
        Target::Company {
            id: self.id.clone(),
            owner_id: self.owner_id.clone(),
        }
    }
}

impl From<&CompanyRecord> for Target {
    fn from(record: &CompanyRecord) -> Self {
        record.to_target()
    }
}
