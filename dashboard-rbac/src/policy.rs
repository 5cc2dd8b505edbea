//! # Policy
//!
//! The dashboard's authorization rules.
//!
//! ```text
//!            create   update                  delete                   change-role
//! user       deny     self only               deny                     deny
//! manager    allow    self, or user-role row  user-role row            deny
//! admin      allow    any but another admin   not self, not an admin   not self, not an admin
//! ```
//!
//! Company rows have no role. Users may update companies they own;
//! managers and admins may update and delete any company. Nobody changes the
//! role of a company.
//!
//! Every action except `create` needs a target. When it is missing the
//! answer is deny.

use crate::actions::Action;
use crate::error::{RbacError, RbacResult};
use crate::roles::Role;
use crate::subject::Subject;
use crate::target::Target;

/// Decide whether `subject` may perform `action` against `target`.
///
/// Pure and total: no side effects, no panics, and the result depends only
/// on the three arguments.
///
/// # Example
///
/// ```
/// use dashboard_rbac::{can, Action, Role, Subject, Target};
///
/// let manager = Subject::manager("m1");
/// assert!(can(&manager, Action::Create, None));
/// assert!(can(&manager, Action::Delete, Some(&Target::user("u9", Role::User))));
/// assert!(!can(&manager, Action::Delete, Some(&Target::user("m2", Role::Manager))));
///
/// // Fail closed when the target is missing.
/// assert!(!can(&manager, Action::Update, None));
/// ```
pub fn can(subject: &Subject, action: Action, target: Option<&Target>) -> bool {
    if !action.requires_target() {
        return subject.role.can_create();
    }

    let Some(target) = target else {
        return false;
    };

    if !action.applies_to(target.resource()) {
        return false;
    }

    match target {
        Target::User { id, role } => can_act_on_user(subject, action, id, *role),
        Target::Company { owner_id, .. } => {
            can_act_on_company(subject, action, owner_id.as_deref())
        }
    }
}

fn can_act_on_user(subject: &Subject, action: Action, target_id: &str, target_role: Role) -> bool {
    let is_self = subject.is(target_id);

    match (subject.role, action) {
        (role, Action::Create) => role.can_create(),

        (Role::User, Action::Update) => is_self,
        (Role::User, Action::Delete | Action::ChangeRole) => false,

        (Role::Manager, Action::Update) => is_self || target_role == Role::User,
        (Role::Manager, Action::Delete) => target_role == Role::User,
        (Role::Manager, Action::ChangeRole) => false,

        (Role::Admin, Action::Update) => is_self || target_role != Role::Admin,
        (Role::Admin, Action::Delete | Action::ChangeRole) => {
            !is_self && target_role != Role::Admin
        }
    }
}

fn can_act_on_company(subject: &Subject, action: Action, owner_id: Option<&str>) -> bool {
    match (subject.role, action) {
        (role, Action::Create) => role.can_create(),
        (_, Action::ChangeRole) => false,

        (Role::User, Action::Update) => owner_id.is_some_and(|owner| subject.is(owner)),
        (Role::User, Action::Delete) => false,

        (Role::Manager | Role::Admin, Action::Update | Action::Delete) => true,
    }
}

/// Require permission before dispatching a mutation.
///
/// Same decision as [`can`], surfaced as a typed rejection for callers that
/// propagate errors with `?`.
///
/// # Errors
///
/// Returns [`RbacError::Forbidden`] when [`can`] denies the request.
///
/// # Example
///
/// ```
/// use dashboard_rbac::{authorize, Action, Role, Subject, Target};
///
/// let admin = Subject::admin("a1");
/// let me = Target::user("a1", Role::Admin);
/// let err = authorize(&admin, Action::Delete, Some(&me)).unwrap_err();
/// assert_eq!(err.status_code(), 403);
/// ```
pub fn authorize(subject: &Subject, action: Action, target: Option<&Target>) -> RbacResult<()> {
    if can(subject, action, target) {
        return Ok(());
    }

    let resource = target.map(Target::resource);
    tracing::debug!(
        subject_id = %subject.id,
        role = %subject.role,
        action = %action,
        target_id = target.map(Target::id).unwrap_or("-"),
        "Authorization denied"
    );

    Err(RbacError::Forbidden {
        subject_id: subject.id.clone(),
        role: subject.role,
        action,
        resource: resource.into(),
    })
}

/// List the actions `subject` may perform against `target`.
///
/// Used to build a row's action menu. Actions are returned in
/// [`Action::all`] order.
pub fn allowed_actions(subject: &Subject, target: Option<&Target>) -> Vec<Action> {
    Action::all()
        .into_iter()
        .filter(|action| can(subject, *action, target))
        .collect()
}
