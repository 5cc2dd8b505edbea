//! End-to-end tests for the session lifecycle and its use as an
//! authorization gate.
//!
//! Scenarios:
//! 1. Login from a backend user row, gate row actions, logout
//! 2. Persist, reload in a fresh session, keep the same decisions
//! 3. Regrading requires a new session
//! 4. Shared session behind a lock consulted from many tasks

use std::sync::Arc;

use chrono::{Duration, Utc};
use dashboard_rbac::{Action, CompanyRecord, Role, Target, UserRecord};
use dashboard_session::{EstablishedBy, Session, SessionConfig, SessionError};
use tokio::sync::RwLock;

fn user_row(id: &str, role: Role) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        name: format!("{id} name"),
        email: format!("{id}@example.com"),
        role,
        company_id: None,
        created_at: None,
    }
}

#[test]
fn test_login_gate_logout() {
    let me = user_row("m1", Role::Manager);
    let rows = [
        user_row("u9", Role::User),
        user_row("m2", Role::Manager),
        user_row("a1", Role::Admin),
    ];

    let mut session = Session::default();
    session.establish(me.to_subject(), EstablishedBy::Login);

    let deletable: Vec<&str> = rows
        .iter()
        .filter(|row| session.can(Action::Delete, Some(&row.to_target())))
        .map(|row| row.id.as_str())
        .collect();
    assert_eq!(deletable, vec!["u9"]);

    let company = CompanyRecord {
        id: "c1".into(),
        name: "Acme".into(),
        owner_id: None,
        employees: Some(12),
        revenue: None,
        created_at: None,
    };
    assert!(session.require(Action::Update, Some(&company.to_target())).is_ok());

    session.end();
    assert!(matches!(
        session.require(Action::Create, None),
        Err(SessionError::NotAuthenticated)
    ));
}

#[test]
fn test_persisted_session_keeps_decisions() {
    let mut session = Session::default();
    session.establish(user_row("a1", Role::Admin).to_subject(), EstablishedBy::Login);
    let blob = session.persist().unwrap();

    let mut reloaded = Session::default();
    let subject = reloaded.restore_now(&blob).unwrap().clone();
    assert_eq!(Some(&subject), session.subject());

    let targets = [
        Target::user("a1", Role::Admin),
        Target::user("a2", Role::Admin),
        Target::user("u5", Role::User),
        Target::company("c1"),
    ];
    for target in &targets {
        for action in Action::all() {
            assert_eq!(
                session.can(action, Some(target)),
                reloaded.can(action, Some(target))
            );
        }
    }
}

#[test]
fn test_expired_blob_forces_login() {
    let config = SessionConfig {
        max_age_secs: 300,
        ..SessionConfig::default()
    };
    let mut session = Session::new(config);
    session.establish(user_row("u1", Role::User).to_subject(), EstablishedBy::Login);
    let blob = session.persist().unwrap();

    let err = session
        .restore(&blob, Utc::now() + Duration::hours(1))
        .unwrap_err();
    assert!(err.requires_login());
    assert_eq!(err.status_code(), 401);
    assert!(!session.is_authenticated());
}

#[test]
fn test_role_change_requires_new_session() {
    let mut session = Session::default();
    session.establish(user_row("u1", Role::User).to_subject(), EstablishedBy::Login);
    assert!(!session.can(Action::Create, None));

    // Promoted by an admin elsewhere; takes effect on the next login.
    session.establish(user_row("u1", Role::Manager).to_subject(), EstablishedBy::Login);
    assert!(session.can(Action::Create, None));
}

#[tokio::test]
async fn test_shared_session_across_tasks() {
    let session = Arc::new(RwLock::new(Session::default()));
    session
        .write()
        .await
        .establish(user_row("m1", Role::Manager).to_subject(), EstablishedBy::Login);

    let mut handles = Vec::new();
    for i in 0..16 {
        let session = Arc::clone(&session);
        handles.push(tokio::spawn(async move {
            let target = Target::user(format!("u{i}"), Role::User);
            session.read().await.can(Action::Delete, Some(&target))
        }));
    }

    for handle in handles {
        assert!(handle.await.unwrap());
    }
}
