//! # Dashboard Session
//!
//! This crate owns the dashboard's identity lifecycle: who is logged in, how
//! that session started, and when it ends.
//!
//! ## Overview
//!
//! The dashboard-session crate handles:
//! - **Session**: Establish, restore, persist, and end the current session
//! - **Gating**: Hand the current subject to the authorization model
//! - **Config**: Session age and storage key loaded from the environment
//!
//! ## Lifecycle
//!
//! ```text
//!               establish(login | registration)
//!  Anonymous ───────────────────────────────────► Authenticated
//!      ▲        restore(persisted blob)                │
//!      │                                               │
//!      └──── end() / restore failure (missing, ◄───────┘
//!            malformed, expired)
//! ```
//!
//! Credential verification and token storage live outside this crate; the
//! caller establishes a session for a subject it has already authenticated
//! and stores the string returned by `persist` wherever it likes.
//!
//! ## Usage
//!
//! ```rust
//! use dashboard_rbac::{Action, Role, Subject, Target};
//! use dashboard_session::{EstablishedBy, Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig::from_env());
//! session.establish(Subject::user("u1"), EstablishedBy::Login);
//!
//! let me = Target::user("u1", Role::User);
//! assert!(session.require(Action::Update, Some(&me)).is_ok());
//! assert!(session.require(Action::Delete, Some(&me)).is_err());
//! ```

pub mod config;
pub mod error;
pub mod session;

// Re-export main types
pub use config::{ConfigError, SessionConfig};
pub use error::{SessionError, SessionResult};
pub use session::{ActiveSession, EstablishedBy, Session, SessionState};
