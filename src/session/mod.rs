//! Opaque-token sessions and the authorization gate.
//!
//! A session maps an opaque token to a user identity for a fixed 24 hour
//! lifetime. Expiry is lazy: expired sessions are simply treated as absent
//! on lookup, no background sweep runs. Multiple concurrent sessions per
//! user are permitted.

mod config;
mod cookie;
mod manager;
mod memory_store;
mod repository;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use config::{SameSite, SessionConfig};
pub use cookie::{sign_session_token, verify_signed_cookie};
pub use manager::SessionManager;
pub use memory_store::InMemorySessionRepository;
pub use repository::SessionRepository;

/// Identity attached to an authenticated browsing session.
///
/// The username is denormalized here so presentation never needs a user
/// lookup on every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    pub user_id: i32,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub data: SessionData,
}

impl Session {
    pub fn new(token: String, data: SessionData) -> Self {
        Self { token, data }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Pure expiry predicate, so tests never have to wait on a clock.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.data.expires_at
    }
}

/// Outcome of the authorization gate applied to favorite-mutating routes.
///
/// Either control passes through with the identity available to downstream
/// logic, or the request short-circuits to the login entry point with no
/// further side effects.
#[derive(Debug, Clone)]
pub enum Gate {
    Authorized(SessionData),
    Redirect,
}

impl Gate {
    pub fn from_resolved(session: Option<SessionData>) -> Self {
        match session {
            Some(data) => Gate::Authorized(data),
            None => Gate::Redirect,
        }
    }
}
