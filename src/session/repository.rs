//! Session repository trait.

use async_trait::async_trait;

use crate::AppError;

use super::{Session, SessionData};

/// Storage for session tokens.
///
/// Implementations decide the at-rest representation (the Postgres store
/// keeps only a SHA-256 hash of the token); the trait always speaks the
/// opaque token handed to the client.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Creates a new session and returns the opaque token.
    async fn create(&self, data: SessionData) -> Result<String, AppError>;

    /// Finds a session by token. Absent is a normal outcome for anonymous
    /// traffic, never an error. Expiry is the caller's concern.
    async fn find(&self, token: &str) -> Result<Option<Session>, AppError>;

    /// Destroys a session unconditionally; destroying an absent session is
    /// not an error.
    async fn destroy(&self, token: &str) -> Result<(), AppError>;
}
