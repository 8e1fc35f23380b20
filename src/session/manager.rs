//! Session lifecycle on top of a [`SessionRepository`].

use chrono::{Duration, Utc};

use crate::repository::User;
use crate::AppError;

use super::repository::SessionRepository;
use super::SessionData;

/// Issues, resolves and destroys sessions.
///
/// One instance per application; the repository handle is injected at
/// construction so tests can run against the in-memory store.
#[derive(Debug, Clone)]
pub struct SessionManager<S> {
    repo: S,
    lifetime: Duration,
}

impl<S: SessionRepository> SessionManager<S> {
    /// Creates a manager with the standard 24 hour session lifetime.
    pub fn new(repo: S) -> Self {
        Self {
            repo,
            lifetime: Duration::hours(24),
        }
    }

    pub fn with_lifetime(repo: S, lifetime: Duration) -> Self {
        Self { repo, lifetime }
    }

    /// Issues a fresh opaque token for the user, valid for the configured
    /// lifetime from now. The caller delivers the token to the client as
    /// the credential echoed on subsequent requests.
    pub async fn create(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let token = self
            .repo
            .create(SessionData {
                user_id: user.id,
                username: user.username.clone(),
                created_at: now,
                expires_at: now + self.lifetime,
            })
            .await?;

        log::debug!(
            target: "cookmark::session",
            "msg=\"session created\" user_id={}",
            user.id
        );

        Ok(token)
    }

    /// Looks up a token and returns the identity it maps to, or `None` for
    /// unknown and expired tokens alike. Expired sessions are destroyed
    /// lazily on the way out.
    pub async fn resolve(&self, token: &str) -> Result<Option<SessionData>, AppError> {
        let Some(session) = self.repo.find(token).await? else {
            return Ok(None);
        };

        if session.is_expired() {
            self.repo.destroy(token).await?;
            return Ok(None);
        }

        Ok(Some(session.data))
    }

    /// Removes the mapping unconditionally; idempotent.
    pub async fn destroy(&self, token: &str) -> Result<(), AppError> {
        self.repo.destroy(token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::InMemorySessionRepository;

    #[tokio::test]
    async fn test_create_and_resolve() {
        let manager = SessionManager::new(InMemorySessionRepository::new());
        let user = User::mock();

        let token = manager.create(&user).await.unwrap();
        let resolved = manager.resolve(&token).await.unwrap().unwrap();

        assert_eq!(resolved.user_id, user.id);
        assert_eq!(resolved.username, user.username);
    }

    #[tokio::test]
    async fn test_resolve_unknown_token_is_absent() {
        let manager = SessionManager::new(InMemorySessionRepository::new());
        assert!(manager.resolve("nosuchtoken").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_resolve_after_destroy_is_absent() {
        let manager = SessionManager::new(InMemorySessionRepository::new());
        let token = manager.create(&User::mock()).await.unwrap();

        manager.destroy(&token).await.unwrap();
        assert!(manager.resolve(&token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_destroy_is_idempotent() {
        let manager = SessionManager::new(InMemorySessionRepository::new());
        assert!(manager.destroy("neverexisted").await.is_ok());

        let token = manager.create(&User::mock()).await.unwrap();
        manager.destroy(&token).await.unwrap();
        assert!(manager.destroy(&token).await.is_ok());
    }

    #[tokio::test]
    async fn test_expired_session_resolves_absent_and_is_pruned() {
        // Negative lifetime means the session is born expired; no sleeping
        let repo = InMemorySessionRepository::new();
        let manager = SessionManager::with_lifetime(repo.clone(), Duration::hours(-1));

        let token = manager.create(&User::mock()).await.unwrap();
        assert!(manager.resolve(&token).await.unwrap().is_none());

        // Lazy destroy removed it from the store
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_sessions_per_user() {
        let manager = SessionManager::new(InMemorySessionRepository::new());
        let user = User::mock();

        let first = manager.create(&user).await.unwrap();
        let second = manager.create(&user).await.unwrap();
        assert_ne!(first, second);

        // Logging in twice does not invalidate the earlier session
        assert!(manager.resolve(&first).await.unwrap().is_some());
        assert!(manager.resolve(&second).await.unwrap().is_some());
    }
}
