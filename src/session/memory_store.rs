//! In-memory session storage.
//!
//! Suitable for tests and single-instance development runs. Sessions are
//! lost when the process restarts; production uses the Postgres store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::crypto::{generate_token, DEFAULT_TOKEN_LENGTH};
use crate::AppError;

use super::repository::SessionRepository;
use super::{Session, SessionData};

#[derive(Clone)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<String, SessionData>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.read().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn create(&self, data: SessionData) -> Result<String, AppError> {
        let token = generate_token(DEFAULT_TOKEN_LENGTH);

        self.sessions
            .write()
            .map_err(|_| AppError::Storage("Lock poisoned".to_owned()))?
            .insert(token.clone(), data);

        Ok(token)
    }

    async fn find(&self, token: &str) -> Result<Option<Session>, AppError> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| AppError::Storage("Lock poisoned".to_owned()))?;

        Ok(sessions.get(token).map(|data| Session {
            token: token.to_owned(),
            data: data.clone(),
        }))
    }

    async fn destroy(&self, token: &str) -> Result<(), AppError> {
        self.sessions
            .write()
            .map_err(|_| AppError::Storage("Lock poisoned".to_owned()))?
            .remove(token);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    fn test_session_data(user_id: i32) -> SessionData {
        SessionData {
            user_id,
            username: format!("user{user_id}"),
            created_at: Utc::now(),
            expires_at: Utc::now() + Duration::hours(24),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemorySessionRepository::new();

        let token = repo.create(test_session_data(1)).await.unwrap();
        assert_eq!(token.len(), DEFAULT_TOKEN_LENGTH);

        let session = repo.find(&token).await.unwrap().unwrap();
        assert_eq!(session.token, token);
        assert_eq!(session.data.user_id, 1);
    }

    #[tokio::test]
    async fn test_find_nonexistent() {
        let repo = InMemorySessionRepository::new();
        assert!(repo.find("nonexistent").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_destroy() {
        let repo = InMemorySessionRepository::new();

        let token = repo.create(test_session_data(1)).await.unwrap();
        repo.destroy(&token).await.unwrap();

        assert!(repo.is_empty());
        assert!(repo.find(&token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_tokens_are_independent() {
        let repo = InMemorySessionRepository::new();

        let first = repo.create(test_session_data(1)).await.unwrap();
        let second = repo.create(test_session_data(1)).await.unwrap();

        repo.destroy(&first).await.unwrap();

        assert!(repo.find(&first).await.unwrap().is_none());
        assert!(repo.find(&second).await.unwrap().is_some());
    }
}
