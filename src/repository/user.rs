use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(any(test, feature = "mocks"))]
impl User {
    pub fn mock() -> Self {
        User {
            id: 1,
            username: "testuser".to_owned(),
            hashed_password: "fakehashedpassword".to_owned(),
            created_at: Utc::now(),
        }
    }

    pub fn mock_from_credentials(username: &str, hashed_password: &str) -> Self {
        User {
            id: 1,
            username: username.to_owned(),
            hashed_password: hashed_password.to_owned(),
            created_at: Utc::now(),
        }
    }
}

/// Account storage.
///
/// `create_user` relies on the store's unique constraint on `username` and
/// maps its rejection to [`AppError::DuplicateUsername`]. Callers must not
/// pre-check for an existing name; a check-then-insert races against
/// concurrent registrations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_user_by_id(&self, id: i32) -> Result<Option<User>, AppError>;
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    async fn create_user(&self, username: &str, hashed_password: &str) -> Result<User, AppError>;
}
