use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::{AppError, User, UserRepository};

use super::storage_error;

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRecord {
    id: i32,
    username: String,
    hashed_password: String,
    created_at: DateTime<Utc>,
}

impl From<UserRecord> for User {
    fn from(row: UserRecord) -> Self {
        User {
            id: row.id,
            username: row.username,
            hashed_password: row.hashed_password,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_user_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let row: Option<UserRecord> = sqlx::query_as(
            "SELECT id, username, hashed_password, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(row.map(Into::into))
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let row: Option<UserRecord> = sqlx::query_as(
            "SELECT id, username, hashed_password, created_at FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(row.map(Into::into))
    }

    async fn create_user(&self, username: &str, hashed_password: &str) -> Result<User, AppError> {
        let row: UserRecord = sqlx::query_as(
            "INSERT INTO users (username, hashed_password) VALUES ($1, $2) \
             RETURNING id, username, hashed_password, created_at",
        )
        .bind(username)
        .bind(hashed_password)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            // The unique constraint on username is the duplicate check;
            // a SELECT-first would race against concurrent registrations.
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::DuplicateUsername,
            _ => storage_error(e),
        })?;

        Ok(row.into())
    }
}
