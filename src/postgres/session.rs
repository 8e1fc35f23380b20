use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::crypto::{generate_token, hash_token, DEFAULT_TOKEN_LENGTH};
use crate::session::{Session, SessionData, SessionRepository};
use crate::AppError;

use super::storage_error;

/// Sessions at rest are keyed by the SHA-256 hash of the opaque token, so a
/// leaked table does not yield usable credentials.
#[derive(Clone)]
pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct SessionRecord {
    user_id: i32,
    username: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn create(&self, data: SessionData) -> Result<String, AppError> {
        let token = generate_token(DEFAULT_TOKEN_LENGTH);

        sqlx::query(
            "INSERT INTO sessions (token_hash, user_id, username, created_at, expires_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(hash_token(&token))
        .bind(data.user_id)
        .bind(&data.username)
        .bind(data.created_at)
        .bind(data.expires_at)
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(token)
    }

    async fn find(&self, token: &str) -> Result<Option<Session>, AppError> {
        let row: Option<SessionRecord> = sqlx::query_as(
            "SELECT user_id, username, created_at, expires_at FROM sessions \
             WHERE token_hash = $1",
        )
        .bind(hash_token(token))
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(row.map(|r| {
            Session::new(
                token.to_owned(),
                SessionData {
                    user_id: r.user_id,
                    username: r.username,
                    created_at: r.created_at,
                    expires_at: r.expires_at,
                },
            )
        }))
    }

    async fn destroy(&self, token: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM sessions WHERE token_hash = $1")
            .bind(hash_token(token))
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(())
    }
}
