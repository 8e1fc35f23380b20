//! Postgres repository implementations backed by sqlx.
//!
//! Every repository takes a `PgPool` at construction; correctness under
//! concurrent requests comes from the schema's constraints (unique
//! username, composite favorites key) and `ON CONFLICT` clauses, never
//! from application-level pre-checks.

mod favorite;
pub mod migrations;
mod recipe;
mod session;
mod user;

pub use favorite::PostgresFavoriteRepository;
pub use recipe::PostgresRecipeCacheRepository;
pub use session::PostgresSessionRepository;
pub use user::PostgresUserRepository;

use sqlx::PgPool;

use crate::AppError;

pub(crate) fn storage_error(e: sqlx::Error) -> AppError {
    AppError::Storage(e.to_string())
}

/// Creates all Postgres repository instances from a connection pool.
pub fn create_repositories(
    pool: PgPool,
) -> (
    PostgresUserRepository,
    PostgresSessionRepository,
    PostgresRecipeCacheRepository,
    PostgresFavoriteRepository,
) {
    (
        PostgresUserRepository::new(pool.clone()),
        PostgresSessionRepository::new(pool.clone()),
        PostgresRecipeCacheRepository::new(pool.clone()),
        PostgresFavoriteRepository::new(pool),
    )
}
