//! Database migrations.
//!
//! Creates the four tables the crate owns: `users`, `recipes`, `favorites`
//! and `sessions`. Run once at startup before serving traffic.

use sqlx::PgPool;

pub async fn run(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
