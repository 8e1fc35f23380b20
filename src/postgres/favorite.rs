use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::{AppError, FavoriteRecipe, FavoriteRepository};

use super::storage_error;

#[derive(Clone)]
pub struct PostgresFavoriteRepository {
    pool: PgPool,
}

impl PostgresFavoriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct FavoriteRecord {
    recipe_id: String,
    title: String,
    image_url: Option<String>,
}

#[async_trait]
impl FavoriteRepository for PostgresFavoriteRepository {
    async fn add(&self, user_id: i32, recipe_id: &str) -> Result<(), AppError> {
        // The composite primary key makes re-adding a no-op, not an error
        sqlx::query(
            "INSERT INTO favorites (user_id, recipe_id) VALUES ($1, $2) \
             ON CONFLICT (user_id, recipe_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(recipe_id)
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(())
    }

    async fn remove(&self, user_id: i32, recipe_id: &str) -> Result<(), AppError> {
        // Binds both key halves: only the caller's own row can go away
        sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND recipe_id = $2")
            .bind(user_id)
            .bind(recipe_id)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(())
    }

    async fn list_for_user(&self, user_id: i32) -> Result<Vec<FavoriteRecipe>, AppError> {
        let rows: Vec<FavoriteRecord> = sqlx::query_as(
            "SELECT f.recipe_id, r.title, r.image_url \
             FROM favorites f \
             JOIN recipes r ON r.recipe_id = f.recipe_id \
             WHERE f.user_id = $1 \
             ORDER BY f.created_at",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(rows
            .into_iter()
            .map(|row| FavoriteRecipe {
                recipe_id: row.recipe_id,
                title: row.title,
                image_url: row.image_url,
            })
            .collect())
    }
}
