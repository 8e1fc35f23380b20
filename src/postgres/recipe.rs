use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::{AppError, CachedRecipe, RecipeCacheRepository};

use super::storage_error;

#[derive(Clone)]
pub struct PostgresRecipeCacheRepository {
    pool: PgPool,
}

impl PostgresRecipeCacheRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct RecipeRecord {
    recipe_id: String,
    title: String,
    image_url: Option<String>,
}

impl From<RecipeRecord> for CachedRecipe {
    fn from(row: RecipeRecord) -> Self {
        CachedRecipe {
            recipe_id: row.recipe_id,
            title: row.title,
            image_url: row.image_url,
        }
    }
}

#[async_trait]
impl RecipeCacheRepository for PostgresRecipeCacheRepository {
    async fn upsert(
        &self,
        recipe_id: &str,
        title: &str,
        image_url: Option<&str>,
    ) -> Result<(), AppError> {
        // Concurrent upserts for the same id resolve in the store;
        // last writer wins on metadata.
        sqlx::query(
            "INSERT INTO recipes (recipe_id, title, image_url) VALUES ($1, $2, $3) \
             ON CONFLICT (recipe_id) DO UPDATE SET title = $2, image_url = $3",
        )
        .bind(recipe_id)
        .bind(title)
        .bind(image_url)
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(())
    }

    async fn find(&self, recipe_id: &str) -> Result<Option<CachedRecipe>, AppError> {
        let row: Option<RecipeRecord> =
            sqlx::query_as("SELECT recipe_id, title, image_url FROM recipes WHERE recipe_id = $1")
                .bind(recipe_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(storage_error)?;

        Ok(row.map(Into::into))
    }
}
