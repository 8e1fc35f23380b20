use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::AppError;

/// Locally persisted copy of externally-sourced recipe metadata, keyed by
/// the external catalog's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedRecipe {
    pub recipe_id: String,
    pub title: String,
    pub image_url: Option<String>,
}

/// De-duplicated storage of catalog metadata.
///
/// Rows are written idempotently the first time any user favorites a recipe
/// and never deleted by this crate; favorite removal must not cascade since
/// other users may still reference the row.
#[async_trait]
pub trait RecipeCacheRepository: Send + Sync {
    /// Insert-or-update keyed by `recipe_id`. Concurrent upserts for the
    /// same id must not conflict or duplicate; last-writer-wins on
    /// title/image is acceptable.
    async fn upsert(
        &self,
        recipe_id: &str,
        title: &str,
        image_url: Option<&str>,
    ) -> Result<(), AppError>;

    async fn find(&self, recipe_id: &str) -> Result<Option<CachedRecipe>, AppError>;
}
