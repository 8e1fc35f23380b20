use crate::{AppError, FavoriteRepository, RecipeCacheRepository};

/// Favorites a recipe for a user.
///
/// Catalog metadata (title, image) arrives from the caller, is upserted
/// into the cache, then a ledger row links the user to the recipe id. Both
/// halves are idempotent, so re-favoriting is a no-op end to end.
pub struct AddFavoriteAction<C, F> {
    recipe_cache: C,
    favorites: F,
}

impl<C: RecipeCacheRepository, F: FavoriteRepository> AddFavoriteAction<C, F> {
    pub fn new(recipe_cache: C, favorites: F) -> Self {
        AddFavoriteAction {
            recipe_cache,
            favorites,
        }
    }

    /// `user_id` must be the session's authenticated identity; nothing
    /// downstream re-checks it.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "add_favorite", skip(self, title, image_url), err)
    )]
    pub async fn execute(
        &self,
        user_id: i32,
        recipe_id: &str,
        title: &str,
        image_url: Option<&str>,
    ) -> Result<(), AppError> {
        self.recipe_cache.upsert(recipe_id, title, image_url).await?;
        self.favorites.add(user_id, recipe_id).await?;

        log::info!(
            target: "cookmark::favorites",
            "msg=\"favorite added\" user_id={} recipe_id={}",
            user_id,
            recipe_id
        );

        Ok(())
    }
}
