use crate::{AppError, FavoriteRecipe, FavoriteRepository};

pub struct ListFavoritesAction<F> {
    favorites: F,
}

impl<F: FavoriteRepository> ListFavoritesAction<F> {
    pub fn new(favorites: F) -> Self {
        ListFavoritesAction { favorites }
    }

    /// Snapshot of the user's favorites joined against the catalog cache.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "list_favorites", skip(self), err)
    )]
    pub async fn execute(&self, user_id: i32) -> Result<Vec<FavoriteRecipe>, AppError> {
        self.favorites.list_for_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MockFavoriteRepository, MockRecipeCacheRepository, RecipeCacheRepository};

    #[tokio::test]
    async fn test_list_joins_against_cache() {
        let cache = MockRecipeCacheRepository::new();
        let repo = MockFavoriteRepository::with_cache(&cache);

        cache
            .upsert("556", "Pasta", Some("https://img.example/556.jpg"))
            .await
            .unwrap();
        repo.add(1, "556").await.unwrap();

        let rows = ListFavoritesAction::new(repo).execute(1).await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].recipe_id, "556");
        assert_eq!(rows[0].title, "Pasta");
        assert_eq!(
            rows[0].image_url.as_deref(),
            Some("https://img.example/556.jpg")
        );
    }

    #[tokio::test]
    async fn test_list_empty_for_user_without_favorites() {
        let rows = ListFavoritesAction::new(MockFavoriteRepository::new())
            .execute(42)
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_list_only_own_favorites() {
        let cache = MockRecipeCacheRepository::new();
        let repo = MockFavoriteRepository::with_cache(&cache);

        cache.upsert("556", "Pasta", None).await.unwrap();
        cache.upsert("789", "Soup", None).await.unwrap();
        repo.add(1, "556").await.unwrap();
        repo.add(2, "789").await.unwrap();

        let rows = ListFavoritesAction::new(repo).execute(1).await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].recipe_id, "556");
    }
}
