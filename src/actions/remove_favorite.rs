use crate::{AppError, FavoriteRepository};

pub struct RemoveFavoriteAction<F> {
    favorites: F,
}

impl<F: FavoriteRepository> RemoveFavoriteAction<F> {
    pub fn new(favorites: F) -> Self {
        RemoveFavoriteAction { favorites }
    }

    /// Removes the user's own ledger row for the recipe, if any. Another
    /// user's favorite of the same recipe is untouched, and the cached
    /// recipe row stays (it may still be referenced).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "remove_favorite", skip(self), err)
    )]
    pub async fn execute(&self, user_id: i32, recipe_id: &str) -> Result<(), AppError> {
        self.favorites.remove(user_id, recipe_id).await?;

        log::info!(
            target: "cookmark::favorites",
            "msg=\"favorite removed\" user_id={} recipe_id={}",
            user_id,
            recipe_id
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockFavoriteRepository;

    #[tokio::test]
    async fn test_remove_existing() {
        let repo = MockFavoriteRepository::new();
        repo.add(1, "556").await.unwrap();

        RemoveFavoriteAction::new(repo.clone())
            .execute(1, "556")
            .await
            .unwrap();

        assert!(repo.pairs.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_nonexistent_is_silent_noop() {
        let repo = MockFavoriteRepository::new();

        let result = RemoveFavoriteAction::new(repo.clone()).execute(1, "556").await;

        assert!(result.is_ok());
        assert!(repo.pairs.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_never_touches_other_users_row() {
        let repo = MockFavoriteRepository::new();
        repo.add(1, "556").await.unwrap();
        repo.add(2, "556").await.unwrap();

        RemoveFavoriteAction::new(repo.clone())
            .execute(1, "556")
            .await
            .unwrap();

        let pairs = repo.pairs.lock().unwrap();
        assert_eq!(pairs.as_slice(), &[(2, "556".to_owned())]);
    }
}
