#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::AppError;

use super::favorite::{FavoriteRecipe, FavoriteRepository};
use super::recipe::CachedRecipe;
use super::recipe_mock::MockRecipeCacheRepository;

#[derive(Clone)]
pub struct MockFavoriteRepository {
    pub pairs: Arc<Mutex<Vec<(i32, String)>>>,
    /// Shared with the recipe-cache mock so `list_for_user` can join.
    pub recipes: Arc<Mutex<Vec<CachedRecipe>>>,
}

impl MockFavoriteRepository {
    /// Creates a ledger mock joined against the given cache mock's rows.
    pub fn with_cache(cache: &MockRecipeCacheRepository) -> Self {
        Self {
            pairs: Arc::new(Mutex::new(vec![])),
            recipes: Arc::clone(&cache.recipes),
        }
    }

    pub fn new() -> Self {
        Self {
            pairs: Arc::new(Mutex::new(vec![])),
            recipes: Arc::new(Mutex::new(vec![])),
        }
    }
}

impl Default for MockFavoriteRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FavoriteRepository for MockFavoriteRepository {
    async fn add(&self, user_id: i32, recipe_id: &str) -> Result<(), AppError> {
        let mut pairs = self.pairs.lock().unwrap();

        // Mirrors ON CONFLICT DO NOTHING on the composite key
        if !pairs.iter().any(|(u, r)| *u == user_id && r == recipe_id) {
            pairs.push((user_id, recipe_id.to_owned()));
        }

        Ok(())
    }

    async fn remove(&self, user_id: i32, recipe_id: &str) -> Result<(), AppError> {
        let mut pairs = self.pairs.lock().unwrap();
        pairs.retain(|(u, r)| !(*u == user_id && r == recipe_id));
        Ok(())
    }

    async fn list_for_user(&self, user_id: i32) -> Result<Vec<FavoriteRecipe>, AppError> {
        let pairs = self.pairs.lock().unwrap();
        let recipes = self.recipes.lock().unwrap();

        Ok(pairs
            .iter()
            .filter(|(u, _)| *u == user_id)
            .filter_map(|(_, recipe_id)| {
                recipes
                    .iter()
                    .find(|r| &r.recipe_id == recipe_id)
                    .map(|r| FavoriteRecipe {
                        recipe_id: r.recipe_id.clone(),
                        title: r.title.clone(),
                        image_url: r.image_url.clone(),
                    })
            })
            .collect())
    }
}
