#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::AppError;

use super::recipe::{CachedRecipe, RecipeCacheRepository};

#[derive(Clone)]
pub struct MockRecipeCacheRepository {
    pub recipes: Arc<Mutex<Vec<CachedRecipe>>>,
}

impl MockRecipeCacheRepository {
    pub fn new() -> Self {
        Self {
            recipes: Arc::new(Mutex::new(vec![])),
        }
    }
}

impl Default for MockRecipeCacheRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeCacheRepository for MockRecipeCacheRepository {
    async fn upsert(
        &self,
        recipe_id: &str,
        title: &str,
        image_url: Option<&str>,
    ) -> Result<(), AppError> {
        let mut recipes = self.recipes.lock().unwrap();

        if let Some(existing) = recipes.iter_mut().find(|r| r.recipe_id == recipe_id) {
            title.clone_into(&mut existing.title);
            existing.image_url = image_url.map(ToOwned::to_owned);
        } else {
            recipes.push(CachedRecipe {
                recipe_id: recipe_id.to_owned(),
                title: title.to_owned(),
                image_url: image_url.map(ToOwned::to_owned),
            });
        }

        Ok(())
    }

    async fn find(&self, recipe_id: &str) -> Result<Option<CachedRecipe>, AppError> {
        let recipes = self.recipes.lock().unwrap();
        Ok(recipes.iter().find(|r| r.recipe_id == recipe_id).cloned())
    }
}
