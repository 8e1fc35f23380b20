//! External recipe catalog client.
//!
//! The catalog is a collaborator, not a component: this crate only needs
//! search results and per-recipe metadata from it, and every failure must
//! degrade to an empty-result or error-message presentation, never a crash.

#[cfg(feature = "catalog_http")]
mod http;

#[cfg(feature = "catalog_http")]
pub use http::HttpRecipeCatalog;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::AppError;

/// One search hit: just enough to render a result card and favorite it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub image: Option<String>,
}

/// Full detail payload for a single recipe page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDetail {
    pub id: String,
    pub title: String,
    pub image: Option<String>,
    pub summary: Option<String>,
    pub source_url: Option<String>,
}

#[async_trait]
pub trait RecipeCatalog: Send + Sync {
    /// Free-text search against the catalog.
    ///
    /// # Errors
    ///
    /// `AppError::CatalogUnavailable` when the catalog cannot be reached or
    /// answers with an unparseable body.
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, AppError>;

    /// Looks up one recipe by the catalog's id. `None` for unknown ids.
    async fn find(&self, recipe_id: &str) -> Result<Option<RecipeDetail>, AppError>;
}

/// Canned catalog for tests.
#[cfg(any(test, feature = "mocks"))]
#[derive(Clone, Default)]
pub struct MockRecipeCatalog {
    pub recipes: std::sync::Arc<std::sync::Mutex<Vec<RecipeDetail>>>,
    /// When set, every call fails with `CatalogUnavailable`.
    pub unavailable: bool,
}

#[cfg(any(test, feature = "mocks"))]
impl MockRecipeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recipes(recipes: Vec<RecipeDetail>) -> Self {
        Self {
            recipes: std::sync::Arc::new(std::sync::Mutex::new(recipes)),
            unavailable: false,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }
}

#[cfg(any(test, feature = "mocks"))]
#[async_trait]
impl RecipeCatalog for MockRecipeCatalog {
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, AppError> {
        if self.unavailable {
            return Err(AppError::CatalogUnavailable);
        }

        #[allow(clippy::unwrap_used)]
        let recipes = self.recipes.lock().unwrap();
        let query = query.to_lowercase();
        Ok(recipes
            .iter()
            .filter(|r| r.title.to_lowercase().contains(&query))
            .map(|r| RecipeSummary {
                id: r.id.clone(),
                title: r.title.clone(),
                image: r.image.clone(),
            })
            .collect())
    }

    async fn find(&self, recipe_id: &str) -> Result<Option<RecipeDetail>, AppError> {
        if self.unavailable {
            return Err(AppError::CatalogUnavailable);
        }

        #[allow(clippy::unwrap_used)]
        let recipes = self.recipes.lock().unwrap();
        Ok(recipes.iter().find(|r| r.id == recipe_id).cloned())
    }
}
