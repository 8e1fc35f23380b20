use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::AppError;

/// A favorites row joined against the catalog cache, ready for
/// presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRecipe {
    pub recipe_id: String,
    pub title: String,
    pub image_url: Option<String>,
}

/// The authoritative set of (user, recipe) favorite associations.
///
/// At most one row exists per (user_id, recipe_id) pair, enforced by the
/// store's composite uniqueness rather than application pre-checks. Every
/// operation is scoped to a single user_id; the caller is responsible for
/// passing only the authenticated identity here.
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Idempotent: re-adding an existing pair is a no-op, not an error.
    async fn add(&self, user_id: i32, recipe_id: &str) -> Result<(), AppError>;

    /// Deletes only the row matching both user_id and recipe_id. Removing a
    /// non-existent favorite is a silent no-op.
    async fn remove(&self, user_id: i32, recipe_id: &str) -> Result<(), AppError>;

    /// Ledger rows for one user joined against the catalog cache, in
    /// insertion order.
    async fn list_for_user(&self, user_id: i32) -> Result<Vec<FavoriteRecipe>, AppError>;
}
