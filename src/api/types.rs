use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::RecipeSummary;
use crate::repository::{FavoriteRecipe, User};
use crate::AppError;

// Request DTOs

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

/// Catalog metadata echoed by the client when favoriting, exactly as the
/// search results delivered it. The recipe id rides in the path.
#[derive(Debug, Deserialize)]
pub struct FavoriteRequest {
    pub title: String,
    pub image: Option<String>,
}

// Response DTOs

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            username: user.username,
            created_at: user.created_at,
        }
    }
}

/// Session presence for pages anyone may view.
#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub username: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SessionUserResponse {
    pub user_id: i32,
    pub username: String,
}

/// Search outcome. A catalog failure degrades into an empty result list
/// plus a message, never an error status.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<RecipeSummary>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    pub favorites: Vec<FavoriteRecipe>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        ErrorResponse {
            error: err.to_string(),
        }
    }
}
