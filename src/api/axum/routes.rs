use axum::routing::{get, post};
use axum::Router;

use super::handlers;
use crate::catalog::RecipeCatalog;
use crate::session::{SessionConfig, SessionRepository};
use crate::{FavoriteRepository, RecipeCacheRepository, UserRepository};

#[derive(Clone)]
pub struct AppState<U, S, C, F, G> {
    pub user_repo: U,
    pub session_repo: S,
    pub recipe_cache: C,
    pub favorites: F,
    pub catalog: G,
    pub session_config: SessionConfig,
}

/// The full route surface: anonymous routes plus the gated favorites
/// routes.
pub fn app_routes<U, S, C, F, G>() -> Router<AppState<U, S, C, F, G>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
    C: RecipeCacheRepository + Clone + Send + Sync + 'static,
    F: FavoriteRepository + Clone + Send + Sync + 'static,
    G: RecipeCatalog + Clone + Send + Sync + 'static,
{
    Router::new().merge(public_routes()).merge(private_routes())
}

/// Routes that accept anonymous traffic: home, search, recipe detail,
/// and the auth entry points themselves.
pub fn public_routes<U, S, C, F, G>() -> Router<AppState<U, S, C, F, G>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
    C: RecipeCacheRepository + Clone + Send + Sync + 'static,
    F: FavoriteRepository + Clone + Send + Sync + 'static,
    G: RecipeCatalog + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(handlers::home::<U, S, C, F, G>))
        .route("/register", post(handlers::register::<U, S, C, F, G>))
        .route("/login", post(handlers::login::<U, S, C, F, G>))
        .route("/logout", post(handlers::logout::<U, S, C, F, G>))
        .route("/search", post(handlers::search::<U, S, C, F, G>))
        .route(
            "/recipe/{id}",
            get(handlers::recipe_detail::<U, S, C, F, G>),
        )
}

/// Favorite-viewing and favorite-mutating routes, all behind the gate.
pub fn private_routes<U, S, C, F, G>() -> Router<AppState<U, S, C, F, G>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
    C: RecipeCacheRepository + Clone + Send + Sync + 'static,
    F: FavoriteRepository + Clone + Send + Sync + 'static,
    G: RecipeCatalog + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/favorites", get(handlers::list_favorites::<U, S, C, F, G>))
        .route("/favorite/{id}", post(handlers::add_favorite::<U, S, C, F, G>))
        .route(
            "/favorites/remove/{id}",
            post(handlers::remove_favorite::<U, S, C, F, G>),
        )
}
