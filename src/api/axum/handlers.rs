//! HTTP handlers.
//!
//! Handlers are glue: they translate between the wire and the actions, and
//! they own cookie delivery. The user id for every favorites operation
//! comes from [`CurrentUser`], never from the request.

use axum::extract::{Path, State};
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use super::error::ApiError;
use super::middleware::{extract_cookie, CurrentUser, MaybeUser};
use super::routes::AppState;
use crate::actions::{
    AddFavoriteAction, ListFavoritesAction, LoginAction, LogoutAction, RegisterAction,
    RemoveFavoriteAction,
};
use crate::api::{
    ErrorResponse, FavoriteRequest, FavoritesResponse, HomeResponse, LoginRequest,
    MessageResponse, RegisterRequest, SearchRequest, SearchResponse, SessionUserResponse,
    UserResponse,
};
use crate::catalog::RecipeCatalog;
use crate::crypto::Argon2Hasher;
use crate::session::{sign_session_token, SameSite, SessionConfig, SessionManager,
    SessionRepository};
use crate::{AppError, FavoriteRepository, RecipeCacheRepository, UserRepository};

fn build_session_cookie(signed_value: &str, config: &SessionConfig) -> String {
    let mut cookie = format!(
        "{}={}; Path={}; Max-Age={}",
        config.cookie_name,
        signed_value,
        config.cookie_path,
        config.session_lifetime.num_seconds()
    );

    if config.cookie_http_only {
        cookie.push_str("; HttpOnly");
    }
    if config.cookie_secure {
        cookie.push_str("; Secure");
    }
    cookie.push_str(match config.cookie_same_site {
        SameSite::None => "; SameSite=None",
        SameSite::Lax => "; SameSite=Lax",
        SameSite::Strict => "; SameSite=Strict",
    });

    cookie
}

fn build_removal_cookie(config: &SessionConfig) -> String {
    format!(
        "{}=; Path={}; Max-Age=0",
        config.cookie_name, config.cookie_path
    )
}

/// Session presence for the landing page; usable anonymously.
///
/// GET /
pub async fn home<U, S, C, F, G>(user: MaybeUser<S>) -> Json<HomeResponse>
where
    U: Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
    F: Clone + Send + Sync + 'static,
    G: Clone + Send + Sync + 'static,
{
    Json(HomeResponse {
        username: user.into_inner().map(|data| data.username),
    })
}

/// Create an account.
///
/// POST /register
pub async fn register<U, S, C, F, G>(
    State(state): State<AppState<U, S, C, F, G>>,
    Json(body): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    S: Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
    F: Clone + Send + Sync + 'static,
    G: Clone + Send + Sync + 'static,
{
    let action = RegisterAction::new(state.user_repo, Argon2Hasher::default());
    let user = action.execute(&body.username, &body.password).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Authenticate and start a session; the token travels back as a signed
/// cookie.
///
/// POST /login
pub async fn login<U, S, C, F, G>(
    State(state): State<AppState<U, S, C, F, G>>,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
    F: Clone + Send + Sync + 'static,
    G: Clone + Send + Sync + 'static,
{
    let action = LoginAction::new(state.user_repo, Argon2Hasher::default());
    let user = action.execute(&body.username, &body.password).await?;

    let manager = SessionManager::with_lifetime(
        state.session_repo,
        state.session_config.session_lifetime,
    );
    let token = manager.create(&user).await?;

    let signed = sign_session_token(&token, &state.session_config.secret_key);
    let cookie = build_session_cookie(&signed, &state.session_config);

    Ok((
        StatusCode::OK,
        [(SET_COOKIE, cookie)],
        Json(SessionUserResponse {
            user_id: user.id,
            username: user.username,
        }),
    ))
}

/// Destroy the session, if any, and clear the cookie. Not gated: logging
/// out an already-absent session is a no-op, so anonymous calls succeed.
///
/// POST /logout
pub async fn logout<U, S, C, F, G>(
    State(state): State<AppState<U, S, C, F, G>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError>
where
    U: Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
    F: Clone + Send + Sync + 'static,
    G: Clone + Send + Sync + 'static,
{
    let token = extract_cookie(&headers, &state.session_config.cookie_name)
        .and_then(|value| verify_cookie(&value, &state.session_config));

    if let Some(token) = token {
        LogoutAction::new(state.session_repo).execute(&token).await?;
    }

    Ok((
        StatusCode::OK,
        [(SET_COOKIE, build_removal_cookie(&state.session_config))],
        Json(MessageResponse {
            message: "logged out".to_owned(),
        }),
    ))
}

fn verify_cookie(value: &str, config: &SessionConfig) -> Option<String> {
    crate::session::verify_signed_cookie(value, &config.secret_key)
}

/// Proxy a search to the external catalog; usable anonymously. Catalog
/// failure degrades to an empty result list with a message.
///
/// POST /search
pub async fn search<U, S, C, F, G>(
    State(state): State<AppState<U, S, C, F, G>>,
    Json(body): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError>
where
    U: Clone + Send + Sync + 'static,
    S: Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
    F: Clone + Send + Sync + 'static,
    G: RecipeCatalog + Clone + Send + Sync + 'static,
{
    match state.catalog.search(&body.query).await {
        Ok(results) => Ok(Json(SearchResponse {
            results,
            message: None,
        })),
        Err(AppError::CatalogUnavailable) => Ok(Json(SearchResponse {
            results: vec![],
            message: Some("Error fetching recipes. Please try again later.".to_owned()),
        })),
        Err(err) => Err(ApiError(err)),
    }
}

/// Look up one recipe in the external catalog; usable anonymously.
///
/// GET /recipe/{id}
pub async fn recipe_detail<U, S, C, F, G>(
    State(state): State<AppState<U, S, C, F, G>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    U: Clone + Send + Sync + 'static,
    S: Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
    F: Clone + Send + Sync + 'static,
    G: RecipeCatalog + Clone + Send + Sync + 'static,
{
    match state.catalog.find(&id).await? {
        Some(detail) => Ok(Json(detail).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "recipe not found".to_owned(),
            }),
        )
            .into_response()),
    }
}

/// The current user's favorites.
///
/// GET /favorites
pub async fn list_favorites<U, S, C, F, G>(
    user: CurrentUser<S>,
    State(state): State<AppState<U, S, C, F, G>>,
) -> Result<Json<FavoritesResponse>, ApiError>
where
    U: Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
    F: FavoriteRepository + Clone + Send + Sync + 'static,
    G: Clone + Send + Sync + 'static,
{
    let favorites = ListFavoritesAction::new(state.favorites)
        .execute(user.user_id())
        .await?;

    Ok(Json(FavoritesResponse { favorites }))
}

/// Favorite a recipe for the current user.
///
/// POST /favorite/{id}
pub async fn add_favorite<U, S, C, F, G>(
    user: CurrentUser<S>,
    State(state): State<AppState<U, S, C, F, G>>,
    Path(id): Path<String>,
    Json(body): Json<FavoriteRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
    C: RecipeCacheRepository + Clone + Send + Sync + 'static,
    F: FavoriteRepository + Clone + Send + Sync + 'static,
    G: Clone + Send + Sync + 'static,
{
    AddFavoriteAction::new(state.recipe_cache, state.favorites)
        .execute(user.user_id(), &id, &body.title, body.image.as_deref())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "favorite added".to_owned(),
        }),
    ))
}

/// Remove the current user's favorite of a recipe.
///
/// POST /favorites/remove/{id}
pub async fn remove_favorite<U, S, C, F, G>(
    user: CurrentUser<S>,
    State(state): State<AppState<U, S, C, F, G>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    U: Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
    F: FavoriteRepository + Clone + Send + Sync + 'static,
    G: Clone + Send + Sync + 'static,
{
    RemoveFavoriteAction::new(state.favorites)
        .execute(user.user_id(), &id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "favorite removed".to_owned(),
        }),
    ))
}
