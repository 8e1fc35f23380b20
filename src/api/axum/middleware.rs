//! The authorization gate as an Axum extractor.

use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect, Response};

use super::error::ApiError;
use super::routes::AppState;
use crate::session::{verify_signed_cookie, Gate, SessionData, SessionManager, SessionRepository};
use crate::AppError;

/// Requires an authenticated session.
///
/// Handlers taking this parameter are behind the gate: anonymous requests
/// short-circuit to the login entry point before any business logic runs,
/// so no partial writes can happen. The identity carried here is the only
/// user id favorite mutations may use.
#[derive(Debug, Clone)]
pub struct CurrentUser<S> {
    data: SessionData,
    _marker: PhantomData<S>,
}

impl<S> CurrentUser<S> {
    pub fn user_id(&self) -> i32 {
        self.data.user_id
    }

    pub fn username(&self) -> &str {
        &self.data.username
    }

    pub fn into_inner(self) -> SessionData {
        self.data
    }
}

/// Attaches the session identity when present, without gating.
///
/// For routes that accept anonymous traffic (home, search, detail) but
/// still want to show who is logged in.
#[derive(Debug, Clone)]
pub struct MaybeUser<S> {
    data: Option<SessionData>,
    _marker: PhantomData<S>,
}

impl<S> MaybeUser<S> {
    pub fn into_inner(self) -> Option<SessionData> {
        self.data
    }
}

/// Gate outcome for the extractor: either the redirect-equivalent or a
/// storage-level failure during resolution.
#[derive(Debug)]
pub enum AuthRejection {
    Redirect,
    Error(ApiError),
}

impl From<AppError> for AuthRejection {
    /// [`AppError::Unauthenticated`] renders as the login redirect on this
    /// browser-facing surface; every other error keeps its JSON status.
    fn from(err: AppError) -> Self {
        match err {
            AppError::Unauthenticated => AuthRejection::Redirect,
            other => AuthRejection::Error(ApiError(other)),
        }
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::Redirect => Redirect::to("/login").into_response(),
            AuthRejection::Error(err) => err.into_response(),
        }
    }
}

/// Extracts a named cookie from the Cookie header.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .map(str::trim)
        .find_map(|pair| {
            pair.strip_prefix(name)
                .and_then(|rest| rest.strip_prefix('='))
        })
        .map(ToOwned::to_owned)
}

async fn resolve_session<U, S, C, F, G>(
    headers: &HeaderMap,
    state: &AppState<U, S, C, F, G>,
) -> Result<Option<SessionData>, AppError>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let Some(cookie_value) = extract_cookie(headers, &state.session_config.cookie_name) else {
        return Ok(None);
    };

    // Tampered cookies never reach the store
    let Some(token) = verify_signed_cookie(&cookie_value, &state.session_config.secret_key) else {
        return Ok(None);
    };

    let manager = SessionManager::with_lifetime(
        state.session_repo.clone(),
        state.session_config.session_lifetime,
    );
    manager.resolve(&token).await
}

impl<U, S, C, F, G> FromRequestParts<AppState<U, S, C, F, G>> for CurrentUser<S>
where
    U: Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
    F: Clone + Send + Sync + 'static,
    G: Clone + Send + Sync + 'static,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<U, S, C, F, G>,
    ) -> Result<Self, Self::Rejection> {
        let resolved = resolve_session(&parts.headers, state)
            .await
            .map_err(AuthRejection::from)?;

        match Gate::from_resolved(resolved) {
            Gate::Authorized(data) => Ok(CurrentUser {
                data,
                _marker: PhantomData,
            }),
            Gate::Redirect => Err(AuthRejection::from(AppError::Unauthenticated)),
        }
    }
}

impl<U, S, C, F, G> FromRequestParts<AppState<U, S, C, F, G>> for MaybeUser<S>
where
    U: Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
    F: Clone + Send + Sync + 'static,
    G: Clone + Send + Sync + 'static,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<U, S, C, F, G>,
    ) -> Result<Self, Self::Rejection> {
        let data = resolve_session(&parts.headers, state)
            .await
            .map_err(ApiError)?;

        Ok(MaybeUser {
            data,
            _marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use axum::http::header::LOCATION;
    use axum::http::{HeaderValue, StatusCode};

    use super::*;

    #[test]
    fn test_extract_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("other=1; cookmark_session=abc.def; trailing=2"),
        );

        assert_eq!(
            extract_cookie(&headers, "cookmark_session"),
            Some("abc.def".to_owned())
        );
        assert_eq!(extract_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_extract_cookie_no_header() {
        assert_eq!(extract_cookie(&HeaderMap::new(), "cookmark_session"), None);
    }

    #[test]
    fn test_extract_cookie_prefix_name_does_not_match() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("cookmark_session_old=stale"),
        );

        assert_eq!(extract_cookie(&headers, "cookmark_session"), None);
    }

    #[test]
    fn test_unauthenticated_renders_as_login_redirect() {
        let response = AuthRejection::from(AppError::Unauthenticated).into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/login");
    }

    #[test]
    fn test_storage_failure_keeps_its_error_status() {
        let rejection = AuthRejection::from(AppError::Storage("pool exhausted".to_owned()));
        assert!(matches!(rejection, AuthRejection::Error(_)));

        let response = rejection.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
