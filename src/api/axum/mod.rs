//! Axum routes, handlers and the session extractor.

mod error;
pub mod handlers;
mod middleware;
mod routes;

pub use error::ApiError;
pub use middleware::{CurrentUser, MaybeUser};
pub use routes::{app_routes, private_routes, public_routes, AppState};
