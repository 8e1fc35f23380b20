//! Session-authenticated favorites for an external recipe catalog.
//!
//! The crate covers the part of a recipe application with actual invariants
//! to protect: which user may view, add, or remove which favorite records,
//! and how anonymous vs. authenticated access is enforced. Everything else
//! (rendering, the catalog proxy call) is thin glue around these components.
//!
//! # Components
//!
//! | Module | Role |
//! |--------|------|
//! | [`repository`] | Storage traits: users, cached recipes, favorites |
//! | [`session`] | Opaque-token sessions, signed cookies, the authorization gate |
//! | [`actions`] | One struct per business operation (register, login, add favorite, ...) |
//! | [`catalog`] | External recipe catalog client |
//! | [`postgres`] | sqlx-backed repository implementations (`postgres` feature) |
//! | [`api`] | Axum routes, handlers and the session extractor (`axum_api` feature) |

pub mod actions;
pub mod api;
pub mod catalog;
pub mod config;
pub mod crypto;
pub mod repository;
pub mod session;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use repository::CachedRecipe;
pub use repository::FavoriteRecipe;
pub use repository::FavoriteRepository;
pub use repository::RecipeCacheRepository;
pub use repository::User;
pub use repository::UserRepository;
pub use session::SessionManager;
pub use session::SessionRepository;

#[cfg(any(test, feature = "mocks"))]
pub use repository::MockFavoriteRepository;
#[cfg(any(test, feature = "mocks"))]
pub use repository::MockRecipeCacheRepository;
#[cfg(any(test, feature = "mocks"))]
pub use repository::MockUserRepository;

use std::fmt;

/// Errors surfaced by the core components.
///
/// All of these are recovered at the request boundary into a user-facing
/// message; none is process-fatal. [`AppError::Storage`] is the only kind
/// that indicates an infrastructure problem rather than a user input
/// problem, and the only one logged for operators.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Registration with a username that already exists.
    DuplicateUsername,
    /// Login failure. Deliberately covers both unknown-username and
    /// wrong-password so the two are indistinguishable to the caller.
    InvalidCredentials,
    /// A protected operation was attempted without a valid session. The
    /// browser-facing surface renders this as a redirect to the login
    /// entry point rather than a bare 401.
    Unauthenticated,
    /// The external recipe catalog could not be reached or answered with
    /// garbage. Degrades to an empty-result presentation upstream.
    CatalogUnavailable,
    /// Hashing or parsing a password hash failed. Not a wrong-password
    /// outcome; that is [`AppError::InvalidCredentials`].
    PasswordHashError,
    /// Generic persistence failure (connectivity loss, constraint the
    /// caller cannot fix). Never retried inside the core.
    Storage(String),
}

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DuplicateUsername => write!(f, "Username already taken"),
            AppError::InvalidCredentials => write!(f, "Invalid username or password"),
            AppError::Unauthenticated => write!(f, "Authentication required"),
            AppError::CatalogUnavailable => write!(f, "Recipe catalog unavailable"),
            AppError::PasswordHashError => write!(f, "Failed to hash password"),
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}
