//! Repository traits and data types.
//!
//! Storage abstractions for the three persistent collections. Implement
//! these traits to use your own database backend; the `postgres` feature
//! ships sqlx implementations and the `mocks` feature ships in-memory ones.
//!
//! # Traits
//!
//! | Trait | Description |
//! |-------|-------------|
//! | [`UserRepository`] | Account lookup and creation |
//! | [`RecipeCacheRepository`] | De-duplicated external recipe metadata |
//! | [`FavoriteRepository`] | The per-user favorites ledger |
//!
//! All shared mutable state lives behind these traits; no other code path
//! touches the store, which is what keeps the ownership invariant
//! enforceable in one place.

mod favorite;
mod recipe;
mod user;

#[cfg(any(test, feature = "mocks"))]
mod favorite_mock;
#[cfg(any(test, feature = "mocks"))]
mod recipe_mock;
#[cfg(any(test, feature = "mocks"))]
mod user_mock;

pub use favorite::FavoriteRecipe;
pub use favorite::FavoriteRepository;
pub use recipe::CachedRecipe;
pub use recipe::RecipeCacheRepository;
pub use user::User;
pub use user::UserRepository;

#[cfg(any(test, feature = "mocks"))]
pub use favorite_mock::MockFavoriteRepository;
#[cfg(any(test, feature = "mocks"))]
pub use recipe_mock::MockRecipeCacheRepository;
#[cfg(any(test, feature = "mocks"))]
pub use user_mock::MockUserRepository;
