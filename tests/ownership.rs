//! Ownership and isolation properties of the favorites core.
//!
//! These exercise the guarantees the subsystem exists to enforce, against
//! the in-memory repositories. No HTTP, no database.
//! Run with: `cargo test --features mocks --test ownership`

#![cfg(feature = "mocks")]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use cookmark::actions::{LoginAction, RegisterAction};
use cookmark::crypto::Argon2Hasher;
use cookmark::session::{InMemorySessionRepository, SessionManager};
use cookmark::{
    AppError, FavoriteRepository, MockFavoriteRepository, MockRecipeCacheRepository,
    MockUserRepository, RecipeCacheRepository,
};

fn ledger() -> (MockRecipeCacheRepository, MockFavoriteRepository) {
    let cache = MockRecipeCacheRepository::new();
    let favorites = MockFavoriteRepository::with_cache(&cache);
    (cache, favorites)
}

// =============================================================================
// Favorites isolation
// =============================================================================

#[tokio::test]
async fn favorite_of_one_user_never_appears_for_another() {
    let (cache, favorites) = ledger();
    cache.upsert("556", "Pasta", None).await.unwrap();

    favorites.add(1, "556").await.unwrap();

    assert_eq!(favorites.list_for_user(1).await.unwrap().len(), 1);
    assert!(favorites.list_for_user(2).await.unwrap().is_empty());

    // B sees it only after favoriting independently
    favorites.add(2, "556").await.unwrap();
    assert_eq!(favorites.list_for_user(2).await.unwrap().len(), 1);
}

#[tokio::test]
async fn adding_twice_produces_exactly_one_row() {
    let (cache, favorites) = ledger();
    cache.upsert("556", "Pasta", None).await.unwrap();

    favorites.add(1, "556").await.unwrap();
    favorites.add(1, "556").await.unwrap();

    assert_eq!(favorites.pairs.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn removing_nonexistent_favorite_is_silent() {
    let (_, favorites) = ledger();

    assert!(favorites.remove(1, "556").await.is_ok());
    assert!(favorites.pairs.lock().unwrap().is_empty());
}

#[tokio::test]
async fn removing_own_favorite_leaves_other_users_row() {
    let (cache, favorites) = ledger();
    cache.upsert("556", "Pasta", None).await.unwrap();

    favorites.add(1, "556").await.unwrap();
    favorites.add(2, "556").await.unwrap();

    favorites.remove(1, "556").await.unwrap();

    assert!(favorites.list_for_user(1).await.unwrap().is_empty());
    assert_eq!(favorites.list_for_user(2).await.unwrap().len(), 1);
}

#[tokio::test]
async fn removal_does_not_cascade_into_the_catalog_cache() {
    let (cache, favorites) = ledger();
    cache.upsert("556", "Pasta", None).await.unwrap();

    favorites.add(1, "556").await.unwrap();
    favorites.remove(1, "556").await.unwrap();

    // The cached recipe survives; other users may still reference it
    assert!(cache.find("556").await.unwrap().is_some());
}

// =============================================================================
// Credential store
// =============================================================================

#[tokio::test]
async fn duplicate_registration_fails_second_time() {
    let users = MockUserRepository::new();
    let register = RegisterAction::new(users, Argon2Hasher::default());

    register.execute("alice", "pw1").await.unwrap();
    let second = register.execute("alice", "pw2").await;

    assert_eq!(second.unwrap_err(), AppError::DuplicateUsername);
}

#[tokio::test]
async fn credential_failures_are_indistinguishable() {
    let users = MockUserRepository::new();
    RegisterAction::new(users.clone(), Argon2Hasher::default())
        .execute("alice", "pw1")
        .await
        .unwrap();

    let login = LoginAction::new(users, Argon2Hasher::default());

    let wrong_password = login.execute("alice", "wrong").await.unwrap_err();
    let unknown_user = login.execute("nobody", "pw1").await.unwrap_err();

    assert_eq!(wrong_password, AppError::InvalidCredentials);
    assert_eq!(unknown_user, AppError::InvalidCredentials);
}

// =============================================================================
// Sessions
// =============================================================================

#[tokio::test]
async fn destroyed_session_resolves_absent() {
    let users = MockUserRepository::new();
    let user = RegisterAction::new(users, Argon2Hasher::default())
        .execute("alice", "pw1")
        .await
        .unwrap();

    let manager = SessionManager::new(InMemorySessionRepository::new());
    let token = manager.create(&user).await.unwrap();

    assert!(manager.resolve(&token).await.unwrap().is_some());
    manager.destroy(&token).await.unwrap();
    assert!(manager.resolve(&token).await.unwrap().is_none());
}

// =============================================================================
// Full lifecycle
// =============================================================================

#[tokio::test]
async fn register_login_favorite_unfavorite_roundtrip() {
    let users = MockUserRepository::new();
    let (cache, favorites) = ledger();
    let sessions = SessionManager::new(InMemorySessionRepository::new());

    let alice = RegisterAction::new(users.clone(), Argon2Hasher::default())
        .execute("alice", "pw1")
        .await
        .unwrap();

    let logged_in = LoginAction::new(users, Argon2Hasher::default())
        .execute("alice", "pw1")
        .await
        .unwrap();
    let token = sessions.create(&logged_in).await.unwrap();
    let identity = sessions.resolve(&token).await.unwrap().unwrap();
    assert_eq!(identity.user_id, alice.id);

    cache.upsert("556", "Pasta", None).await.unwrap();
    favorites.add(identity.user_id, "556").await.unwrap();

    let listed = favorites.list_for_user(identity.user_id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].recipe_id, "556");
    assert_eq!(listed[0].title, "Pasta");

    favorites.remove(identity.user_id, "556").await.unwrap();
    assert!(favorites
        .list_for_user(identity.user_id)
        .await
        .unwrap()
        .is_empty());
}
