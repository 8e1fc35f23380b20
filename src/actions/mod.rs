//! Business operations, one struct per action.
//!
//! Actions are generic over the repository traits so they run unchanged
//! against Postgres or the in-memory mocks. Each owns its dependencies and
//! exposes a single `execute`.

mod add_favorite;
mod list_favorites;
mod login;
mod logout;
mod register;
mod remove_favorite;

pub use add_favorite::AddFavoriteAction;
pub use list_favorites::ListFavoritesAction;
pub use login::LoginAction;
pub use logout::LogoutAction;
pub use register::RegisterAction;
pub use remove_favorite::RemoveFavoriteAction;
