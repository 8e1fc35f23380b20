use crate::crypto::PasswordHasher;
use crate::{AppError, User, UserRepository};

pub struct LoginAction<U, H> {
    user_repository: U,
    hasher: H,
}

impl<U: UserRepository, H: PasswordHasher> LoginAction<U, H> {
    pub fn new(user_repository: U, hasher: H) -> Self {
        LoginAction {
            user_repository,
            hasher,
        }
    }

    /// Verifies credentials and returns the account.
    ///
    /// Unknown username and wrong password both yield
    /// [`AppError::InvalidCredentials`]; nothing observable distinguishes
    /// the two, so usernames cannot be enumerated through this path.
    /// Session creation is the caller's job (see
    /// [`SessionManager`](crate::SessionManager)).
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "login", skip_all))]
    pub async fn execute(&self, username: &str, password: &str) -> Result<User, AppError> {
        if let Some(user) = self.user_repository.find_user_by_username(username).await? {
            if self.hasher.verify(password, &user.hashed_password)? {
                log::info!(
                    target: "cookmark::auth",
                    "msg=\"login success\" user_id={}",
                    user.id
                );
                return Ok(user);
            }
        }

        log::info!(target: "cookmark::auth", "msg=\"login failed\"");
        Err(AppError::InvalidCredentials)
    }
}
