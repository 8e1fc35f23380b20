use crate::crypto::PasswordHasher;
use crate::{AppError, User, UserRepository};

pub struct RegisterAction<U, H> {
    user_repository: U,
    hasher: H,
}

impl<U: UserRepository, H: PasswordHasher> RegisterAction<U, H> {
    pub fn new(user_repository: U, hasher: H) -> Self {
        RegisterAction {
            user_repository,
            hasher,
        }
    }

    /// Creates an account with a salted slow hash of the password.
    ///
    /// Duplicate usernames come back as [`AppError::DuplicateUsername`] from
    /// the store's unique constraint. There is deliberately no existence
    /// pre-check here; check-then-insert races against concurrent
    /// registrations of the same name.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "register", skip_all, err)
    )]
    pub async fn execute(&self, username: &str, password: &str) -> Result<User, AppError> {
        let hashed = self.hasher.hash(password)?;
        let user = self.user_repository.create_user(username, &hashed).await?;

        log::info!(
            target: "cookmark::auth",
            "msg=\"user registered\" user_id={}",
            user.id
        );

        Ok(user)
    }
}
