use crate::session::SessionRepository;
use crate::AppError;

pub struct LogoutAction<S> {
    session_repository: S,
}

impl<S: SessionRepository> LogoutAction<S> {
    pub fn new(session_repository: S) -> Self {
        LogoutAction { session_repository }
    }

    /// Destroys the session unconditionally. Logging out with an already
    /// absent token is not an error.
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "logout", skip_all, err))]
    pub async fn execute(&self, token: &str) -> Result<(), AppError> {
        self.session_repository.destroy(token).await?;

        log::info!(target: "cookmark::auth", "msg=\"logout success\"");

        Ok(())
    }
}
