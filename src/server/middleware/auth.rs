use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

pub struct AuthGuard<'a> {
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Requires a logged-in user.
    ///
    /// Guild ownership is checked by the services that need it, since it depends on the
    /// guild being accessed.
    ///
    /// # Returns
    /// - `Ok(user_id)` - Discord ID of the logged-in user
    /// - `Err(AppError::AuthErr(AuthError::UserNotInSession))` - Nobody is logged in
    pub async fn require_user(&self) -> Result<u64, AppError> {
        AuthSession::new(self.session)
            .get_user_id()
            .await?
            .ok_or_else(|| AuthError::UserNotInSession.into())
    }
}
