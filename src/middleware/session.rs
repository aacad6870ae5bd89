//! Type-safe session access.
//!
//! The external auth collaborator performs the OAuth flow and writes the
//! authenticated login into the session; this wrapper is the single place
//! that knows the session key, so the rest of the crate never touches raw
//! session strings.

use tower_sessions::Session;

use crate::error::AppError;

const SESSION_AUTH_LOGIN: &str = "auth:login";

/// Authentication session management.
///
/// Wraps the tower-sessions `Session` and exposes only the authentication
/// concern: storing and reading the authenticated login.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the authenticated login in the session.
    ///
    /// Called by the external auth collaborator after a successful login.
    ///
    /// # Returns
    /// - `Ok(())` - Login successfully stored
    /// - `Err(AppError::SessionErr)` - Failed to store in session
    pub async fn set_login(&self, login: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_LOGIN, login).await?;
        Ok(())
    }

    /// Retrieves the authenticated login from the session.
    ///
    /// # Returns
    /// - `Ok(Some(login))` - User is logged in
    /// - `Ok(None)` - No login in session (not logged in)
    /// - `Err(AppError::SessionErr)` - Failed to access session
    pub async fn login(&self) -> Result<Option<String>, AppError> {
        let login = self.session.get::<String>(SESSION_AUTH_LOGIN).await?;
        Ok(login)
    }

    /// Clears all data from the session. Used during logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
