use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

pub enum Permission {
    Admin,
}

/// Resolves the caller from the session and enforces permissions.
///
/// The session login is trusted verbatim: it was written by the external
/// auth collaborator. The guard only checks that it still resolves to a
/// user row and that the row carries the required flags.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let auth_session = AuthSession::new(self.session);

        let Some(login) = auth_session.login().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_login(&login).await? else {
            return Err(AuthError::UserNotInDatabase(login).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.admin {
                        return Err(AuthError::AccessDenied(
                            login,
                            "endpoint requires the admin flag".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
