use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No login stored in the session.
    ///
    /// The external auth collaborator has not written an identity into the
    /// session, so the caller is not logged in. Results in 401 Unauthorized.
    #[error("No authenticated login in session")]
    UserNotInSession,

    /// The session login no longer resolves to a user row.
    ///
    /// The session carries a login that does not exist in the database
    /// (e.g. stale session after the user row was removed). Results in
    /// 401 Unauthorized.
    #[error("Session login {0} does not resolve to a user")]
    UserNotInDatabase(String),

    /// The user lacks a required permission.
    ///
    /// Results in 403 Forbidden.
    #[error("User {0} denied access: {1}")]
    AccessDenied(String, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic; the full error is logged at debug
/// level for diagnostics.
///
/// # Returns
/// - 401 Unauthorized - Missing session identity or stale session login
/// - 403 Forbidden - Failed permission check
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Auth error: {}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not logged in".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Access denied".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
