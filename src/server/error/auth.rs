use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user is stored in the session.
    ///
    /// The request did not come from a logged-in dashboard user. Results in a
    /// 401 Unauthorized response.
    #[error("Failed to find user ID in session")]
    UserNotInSession,

    /// The requesting user does not own the guild.
    ///
    /// Raised before any guild data is read. Results in a 403 Forbidden response.
    #[error("User {user_id} attempted to access owner-only data of guild {guild_id}")]
    NotGuildOwner { guild_id: u64, user_id: u64 },
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `UserNotInSession` → 401 Unauthorized with "You must be logged in"
/// - `NotGuildOwner` → 403 Forbidden with "Only the server owner can export server data"
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "You must be logged in".to_string(),
                }),
            )
                .into_response(),
            Self::NotGuildOwner { .. } => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Only the server owner can export server data".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
