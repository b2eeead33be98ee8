use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user id stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session names a user that no longer exists in the database.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The user is authenticated but lacks a required capability.
    ///
    /// Results in a 403 Forbidden response. The message is logged for
    /// diagnostics; the client sees a generic denial.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Authentication failures answer 401 with a generic message; capability
/// failures answer 403. Details stay in the server log.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto::new("Not logged in.")),
                )
                    .into_response()
            }
            Self::AccessDenied(user_id, message) => {
                tracing::debug!("User {} denied access: {}", user_id, message);
                (StatusCode::FORBIDDEN, Json(ErrorDto::new("Access denied.")))
                    .into_response()
            }
        }
    }
}
