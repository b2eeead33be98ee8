use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum PlayerError {
    /// Target player is absent or not owned by the actor's scope.
    ///
    /// Raised before any mutation. Results in a 404 Not Found response.
    #[error("Player not found")]
    NotFound,

    /// The referenced team does not exist in the actor's scope.
    ///
    /// Raised before any mutation. Results in a 404 Not Found response.
    #[error("Team not found")]
    TeamNotFound,

    /// The persistence layer rejected the primary player write.
    ///
    /// Nothing is reported as succeeded. Results in a 500 Internal Server
    /// Error response; the underlying database error is logged.
    #[error("Failed to save player")]
    SaveFailed(#[source] sea_orm::DbErr),
}

/// Converts player domain errors into HTTP responses.
impl IntoResponse for PlayerError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto::new("Player not found.")),
            )
                .into_response(),
            Self::TeamNotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto::new("Team not found.")),
            )
                .into_response(),
            Self::SaveFailed(err) => {
                tracing::error!("Failed to save player: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new("Can't edit or add the player.")),
                )
                    .into_response()
            }
        }
    }
}
