use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        reference::PlayerReferencesDto,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::reference::ReferenceService,
        state::AppState, util::lang::LANG_CODE_DEFAULT,
    },
};

/// Tag for grouping reference endpoints in OpenAPI documentation
pub static REFERENCE_TAG: &str = "reference";

#[derive(Deserialize)]
pub struct RefsParams {
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_lang() -> String {
    LANG_CODE_DEFAULT.to_string()
}

/// Get the player reference tables with localized labels.
///
/// Returns all five lookup tables (team status, player status, level,
/// position, foot). Each row carries a `title` resolved from its translations
/// map for the requested language, falling back to the default language and
/// then to the row's machine name.
///
/// # Access Control
/// - Authenticated session (no specific capability)
///
/// # Returns
/// - `200 OK` - All reference tables
/// - `401 Unauthorized` - No session
#[utoipa::path(
    get,
    path = "/api/players/refs",
    tag = REFERENCE_TAG,
    params(
        ("lang" = Option<String>, Query, description = "Language code for labels (default: \"en\")")
    ),
    responses(
        (status = 200, description = "All reference tables", body = ApiResponse<PlayerReferencesDto>),
        (status = 401, description = "No session", body = ErrorDto)
    ),
)]
pub async fn get_player_refs(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<RefsParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let refs = ReferenceService::new(&state.db)
        .player_refs(&params.lang)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(refs.into_dto()))))
}
