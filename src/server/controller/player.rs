use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        player::{DeletedDto, PlayerDetailDto, PlayerListDto, SubmitReportDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::player::{ListQuery, PhotoUpload, PlayerRow, PlayerSubmission, SortColumn},
        service::player::PlayerService,
        state::AppState,
    },
};

/// Tag for grouping player endpoints in OpenAPI documentation
pub static PLAYER_TAG: &str = "player";

/// Query parameters naming the current team.
#[derive(Deserialize)]
pub struct TeamParams {
    pub team_id: i32,
}

/// Table query parameters for the players list.
#[derive(Deserialize)]
pub struct ListParams {
    pub team_id: i32,
    #[serde(default)]
    pub start: u64,
    #[serde(default = "default_length")]
    pub length: u64,
    #[serde(default)]
    pub order_column: usize,
    #[serde(default)]
    pub order_dir: String,
    #[serde(default)]
    pub search: Option<String>,
}

fn default_length() -> u64 {
    10
}

impl ListParams {
    fn into_query(self) -> ListQuery {
        ListQuery {
            start: self.start,
            length: self.length,
            sort: SortColumn::from_index(self.order_column),
            descending: self.order_dir == "desc",
            search: self.search,
        }
    }
}

/// Collects the multipart profile submission into its raw field form.
///
/// Repeated fields accumulate into the parallel sequences; unknown fields are
/// ignored so frontends can evolve ahead of the backend.
async fn read_submission(mut multipart: Multipart) -> Result<PlayerSubmission, AppError> {
    let mut submission = PlayerSubmission::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "photo" => {
                let file_name = field.file_name().unwrap_or("photo.bin").to_string();
                let bytes = field.bytes().await?.to_vec();
                submission.photo = Some(PhotoUpload { file_name, bytes });
            }
            "characteristics_id" => submission.characteristics_id.push(field.text().await?),
            "characteristics_stars" => submission.characteristics_stars.push(field.text().await?),
            "characteristics_notes" => submission.characteristics_notes.push(field.text().await?),
            "questionnaires_ids" => submission.questionnaires_ids.push(field.text().await?),
            "questionnaires_notes" => submission.questionnaires_notes.push(field.text().await?),
            _ => {
                let value = field.text().await?;
                match name.as_str() {
                    "id" => submission.id = Some(value),
                    "surname" => submission.surname = Some(value),
                    "name" => submission.name = Some(value),
                    "patronymic" => submission.patronymic = Some(value),
                    "team" => submission.team = Some(value),
                    "citizenship" => submission.citizenship = Some(value),
                    "club_from" => submission.club_from = Some(value),
                    "growth" => submission.growth = Some(value),
                    "weight" => submission.weight = Some(value),
                    "game_num" => submission.game_num = Some(value),
                    "birthsday" => submission.birthsday = Some(value),
                    "come" => submission.come = Some(value),
                    "leave" => submission.leave = Some(value),
                    "team_status" => submission.team_status = Some(value),
                    "player_status" => submission.player_status = Some(value),
                    "level" => submission.level = Some(value),
                    "position" => submission.position = Some(value),
                    "foot" => submission.foot = Some(value),
                    _ => {}
                }
            }
        }
    }

    Ok(submission)
}

/// Get one page of the players table.
///
/// Filters to players owned by the actor's scope on the requested team,
/// applies the case-insensitive starts-with search across surname, name,
/// patronymic, citizenship, team name, and provenance club, sorts by the
/// allow-listed column, then returns the `start`/`length` window.
///
/// # Access Control
/// - `ViewPlayers` - A valid session without it answers 200 with empty data
///   and an `err` note, keeping table frontends rendering
///
/// # Returns
/// - `200 OK` - Page of flattened player rows
/// - `401 Unauthorized` - No session
#[utoipa::path(
    get,
    path = "/api/players",
    tag = PLAYER_TAG,
    params(
        ("team_id" = i32, Query, description = "Current team id"),
        ("start" = Option<u64>, Query, description = "Page window offset (default: 0)"),
        ("length" = Option<u64>, Query, description = "Page window size (default: 10)"),
        ("order_column" = Option<usize>, Query, description = "Sort column index (default: 0 = id)"),
        ("order_dir" = Option<String>, Query, description = "Sort direction, \"asc\" or \"desc\""),
        ("search" = Option<String>, Query, description = "Starts-with search term")
    ),
    responses(
        (status = 200, description = "Page of players", body = PlayerListDto),
        (status = 401, description = "No session", body = ErrorDto)
    ),
)]
pub async fn list_players(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ListParams>,
) -> Result<Response, AppError> {
    let guard = AuthGuard::new(&state.db, &session);
    let actor = match guard.require(&[Permission::ViewPlayers]).await {
        Ok(actor) => actor,
        Err(AppError::AuthErr(AuthError::AccessDenied(..))) => {
            return Ok((
                StatusCode::OK,
                Json(PlayerListDto {
                    success: true,
                    data: Vec::new(),
                    err: Some("Access denied.".to_string()),
                }),
            )
                .into_response());
        }
        Err(err) => return Err(err),
    };

    let team_id = params.team_id;
    let query = params.into_query();
    let rows = PlayerService::new(&state.db)
        .list(&actor, team_id, &query)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PlayerListDto {
            success: true,
            data: rows.into_iter().map(PlayerRow::into_dto).collect(),
            err: None,
        }),
    )
        .into_response())
}

/// Get one player with card, characteristics, and questionnaire state.
///
/// # Access Control
/// - `ViewPlayers`
///
/// # Returns
/// - `200 OK` - Full player projection
/// - `401 Unauthorized` / `403 Forbidden` - No session / missing capability
/// - `404 Not Found` - Player absent or owned by another scope
#[utoipa::path(
    get,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = i32, Path, description = "Player id"),
        ("team_id" = i32, Query, description = "Current team id")
    ),
    responses(
        (status = 200, description = "Full player projection", body = ApiResponse<PlayerDetailDto>),
        (status = 401, description = "No session", body = ErrorDto),
        (status = 403, description = "Missing capability", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto)
    ),
)]
pub async fn get_player(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Query(params): Query<TeamParams>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ViewPlayers])
        .await?;

    let detail = PlayerService::new(&state.db)
        .get_detail(&actor, params.team_id, id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(detail.into_dto()))))
}

/// Create or update a player profile.
///
/// Multipart submission carrying the identifier (absent or -1 for create),
/// name fields, the team, an optional photo file, card fields, and the
/// parallel characteristic and questionnaire sequences. The response summary
/// enumerates which sub-operations succeeded; sub-entity failures after the
/// player write are reported there, not as an error status.
///
/// # Access Control
/// - `EditPlayers`
///
/// # Returns
/// - `200 OK` - Player written; see the summary for card/row outcomes
/// - `400 Bad Request` - Malformed multipart payload
/// - `401 Unauthorized` / `403 Forbidden` - No session / missing capability
/// - `404 Not Found` - Team invalid for the actor's scope
/// - `500 Internal Server Error` - Player write rejected
#[utoipa::path(
    post,
    path = "/api/players",
    tag = PLAYER_TAG,
    params(
        ("team_id" = i32, Query, description = "Current team id")
    ),
    responses(
        (status = 200, description = "Player written", body = ApiResponse<SubmitReportDto>),
        (status = 400, description = "Malformed payload", body = ErrorDto),
        (status = 401, description = "No session", body = ErrorDto),
        (status = 403, description = "Missing capability", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Player write rejected", body = ErrorDto)
    ),
)]
pub async fn submit_player(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<TeamParams>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::EditPlayers])
        .await?;

    let submission = read_submission(multipart).await?;

    let report = PlayerService::new(&state.db)
        .save_profile(&actor, params.team_id, submission, &state.photos)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(report.into_dto()))))
}

/// Delete a player.
///
/// Deletion cascades to the card, characteristic observations, and
/// questionnaire answers.
///
/// # Access Control
/// - `DeletePlayers`
///
/// # Returns
/// - `200 OK` - Player deleted
/// - `401 Unauthorized` / `403 Forbidden` - No session / missing capability
/// - `404 Not Found` - Player absent or owned by another scope
#[utoipa::path(
    delete,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = i32, Path, description = "Player id"),
        ("team_id" = i32, Query, description = "Current team id")
    ),
    responses(
        (status = 200, description = "Player deleted", body = ApiResponse<DeletedDto>),
        (status = 401, description = "No session", body = ErrorDto),
        (status = 403, description = "Missing capability", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto)
    ),
)]
pub async fn delete_player(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Query(params): Query<TeamParams>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::DeletePlayers])
        .await?;

    let deleted_id = PlayerService::new(&state.db)
        .delete(&actor, params.team_id, id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(DeletedDto { id: deleted_id })),
    ))
}
