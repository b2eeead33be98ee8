use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{get_user, login, logout},
        player::{delete_player, get_player, list_players, submit_player},
        reference::get_player_refs,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", get(logout))
        .route("/api/auth/user", get(get_user))
        .route("/api/players", get(list_players).post(submit_player))
        .route("/api/players/refs", get(get_player_refs))
        .route("/api/players/{id}", get(get_player).delete(delete_player))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::server::controller::auth::login,
        crate::server::controller::auth::logout,
        crate::server::controller::auth::get_user,
        crate::server::controller::player::list_players,
        crate::server::controller::player::get_player,
        crate::server::controller::player::submit_player,
        crate::server::controller::player::delete_player,
        crate::server::controller::reference::get_player_refs,
    ),
    components(schemas(
        crate::model::api::ErrorDto,
        crate::model::api::ApiResponse<crate::model::auth::UserDto>,
        crate::model::api::ApiResponse<crate::model::player::PlayerDetailDto>,
        crate::model::api::ApiResponse<crate::model::player::SubmitReportDto>,
        crate::model::api::ApiResponse<crate::model::player::DeletedDto>,
        crate::model::api::ApiResponse<crate::model::reference::PlayerReferencesDto>,
        crate::model::auth::LoginDto,
        crate::model::auth::UserDto,
        crate::model::player::PlayerRowDto,
        crate::model::player::PlayerListDto,
        crate::model::player::PlayerDetailDto,
        crate::model::player::CharacteristicEntryDto,
        crate::model::player::QuestionnaireEntryDto,
        crate::model::player::SubmitReportDto,
        crate::model::player::DeletedDto,
        crate::model::reference::ReferenceItemDto,
        crate::model::reference::PlayerReferencesDto,
    ))
)]
struct ApiDoc;

/// Swagger UI plus the generated OpenAPI document.
pub fn api_docs() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
