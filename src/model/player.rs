use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

/// One row of the players table view: player plus card fields flattened.
///
/// Card-backed string columns degrade to `""` when the player has no card,
/// matching what table frontends render.
#[derive(Serialize, ToSchema)]
pub struct PlayerRowDto {
    pub id: i32,
    pub surname: String,
    pub name: String,
    pub patronymic: String,
    pub citizenship: String,
    pub team: String,
    pub club_from: String,
    pub growth: Option<i32>,
    pub weight: Option<i32>,
    pub game_num: Option<i32>,
    pub birthsday: Option<NaiveDate>,
    pub come: Option<NaiveDate>,
    pub leave: Option<NaiveDate>,
}

/// List response. Kept from the product's table contract: a missing view
/// capability answers `success: true` with empty data and an `err` note so
/// table frontends render an empty grid.
#[derive(Serialize, ToSchema)]
pub struct PlayerListDto {
    pub success: bool,
    pub data: Vec<PlayerRowDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub err: Option<String>,
}

/// Latest characteristic state for one row, with the trend marker against
/// the previous observation: `"-"` no prior, `"="` equal, `">"` increased,
/// `"<"` decreased.
#[derive(Serialize, ToSchema)]
pub struct CharacteristicEntryDto {
    pub row_id: i32,
    pub value: i32,
    pub notes: String,
    pub diff: String,
}

/// Current questionnaire answer for one row.
#[derive(Serialize, ToSchema)]
pub struct QuestionnaireEntryDto {
    pub row_id: i32,
    pub notes: String,
}

/// Full single-player projection: player and card flat, photo normalized to
/// a servable path, plus the latest characteristic and questionnaire state.
#[derive(Serialize, ToSchema)]
pub struct PlayerDetailDto {
    pub id: i32,
    pub surname: String,
    pub name: String,
    pub patronymic: String,
    pub team: i32,
    pub team_name: String,
    pub photo: String,
    pub citizenship: Option<String>,
    pub club_from: Option<String>,
    pub growth: Option<i32>,
    pub weight: Option<i32>,
    pub game_num: Option<i32>,
    pub birthsday: Option<NaiveDate>,
    pub come: Option<NaiveDate>,
    pub leave: Option<NaiveDate>,
    pub team_status: Option<i32>,
    pub player_status: Option<i32>,
    pub level: Option<i32>,
    pub position: Option<i32>,
    pub foot: Option<i32>,
    pub characteristics: Vec<CharacteristicEntryDto>,
    pub questionnaires: Vec<QuestionnaireEntryDto>,
}

/// Outcome of a profile submission. `summary` is a human-readable multi-line
/// account of which sub-operations succeeded; clients needing machine-checkable
/// state should read the player back instead of parsing it.
#[derive(Serialize, ToSchema)]
pub struct SubmitReportDto {
    pub id: i32,
    pub created: bool,
    pub summary: String,
}

/// Body of a successful delete.
#[derive(Serialize, ToSchema)]
pub struct DeletedDto {
    pub id: i32,
}
