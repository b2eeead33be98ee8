use serde::Serialize;
use utoipa::ToSchema;

/// One lookup row with its label localized for the request language.
#[derive(Serialize, ToSchema)]
pub struct ReferenceItemDto {
    pub id: i32,
    pub name: String,
    pub title: String,
}

/// All player reference tables in one payload.
#[derive(Serialize, ToSchema)]
pub struct PlayerReferencesDto {
    pub team_status: Vec<ReferenceItemDto>,
    pub player_status: Vec<ReferenceItemDto>,
    pub level: Vec<ReferenceItemDto>,
    pub position: Vec<ReferenceItemDto>,
    pub foot: Vec<ReferenceItemDto>,
}
