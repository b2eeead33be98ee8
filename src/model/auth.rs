use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Session bootstrap request.
#[derive(Deserialize, ToSchema)]
pub struct LoginDto {
    pub user_id: i32,
}

/// The authenticated account as seen by the client.
#[derive(Serialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub club_id: Option<i32>,
    pub can_view_players: bool,
    pub can_edit_players: bool,
    pub can_delete_players: bool,
}

impl UserDto {
    pub fn from_model(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            club_id: user.club_id,
            can_view_players: user.can_view_players,
            can_edit_players: user.can_edit_players,
            can_delete_players: user.can_delete_players,
        }
    }
}
