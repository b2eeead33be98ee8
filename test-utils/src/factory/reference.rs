//! Factories for the five player reference lookup tables.
//!
//! Each creator accepts an optional translations map; `translations_en_ru` is
//! a shorthand for the common two-language test fixture.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Builds a two-language translations map for test lookup rows.
pub fn translations_en_ru(en: &str, ru: &str) -> serde_json::Value {
    json!({ "en": en, "ru": ru })
}

/// Creates a team status lookup row.
pub async fn create_team_status(
    db: &DatabaseConnection,
    translations: Option<serde_json::Value>,
) -> Result<entity::team_status::Model, DbErr> {
    entity::team_status::ActiveModel {
        name: ActiveValue::Set(format!("team-status-{}", next_id())),
        translations: ActiveValue::Set(translations),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a player status lookup row.
pub async fn create_player_status(
    db: &DatabaseConnection,
    translations: Option<serde_json::Value>,
) -> Result<entity::player_status::Model, DbErr> {
    entity::player_status::ActiveModel {
        name: ActiveValue::Set(format!("player-status-{}", next_id())),
        translations: ActiveValue::Set(translations),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a skill level lookup row.
pub async fn create_level(
    db: &DatabaseConnection,
    translations: Option<serde_json::Value>,
) -> Result<entity::level::Model, DbErr> {
    entity::level::ActiveModel {
        name: ActiveValue::Set(format!("level-{}", next_id())),
        translations: ActiveValue::Set(translations),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a position lookup row.
pub async fn create_position(
    db: &DatabaseConnection,
    translations: Option<serde_json::Value>,
) -> Result<entity::position::Model, DbErr> {
    entity::position::ActiveModel {
        name: ActiveValue::Set(format!("position-{}", next_id())),
        translations: ActiveValue::Set(translations),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a preferred foot lookup row.
pub async fn create_foot(
    db: &DatabaseConnection,
    translations: Option<serde_json::Value>,
) -> Result<entity::foot::Model, DbErr> {
    entity::foot::ActiveModel {
        name: ActiveValue::Set(format!("foot-{}", next_id())),
        translations: ActiveValue::Set(translations),
        ..Default::default()
    }
    .insert(db)
    .await
}
