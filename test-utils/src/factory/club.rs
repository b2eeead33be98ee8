//! Club factory for creating test club entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a club with a generated unique name.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::club::Model)` - Created club entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_club(db: &DatabaseConnection) -> Result<entity::club::Model, DbErr> {
    entity::club::ActiveModel {
        name: ActiveValue::Set(format!("Club {}", next_id())),
        ..Default::default()
    }
    .insert(db)
    .await
}
