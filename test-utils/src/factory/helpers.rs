//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an individual-scope player with all dependencies.
///
/// This is a convenience method that creates:
/// 1. User (individual scope, all player capabilities granted)
/// 2. Team owned by the user
/// 3. Player on the team
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, team, player))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_player_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::team::Model,
        entity::player::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let team = crate::factory::team::create_user_team(db, user.id).await?;
    let player = crate::factory::player::create_user_player(db, user.id, team.id).await?;

    Ok((user, team, player))
}

/// Creates a club-scope player with all dependencies.
///
/// Creates a club, a club member user with all player capabilities, a club
/// team, and a player on that team.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((club, user, team, player))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_club_player_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::club::Model,
        entity::user::Model,
        entity::team::Model,
        entity::player::Model,
    ),
    DbErr,
> {
    let club = crate::factory::club::create_club(db).await?;
    let user = crate::factory::user::create_club_user(db, club.id).await?;
    let team = crate::factory::team::create_club_team(db, club.id).await?;
    let player = crate::factory::player::create_club_player(db, user.id, club.id, team.id).await?;

    Ok((club, user, team, player))
}
