//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern for creating user entities with default values
/// that can be overridden as needed for specific test scenarios. By default
/// every player capability is granted; tests exercising denial paths switch
/// individual capabilities off.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .name("Coach")
///     .can_edit_players(false)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    club_id: Option<i32>,
    can_view_players: bool,
    can_edit_players: bool,
    can_delete_players: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - name: `"User {id}"` where id is auto-incremented
    /// - club_id: `None` (individual scope)
    /// - all player capabilities: granted
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("User {}", id),
            club_id: None,
            can_view_players: true,
            can_edit_players: true,
            can_delete_players: true,
        }
    }

    /// Sets the display name for the user.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Puts the user into club scope by assigning a club.
    pub fn club_id(mut self, club_id: i32) -> Self {
        self.club_id = Some(club_id);
        self
    }

    /// Sets whether the user may view players.
    pub fn can_view_players(mut self, granted: bool) -> Self {
        self.can_view_players = granted;
        self
    }

    /// Sets whether the user may create or edit players.
    pub fn can_edit_players(mut self, granted: bool) -> Self {
        self.can_edit_players = granted;
        self
    }

    /// Sets whether the user may delete players.
    pub fn can_delete_players(mut self, granted: bool) -> Self {
        self.can_delete_players = granted;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            name: ActiveValue::Set(self.name),
            club_id: ActiveValue::Set(self.club_id),
            can_view_players: ActiveValue::Set(self.can_view_players),
            can_edit_players: ActiveValue::Set(self.can_edit_players),
            can_delete_players: ActiveValue::Set(self.can_delete_players),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an individual-scope user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a club-scope user belonging to the given club.
///
/// Shorthand for `UserFactory::new(db).club_id(club_id).build().await`.
pub async fn create_club_user(
    db: &DatabaseConnection,
    club_id: i32,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).club_id(club_id).build().await
}
