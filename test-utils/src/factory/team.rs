//! Team factory for creating test team entities in either ownership scope.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teams with customizable fields.
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    user_id: Option<i32>,
    club_id: Option<i32>,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory with a generated name and no owner.
    ///
    /// Set exactly one of `user_id` / `club_id` before building.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Team {}", next_id()),
            user_id: None,
            club_id: None,
        }
    }

    /// Sets the team name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Makes the team individually owned by the given user.
    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Makes the team club owned.
    pub fn club_id(mut self, club_id: i32) -> Self {
        self.club_id = Some(club_id);
        self
    }

    /// Builds and inserts the team entity into the database.
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            name: ActiveValue::Set(self.name),
            user_id: ActiveValue::Set(self.user_id),
            club_id: ActiveValue::Set(self.club_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team owned by an individual user.
pub async fn create_user_team(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db).user_id(user_id).build().await
}

/// Creates a team owned by a club.
pub async fn create_club_team(
    db: &DatabaseConnection,
    club_id: i32,
) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db).club_id(club_id).build().await
}
