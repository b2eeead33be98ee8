//! Player factory for creating test player entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::player::PlayerFactory;
///
/// let player = PlayerFactory::new(&db)
///     .surname("Smith")
///     .team_id(team.id)
///     .user_id(user.id)
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    surname: String,
    name: String,
    patronymic: String,
    photo: String,
    team_id: i32,
    user_id: Option<i32>,
    club_id: Option<i32>,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with generated name fields and no owner.
    ///
    /// `team_id` and an owner column must be set before building.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            surname: format!("Surname {}", id),
            name: format!("Name {}", id),
            patronymic: String::new(),
            photo: String::new(),
            team_id: 0,
            user_id: None,
            club_id: None,
        }
    }

    /// Sets the surname.
    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = surname.into();
        self
    }

    /// Sets the given name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the patronymic.
    pub fn patronymic(mut self, patronymic: impl Into<String>) -> Self {
        self.patronymic = patronymic.into();
        self
    }

    /// Sets the stored photo reference.
    pub fn photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = photo.into();
        self
    }

    /// Sets the team the player belongs to.
    pub fn team_id(mut self, team_id: i32) -> Self {
        self.team_id = team_id;
        self
    }

    /// Sets the individual owner.
    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Sets the club owner.
    pub fn club_id(mut self, club_id: i32) -> Self {
        self.club_id = Some(club_id);
        self
    }

    /// Builds and inserts the player entity into the database.
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            surname: ActiveValue::Set(self.surname),
            name: ActiveValue::Set(self.name),
            patronymic: ActiveValue::Set(self.patronymic),
            photo: ActiveValue::Set(self.photo),
            team_id: ActiveValue::Set(self.team_id),
            user_id: ActiveValue::Set(self.user_id),
            club_id: ActiveValue::Set(self.club_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an individual-scope player on the given team.
pub async fn create_user_player(
    db: &DatabaseConnection,
    user_id: i32,
    team_id: i32,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db)
        .user_id(user_id)
        .team_id(team_id)
        .build()
        .await
}

/// Creates a club-scope player on the given team.
pub async fn create_club_player(
    db: &DatabaseConnection,
    user_id: i32,
    club_id: i32,
    team_id: i32,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db)
        .user_id(user_id)
        .club_id(club_id)
        .team_id(team_id)
        .build()
        .await
}
