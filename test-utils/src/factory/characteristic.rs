//! Characteristic row factory.
//!
//! Rows recorded against in tests need a parent (root rows form the library
//! structure and never carry observations), so the scoped creators build a
//! root row and return a child attached to it.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating characteristic rows with customizable fields.
pub struct CharacteristicRowFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    parent_id: Option<i32>,
    is_template: bool,
    user_id: Option<i32>,
    club_id: Option<i32>,
}

impl<'a> CharacteristicRowFactory<'a> {
    /// Creates a new factory with a generated name, no parent, and no owner.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Characteristic {}", next_id()),
            parent_id: None,
            is_template: false,
            user_id: None,
            club_id: None,
        }
    }

    /// Sets the row name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Attaches the row to a parent group row.
    pub fn parent_id(mut self, parent_id: i32) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Marks the row as a library template row.
    pub fn is_template(mut self, is_template: bool) -> Self {
        self.is_template = is_template;
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

    /// Builds and inserts the characteristic row.
    pub async fn build(self) -> Result<entity::characteristic_row::Model, DbErr> {
        entity::characteristic_row::ActiveModel {
            name: ActiveValue::Set(self.name),
            parent_id: ActiveValue::Set(self.parent_id),
            is_template: ActiveValue::Set(self.is_template),
            user_id: ActiveValue::Set(self.user_id),
            club_id: ActiveValue::Set(self.club_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user-owned characteristic row under a fresh root group.
pub async fn create_user_characteristic_row(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::characteristic_row::Model, DbErr> {
    let group = CharacteristicRowFactory::new(db)
        .user_id(user_id)
        .build()
        .await?;
    CharacteristicRowFactory::new(db)
        .user_id(user_id)
        .parent_id(group.id)
        .build()
        .await
}

/// Creates a club-owned characteristic row under a fresh root group.
pub async fn create_club_characteristic_row(
    db: &DatabaseConnection,
    club_id: i32,
) -> Result<entity::characteristic_row::Model, DbErr> {
    let group = CharacteristicRowFactory::new(db)
        .club_id(club_id)
        .build()
        .await?;
    CharacteristicRowFactory::new(db)
        .club_id(club_id)
        .parent_id(group.id)
        .build()
        .await
}
