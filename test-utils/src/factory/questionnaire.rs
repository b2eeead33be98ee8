//! Questionnaire row factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating questionnaire rows with customizable fields.
pub struct QuestionnaireRowFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    is_template: bool,
    user_id: Option<i32>,
    club_id: Option<i32>,
}

impl<'a> QuestionnaireRowFactory<'a> {
    /// Creates a new factory with a generated name and no owner.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Question {}", next_id()),
            is_template: false,
            user_id: None,
            club_id: None,
        }
    }

    /// Sets the question name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
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

    /// Builds and inserts the questionnaire row.
    pub async fn build(self) -> Result<entity::questionnaire_row::Model, DbErr> {
        entity::questionnaire_row::ActiveModel {
            name: ActiveValue::Set(self.name),
            is_template: ActiveValue::Set(self.is_template),
            user_id: ActiveValue::Set(self.user_id),
            club_id: ActiveValue::Set(self.club_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user-owned questionnaire row.
pub async fn create_user_questionnaire_row(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::questionnaire_row::Model, DbErr> {
    QuestionnaireRowFactory::new(db).user_id(user_id).build().await
}

/// Creates a club-owned questionnaire row.
pub async fn create_club_questionnaire_row(
    db: &DatabaseConnection,
    club_id: i32,
) -> Result<entity::questionnaire_row::Model, DbErr> {
    QuestionnaireRowFactory::new(db).club_id(club_id).build().await
}
