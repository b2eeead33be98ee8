use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::actor::Scope;

pub struct QuestionnaireRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuestionnaireRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn scoped_rows(scope: &Scope) -> sea_orm::Select<entity::questionnaire_row::Entity> {
        let select = entity::prelude::QuestionnaireRow::find()
            .filter(entity::questionnaire_row::Column::IsTemplate.eq(false));

        match scope {
            Scope::Individual { user_id } => select
                .filter(entity::questionnaire_row::Column::UserId.eq(*user_id))
                .filter(entity::questionnaire_row::Column::ClubId.is_null()),
            Scope::Club { club_id } => {
                select.filter(entity::questionnaire_row::Column::ClubId.eq(*club_id))
            }
        }
    }

    /// Resolves a submitted row id within the actor's scope.
    pub async fn find_row(
        &self,
        id: i32,
        scope: &Scope,
    ) -> Result<Option<entity::questionnaire_row::Model>, DbErr> {
        Self::scoped_rows(scope)
            .filter(entity::questionnaire_row::Column::Id.eq(id))
            .one(self.db)
            .await
    }

    /// Fetches the questionnaire rows visible on a player detail view.
    pub async fn visible_rows(
        &self,
        scope: &Scope,
    ) -> Result<Vec<entity::questionnaire_row::Model>, DbErr> {
        Self::scoped_rows(scope)
            .order_by_asc(entity::questionnaire_row::Column::Id)
            .all(self.db)
            .await
    }

    /// Loads the live answer for one (row, player) pair, if any.
    pub async fn find_answer(
        &self,
        row_id: i32,
        player_id: i32,
        scope: &Scope,
    ) -> Result<Option<entity::questionnaire_answer::Model>, DbErr> {
        let select = entity::prelude::QuestionnaireAnswer::find()
            .filter(entity::questionnaire_answer::Column::RowId.eq(row_id))
            .filter(entity::questionnaire_answer::Column::PlayerId.eq(player_id));

        let select = match scope {
            Scope::Individual { user_id } => select
                .filter(entity::questionnaire_answer::Column::UserId.eq(*user_id))
                .filter(entity::questionnaire_answer::Column::ClubId.is_null()),
            Scope::Club { club_id } => {
                select.filter(entity::questionnaire_answer::Column::ClubId.eq(*club_id))
            }
        };

        select.one(self.db).await
    }

    /// Writes the single live answer for one (row, player) pair, creating it
    /// on first submission and updating it in place afterwards.
    pub async fn upsert_answer(
        &self,
        row_id: i32,
        player_id: i32,
        scope: &Scope,
        notes: &str,
    ) -> Result<entity::questionnaire_answer::Model, DbErr> {
        match self.find_answer(row_id, player_id, scope).await? {
            Some(answer) => {
                let mut active_model: entity::questionnaire_answer::ActiveModel = answer.into();
                active_model.notes = ActiveValue::Set(notes.to_string());
                active_model.update(self.db).await
            }
            None => {
                let (user_id, club_id) = scope.owner_pair();
                entity::questionnaire_answer::ActiveModel {
                    row_id: ActiveValue::Set(row_id),
                    player_id: ActiveValue::Set(player_id),
                    user_id: ActiveValue::Set(user_id),
                    club_id: ActiveValue::Set(club_id),
                    notes: ActiveValue::Set(notes.to_string()),
                    ..Default::default()
                }
                .insert(self.db)
                .await
            }
        }
    }
}
