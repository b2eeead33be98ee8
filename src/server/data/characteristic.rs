use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::actor::Scope;

pub struct CharacteristicRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacteristicRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn scoped_rows(
        scope: &Scope,
    ) -> sea_orm::Select<entity::characteristic_row::Entity> {
        let select = entity::prelude::CharacteristicRow::find()
            .filter(entity::characteristic_row::Column::IsTemplate.eq(false));

        match scope {
            Scope::Individual { user_id } => select
                .filter(entity::characteristic_row::Column::UserId.eq(*user_id))
                .filter(entity::characteristic_row::Column::ClubId.is_null()),
            Scope::Club { club_id } => {
                select.filter(entity::characteristic_row::Column::ClubId.eq(*club_id))
            }
        }
    }

    /// Resolves a submitted row id within the actor's scope.
    ///
    /// Template rows never resolve; foreign rows resolve to `None`.
    pub async fn find_row(
        &self,
        id: i32,
        scope: &Scope,
    ) -> Result<Option<entity::characteristic_row::Model>, DbErr> {
        Self::scoped_rows(scope)
            .filter(entity::characteristic_row::Column::Id.eq(id))
            .one(self.db)
            .await
    }

    /// Fetches the rows shown on a player detail view: in scope, not a
    /// template, and attached to a parent group (root rows are structure,
    /// not scoring dimensions).
    pub async fn visible_rows(
        &self,
        scope: &Scope,
    ) -> Result<Vec<entity::characteristic_row::Model>, DbErr> {
        Self::scoped_rows(scope)
            .filter(entity::characteristic_row::Column::ParentId.is_not_null())
            .order_by_asc(entity::characteristic_row::Column::Id)
            .all(self.db)
            .await
    }

    /// Fetches the most recent observations for one (row, player) pair,
    /// newest first.
    pub async fn latest_observations(
        &self,
        row_id: i32,
        player_id: i32,
        scope: &Scope,
        limit: u64,
    ) -> Result<Vec<entity::characteristic_observation::Model>, DbErr> {
        let select = entity::prelude::CharacteristicObservation::find()
            .filter(entity::characteristic_observation::Column::RowId.eq(row_id))
            .filter(entity::characteristic_observation::Column::PlayerId.eq(player_id));

        let select = match scope {
            Scope::Individual { user_id } => select
                .filter(entity::characteristic_observation::Column::UserId.eq(*user_id))
                .filter(entity::characteristic_observation::Column::ClubId.is_null()),
            Scope::Club { club_id } => {
                select.filter(entity::characteristic_observation::Column::ClubId.eq(*club_id))
            }
        };

        select
            .order_by_desc(entity::characteristic_observation::Column::DateCreation)
            .order_by_desc(entity::characteristic_observation::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Records a dated observation, updating in place when one already exists
    /// for the same (row, player, date).
    pub async fn upsert_observation(
        &self,
        row_id: i32,
        player_id: i32,
        scope: &Scope,
        date: NaiveDate,
        value: i32,
        notes: &str,
    ) -> Result<entity::characteristic_observation::Model, DbErr> {
        let select = entity::prelude::CharacteristicObservation::find()
            .filter(entity::characteristic_observation::Column::RowId.eq(row_id))
            .filter(entity::characteristic_observation::Column::PlayerId.eq(player_id))
            .filter(entity::characteristic_observation::Column::DateCreation.eq(date));

        let select = match scope {
            Scope::Individual { user_id } => select
                .filter(entity::characteristic_observation::Column::UserId.eq(*user_id))
                .filter(entity::characteristic_observation::Column::ClubId.is_null()),
            Scope::Club { club_id } => {
                select.filter(entity::characteristic_observation::Column::ClubId.eq(*club_id))
            }
        };

        match select.one(self.db).await? {
            Some(observation) => {
                let mut active_model: entity::characteristic_observation::ActiveModel =
                    observation.into();
                active_model.value = ActiveValue::Set(value);
                active_model.notes = ActiveValue::Set(notes.to_string());
                active_model.update(self.db).await
            }
            None => {
                let (user_id, club_id) = scope.owner_pair();
                entity::characteristic_observation::ActiveModel {
                    row_id: ActiveValue::Set(row_id),
                    player_id: ActiveValue::Set(player_id),
                    user_id: ActiveValue::Set(user_id),
                    club_id: ActiveValue::Set(club_id),
                    date_creation: ActiveValue::Set(date),
                    value: ActiveValue::Set(value),
                    notes: ActiveValue::Set(notes.to_string()),
                    ..Default::default()
                }
                .insert(self.db)
                .await
            }
        }
    }
}
