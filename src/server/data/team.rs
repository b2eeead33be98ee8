use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::model::actor::Scope;

pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Looks a team up by primary key without ownership checks.
    ///
    /// Used for projecting team names of rows whose ownership was already
    /// established through the player.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find_by_id(id).one(self.db).await
    }

    /// Looks a team up by id within the actor's ownership scope.
    ///
    /// Returns `None` for teams that exist but belong to another owner.
    pub async fn find_in_scope(
        &self,
        id: i32,
        scope: &Scope,
    ) -> Result<Option<entity::team::Model>, DbErr> {
        let query = entity::prelude::Team::find().filter(entity::team::Column::Id.eq(id));

        let query = match scope {
            Scope::Individual { user_id } => query
                .filter(entity::team::Column::UserId.eq(*user_id))
                .filter(entity::team::Column::ClubId.is_null()),
            Scope::Club { club_id } => query.filter(entity::team::Column::ClubId.eq(*club_id)),
        };

        query.one(self.db).await
    }
}
