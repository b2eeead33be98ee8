use sea_orm::{
    sea_query::{Expr, ExprTrait, Func, IntoColumnRef, SimpleExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    JoinType, ModelTrait, Order, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use std::collections::HashMap;

use crate::server::model::{
    actor::{ActorContext, Scope},
    player::{CardFields, ListQuery, PlayerFields, PlayerRow, SortColumn},
};

/// Case-insensitive starts-with match, `lower(col) LIKE 'term%'`.
fn istarts_with(col: impl IntoColumnRef, pattern: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(col))).like(pattern)
}

pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn scoped(
        select: sea_orm::Select<entity::player::Entity>,
        scope: &Scope,
    ) -> sea_orm::Select<entity::player::Entity> {
        match scope {
            Scope::Individual { user_id } => select
                .filter(entity::player::Column::UserId.eq(*user_id))
                .filter(entity::player::Column::ClubId.is_null()),
            Scope::Club { club_id } => {
                select.filter(entity::player::Column::ClubId.eq(*club_id))
            }
        }
    }

    /// Looks a player up by id, restricted to the actor's scope and the
    /// current team. Foreign or off-team players resolve to `None`.
    pub async fn find_owned(
        &self,
        id: i32,
        scope: &Scope,
        team_id: i32,
    ) -> Result<Option<entity::player::Model>, DbErr> {
        Self::scoped(entity::prelude::Player::find(), scope)
            .filter(entity::player::Column::Id.eq(id))
            .filter(entity::player::Column::TeamId.eq(team_id))
            .one(self.db)
            .await
    }

    /// Inserts a new player bound to the given team.
    ///
    /// The creating user is recorded in both scopes; the club owner column is
    /// set only in club scope.
    pub async fn create(
        &self,
        actor: &ActorContext,
        team_id: i32,
        fields: PlayerFields,
    ) -> Result<entity::player::Model, DbErr> {
        let club_id = match actor.scope {
            Scope::Individual { .. } => None,
            Scope::Club { club_id } => Some(club_id),
        };

        entity::player::ActiveModel {
            surname: ActiveValue::Set(fields.surname),
            name: ActiveValue::Set(fields.name),
            patronymic: ActiveValue::Set(fields.patronymic),
            photo: ActiveValue::Set(fields.photo.unwrap_or_default()),
            team_id: ActiveValue::Set(team_id),
            user_id: ActiveValue::Set(Some(actor.user.id)),
            club_id: ActiveValue::Set(club_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Overwrites an existing player's core fields and team binding.
    ///
    /// A `None` photo leaves the stored photo reference untouched.
    pub async fn update(
        &self,
        player: entity::player::Model,
        team_id: i32,
        fields: PlayerFields,
    ) -> Result<entity::player::Model, DbErr> {
        let mut active_model: entity::player::ActiveModel = player.into();
        active_model.surname = ActiveValue::Set(fields.surname);
        active_model.name = ActiveValue::Set(fields.name);
        active_model.patronymic = ActiveValue::Set(fields.patronymic);
        active_model.team_id = ActiveValue::Set(team_id);
        if let Some(photo) = fields.photo {
            active_model.photo = ActiveValue::Set(photo);
        }

        active_model.update(self.db).await
    }

    /// Loads the player's card, if one has been created yet.
    pub async fn find_card(
        &self,
        player_id: i32,
    ) -> Result<Option<entity::player_card::Model>, DbErr> {
        entity::prelude::PlayerCard::find()
            .filter(entity::player_card::Column::PlayerId.eq(player_id))
            .one(self.db)
            .await
    }

    /// Upserts the player's card, overwriting every field.
    ///
    /// Creates the card lazily on first write; subsequent writes update the
    /// existing row in place.
    pub async fn save_card(
        &self,
        player_id: i32,
        existing: Option<entity::player_card::Model>,
        fields: CardFields,
    ) -> Result<entity::player_card::Model, DbErr> {
        match existing {
            Some(card) => {
                let mut active_model: entity::player_card::ActiveModel = card.into();
                active_model.citizenship = ActiveValue::Set(fields.citizenship);
                active_model.club_from = ActiveValue::Set(fields.club_from);
                active_model.growth = ActiveValue::Set(fields.growth);
                active_model.weight = ActiveValue::Set(fields.weight);
                active_model.game_num = ActiveValue::Set(fields.game_num);
                active_model.birthsday = ActiveValue::Set(fields.birthsday);
                active_model.come = ActiveValue::Set(fields.come);
                active_model.leave = ActiveValue::Set(fields.leave);
                active_model.team_status_id = ActiveValue::Set(fields.team_status_id);
                active_model.player_status_id = ActiveValue::Set(fields.player_status_id);
                active_model.level_id = ActiveValue::Set(fields.level_id);
                active_model.position_id = ActiveValue::Set(fields.position_id);
                active_model.foot_id = ActiveValue::Set(fields.foot_id);
                active_model.update(self.db).await
            }
            None => {
                entity::player_card::ActiveModel {
                    player_id: ActiveValue::Set(player_id),
                    citizenship: ActiveValue::Set(fields.citizenship),
                    club_from: ActiveValue::Set(fields.club_from),
                    growth: ActiveValue::Set(fields.growth),
                    weight: ActiveValue::Set(fields.weight),
                    game_num: ActiveValue::Set(fields.game_num),
                    birthsday: ActiveValue::Set(fields.birthsday),
                    come: ActiveValue::Set(fields.come),
                    leave: ActiveValue::Set(fields.leave),
                    team_status_id: ActiveValue::Set(fields.team_status_id),
                    player_status_id: ActiveValue::Set(fields.player_status_id),
                    level_id: ActiveValue::Set(fields.level_id),
                    position_id: ActiveValue::Set(fields.position_id),
                    foot_id: ActiveValue::Set(fields.foot_id),
                    ..Default::default()
                }
                .insert(self.db)
                .await
            }
        }
    }

    /// Deletes a player and everything it owns.
    ///
    /// The cascade is explicit: observations, answers, and the card are
    /// removed before the player row, independent of engine-level cascade
    /// support.
    pub async fn delete(&self, player: entity::player::Model) -> Result<(), DbErr> {
        entity::prelude::CharacteristicObservation::delete_many()
            .filter(entity::characteristic_observation::Column::PlayerId.eq(player.id))
            .exec(self.db)
            .await?;

        entity::prelude::QuestionnaireAnswer::delete_many()
            .filter(entity::questionnaire_answer::Column::PlayerId.eq(player.id))
            .exec(self.db)
            .await?;

        entity::prelude::PlayerCard::delete_many()
            .filter(entity::player_card::Column::PlayerId.eq(player.id))
            .exec(self.db)
            .await?;

        player.delete(self.db).await?;

        Ok(())
    }

    /// Fetches one page of the players table.
    ///
    /// Scope and team filters always apply. The search term matches
    /// case-insensitively against the start of surname, name, patronymic,
    /// card citizenship, team name, and provenance club, OR-combined. The
    /// sort column comes from the fixed allow-list, then the `start`/`length`
    /// window is applied.
    pub async fn list(
        &self,
        scope: &Scope,
        team_id: i32,
        query: &ListQuery,
    ) -> Result<Vec<PlayerRow>, DbErr> {
        let mut select = Self::scoped(entity::prelude::Player::find(), scope)
            .filter(entity::player::Column::TeamId.eq(team_id))
            .find_also_related(entity::prelude::PlayerCard)
            .join(JoinType::LeftJoin, entity::player::Relation::Team.def());

        if let Some(term) = query.search.as_deref().filter(|t| !t.is_empty()) {
            let pattern = format!("{}%", term.to_lowercase());
            select = select.filter(
                Condition::any()
                    .add(istarts_with(
                        (entity::player::Entity, entity::player::Column::Surname),
                        &pattern,
                    ))
                    .add(istarts_with(
                        (entity::player::Entity, entity::player::Column::Name),
                        &pattern,
                    ))
                    .add(istarts_with(
                        (entity::player::Entity, entity::player::Column::Patronymic),
                        &pattern,
                    ))
                    .add(istarts_with(
                        (
                            entity::player_card::Entity,
                            entity::player_card::Column::Citizenship,
                        ),
                        &pattern,
                    ))
                    .add(istarts_with(
                        (entity::team::Entity, entity::team::Column::Name),
                        &pattern,
                    ))
                    .add(istarts_with(
                        (
                            entity::player_card::Entity,
                            entity::player_card::Column::ClubFrom,
                        ),
                        &pattern,
                    )),
            );
        }

        let order = if query.descending {
            Order::Desc
        } else {
            Order::Asc
        };
        let select = match query.sort {
            SortColumn::Id => select.order_by(entity::player::Column::Id, order),
            SortColumn::Surname => select.order_by(entity::player::Column::Surname, order),
            SortColumn::Name => select.order_by(entity::player::Column::Name, order),
            SortColumn::Patronymic => select.order_by(entity::player::Column::Patronymic, order),
            SortColumn::Citizenship => {
                select.order_by(entity::player_card::Column::Citizenship, order)
            }
            SortColumn::TeamName => select.order_by(entity::team::Column::Name, order),
            SortColumn::ClubFrom => select.order_by(entity::player_card::Column::ClubFrom, order),
            SortColumn::Growth => select.order_by(entity::player_card::Column::Growth, order),
            SortColumn::Weight => select.order_by(entity::player_card::Column::Weight, order),
            SortColumn::GameNum => select.order_by(entity::player_card::Column::GameNum, order),
            SortColumn::Birthsday => {
                select.order_by(entity::player_card::Column::Birthsday, order)
            }
            SortColumn::Come => select.order_by(entity::player_card::Column::Come, order),
            SortColumn::Leave => select.order_by(entity::player_card::Column::Leave, order),
        };

        let rows = select
            .offset(query.start)
            .limit(query.length)
            .all(self.db)
            .await?;

        // Resolve team names in one query
        let team_ids: Vec<i32> = rows.iter().map(|(player, _)| player.team_id).collect();
        let teams_map: HashMap<i32, String> = if !team_ids.is_empty() {
            entity::prelude::Team::find()
                .filter(entity::team::Column::Id.is_in(team_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|t| (t.id, t.name))
                .collect()
        } else {
            HashMap::new()
        };

        Ok(rows
            .into_iter()
            .map(|(player, card)| PlayerRow {
                team_name: teams_map.get(&player.team_id).cloned().unwrap_or_default(),
                player,
                card,
            })
            .collect())
    }
}
