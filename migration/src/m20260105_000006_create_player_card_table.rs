use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000004_create_reference_tables::{Foot, Level, PlayerStatus, Position, TeamStatus},
    m20260105_000005_create_player_table::Player,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerCard::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerCard::Id))
                    .col(integer_uniq(PlayerCard::PlayerId))
                    .col(string_null(PlayerCard::Citizenship))
                    .col(string_null(PlayerCard::ClubFrom))
                    .col(integer_null(PlayerCard::Growth))
                    .col(integer_null(PlayerCard::Weight))
                    .col(integer_null(PlayerCard::GameNum))
                    .col(date_null(PlayerCard::Birthsday))
                    .col(date_null(PlayerCard::Come))
                    .col(date_null(PlayerCard::Leave))
                    .col(integer_null(PlayerCard::TeamStatusId))
                    .col(integer_null(PlayerCard::PlayerStatusId))
                    .col(integer_null(PlayerCard::LevelId))
                    .col(integer_null(PlayerCard::PositionId))
                    .col(integer_null(PlayerCard::FootId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_card_player_id")
                            .from(PlayerCard::Table, PlayerCard::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_card_team_status_id")
                            .from(PlayerCard::Table, PlayerCard::TeamStatusId)
                            .to(TeamStatus::Table, TeamStatus::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_card_player_status_id")
                            .from(PlayerCard::Table, PlayerCard::PlayerStatusId)
                            .to(PlayerStatus::Table, PlayerStatus::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_card_level_id")
                            .from(PlayerCard::Table, PlayerCard::LevelId)
                            .to(Level::Table, Level::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_card_position_id")
                            .from(PlayerCard::Table, PlayerCard::PositionId)
                            .to(Position::Table, Position::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_card_foot_id")
                            .from(PlayerCard::Table, PlayerCard::FootId)
                            .to(Foot::Table, Foot::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerCard::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerCard {
    Table,
    Id,
    PlayerId,
    Citizenship,
    ClubFrom,
    Growth,
    Weight,
    GameNum,
    Birthsday,
    Come,
    Leave,
    TeamStatusId,
    PlayerStatusId,
    LevelId,
    PositionId,
    FootId,
}
