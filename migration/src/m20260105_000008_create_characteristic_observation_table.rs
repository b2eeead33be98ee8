use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000005_create_player_table::Player,
    m20260105_000007_create_characteristic_row_table::CharacteristicRow,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CharacteristicObservation::Table)
                    .if_not_exists()
                    .col(pk_auto(CharacteristicObservation::Id))
                    .col(integer(CharacteristicObservation::RowId))
                    .col(integer(CharacteristicObservation::PlayerId))
                    .col(integer_null(CharacteristicObservation::UserId))
                    .col(integer_null(CharacteristicObservation::ClubId))
                    .col(date(CharacteristicObservation::DateCreation))
                    .col(integer(CharacteristicObservation::Value).default(0))
                    .col(text(CharacteristicObservation::Notes))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_characteristic_observation_row_id")
                            .from(
                                CharacteristicObservation::Table,
                                CharacteristicObservation::RowId,
                            )
                            .to(CharacteristicRow::Table, CharacteristicRow::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_characteristic_observation_player_id")
                            .from(
                                CharacteristicObservation::Table,
                                CharacteristicObservation::PlayerId,
                            )
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One observation per (row, player, day); same-day submissions update
        // in place instead of inserting.
        manager
            .create_index(
                Index::create()
                    .name("idx_characteristic_observation_row_player_date")
                    .table(CharacteristicObservation::Table)
                    .col(CharacteristicObservation::RowId)
                    .col(CharacteristicObservation::PlayerId)
                    .col(CharacteristicObservation::DateCreation)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(CharacteristicObservation::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum CharacteristicObservation {
    Table,
    Id,
    RowId,
    PlayerId,
    UserId,
    ClubId,
    DateCreation,
    Value,
    Notes,
}
