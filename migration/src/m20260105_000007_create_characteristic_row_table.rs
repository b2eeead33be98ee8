use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_club_table::Club, m20260105_000002_create_user_table::User,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CharacteristicRow::Table)
                    .if_not_exists()
                    .col(pk_auto(CharacteristicRow::Id))
                    .col(string(CharacteristicRow::Name))
                    .col(integer_null(CharacteristicRow::ParentId))
                    .col(boolean(CharacteristicRow::IsTemplate).default(false))
                    .col(integer_null(CharacteristicRow::UserId))
                    .col(integer_null(CharacteristicRow::ClubId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_characteristic_row_parent_id")
                            .from(CharacteristicRow::Table, CharacteristicRow::ParentId)
                            .to(CharacteristicRow::Table, CharacteristicRow::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_characteristic_row_user_id")
                            .from(CharacteristicRow::Table, CharacteristicRow::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_characteristic_row_club_id")
                            .from(CharacteristicRow::Table, CharacteristicRow::ClubId)
                            .to(Club::Table, Club::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CharacteristicRow::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CharacteristicRow {
    Table,
    Id,
    Name,
    ParentId,
    IsTemplate,
    UserId,
    ClubId,
}
