use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_club_table::Club;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string(User::Name))
                    .col(integer_null(User::ClubId))
                    .col(boolean(User::CanViewPlayers).default(false))
                    .col(boolean(User::CanEditPlayers).default(false))
                    .col(boolean(User::CanDeletePlayers).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_club_id")
                            .from(User::Table, User::ClubId)
                            .to(Club::Table, Club::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Name,
    ClubId,
    CanViewPlayers,
    CanEditPlayers,
    CanDeletePlayers,
}
