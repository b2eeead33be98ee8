use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// The five player lookup tables share one shape: id, machine name, and a
/// JSON map of language code to display label.
fn lookup_table<T>(table: T, id: T, name: T, translations: T) -> TableCreateStatement
where
    T: Iden + Copy + Send + Sync + 'static,
{
    Table::create()
        .table(table)
        .if_not_exists()
        .col(pk_auto(id))
        .col(string(name))
        .col(json_null(translations))
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(lookup_table(
                TeamStatus::Table,
                TeamStatus::Id,
                TeamStatus::Name,
                TeamStatus::Translations,
            ))
            .await?;
        manager
            .create_table(lookup_table(
                PlayerStatus::Table,
                PlayerStatus::Id,
                PlayerStatus::Name,
                PlayerStatus::Translations,
            ))
            .await?;
        manager
            .create_table(lookup_table(
                Level::Table,
                Level::Id,
                Level::Name,
                Level::Translations,
            ))
            .await?;
        manager
            .create_table(lookup_table(
                Position::Table,
                Position::Id,
                Position::Name,
                Position::Translations,
            ))
            .await?;
        manager
            .create_table(lookup_table(
                Foot::Table,
                Foot::Id,
                Foot::Name,
                Foot::Translations,
            ))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Foot::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Position::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Level::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PlayerStatus::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TeamStatus::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden, Clone, Copy)]
pub enum TeamStatus {
    Table,
    Id,
    Name,
    Translations,
}

#[derive(DeriveIden, Clone, Copy)]
pub enum PlayerStatus {
    Table,
    Id,
    Name,
    Translations,
}

#[derive(DeriveIden, Clone, Copy)]
pub enum Level {
    Table,
    Id,
    Name,
    Translations,
}

#[derive(DeriveIden, Clone, Copy)]
pub enum Position {
    Table,
    Id,
    Name,
    Translations,
}

#[derive(DeriveIden, Clone, Copy)]
pub enum Foot {
    Table,
    Id,
    Name,
    Translations,
}
