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
                    .table(QuestionnaireRow::Table)
                    .if_not_exists()
                    .col(pk_auto(QuestionnaireRow::Id))
                    .col(string(QuestionnaireRow::Name))
                    .col(boolean(QuestionnaireRow::IsTemplate).default(false))
                    .col(integer_null(QuestionnaireRow::UserId))
                    .col(integer_null(QuestionnaireRow::ClubId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_questionnaire_row_user_id")
                            .from(QuestionnaireRow::Table, QuestionnaireRow::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_questionnaire_row_club_id")
                            .from(QuestionnaireRow::Table, QuestionnaireRow::ClubId)
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
            .drop_table(Table::drop().table(QuestionnaireRow::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum QuestionnaireRow {
    Table,
    Id,
    Name,
    IsTemplate,
    UserId,
    ClubId,
}
