use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000005_create_player_table::Player,
    m20260105_000009_create_questionnaire_row_table::QuestionnaireRow,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(QuestionnaireAnswer::Table)
                    .if_not_exists()
                    .col(pk_auto(QuestionnaireAnswer::Id))
                    .col(integer(QuestionnaireAnswer::RowId))
                    .col(integer(QuestionnaireAnswer::PlayerId))
                    .col(integer_null(QuestionnaireAnswer::UserId))
                    .col(integer_null(QuestionnaireAnswer::ClubId))
                    .col(text(QuestionnaireAnswer::Notes))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_questionnaire_answer_row_id")
                            .from(QuestionnaireAnswer::Table, QuestionnaireAnswer::RowId)
                            .to(QuestionnaireRow::Table, QuestionnaireRow::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_questionnaire_answer_player_id")
                            .from(QuestionnaireAnswer::Table, QuestionnaireAnswer::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A row has exactly one live answer per player.
        manager
            .create_index(
                Index::create()
                    .name("idx_questionnaire_answer_row_player")
                    .table(QuestionnaireAnswer::Table)
                    .col(QuestionnaireAnswer::RowId)
                    .col(QuestionnaireAnswer::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(QuestionnaireAnswer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum QuestionnaireAnswer {
    Table,
    Id,
    RowId,
    PlayerId,
    UserId,
    ClubId,
    Notes,
}
