pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_club_table;
mod m20260105_000002_create_user_table;
mod m20260105_000003_create_team_table;
mod m20260105_000004_create_reference_tables;
mod m20260105_000005_create_player_table;
mod m20260105_000006_create_player_card_table;
mod m20260105_000007_create_characteristic_row_table;
mod m20260105_000008_create_characteristic_observation_table;
mod m20260105_000009_create_questionnaire_row_table;
mod m20260105_000010_create_questionnaire_answer_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_club_table::Migration),
            Box::new(m20260105_000002_create_user_table::Migration),
            Box::new(m20260105_000003_create_team_table::Migration),
            Box::new(m20260105_000004_create_reference_tables::Migration),
            Box::new(m20260105_000005_create_player_table::Migration),
            Box::new(m20260105_000006_create_player_card_table::Migration),
            Box::new(m20260105_000007_create_characteristic_row_table::Migration),
            Box::new(m20260105_000008_create_characteristic_observation_table::Migration),
            Box::new(m20260105_000009_create_questionnaire_row_table::Migration),
            Box::new(m20260105_000010_create_questionnaire_answer_table::Migration),
        ]
    }
}
