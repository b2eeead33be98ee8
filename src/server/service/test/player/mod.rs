use crate::server::{
    data::{characteristic::CharacteristicRepository, player::PlayerRepository},
    error::{player::PlayerError, AppError},
    model::{
        actor::{ActorContext, Scope},
        player::{ListQuery, PlayerSubmission},
    },
    service::{photo::PhotoStorage, player::PlayerService},
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod detail;
mod list;
mod save_profile;

fn photos() -> PhotoStorage {
    PhotoStorage::new(std::env::temp_dir().join("rosterboard-test-media"))
}

/// A minimal submission carrying only an identifier and a surname.
fn submission(id: i32, surname: &str) -> PlayerSubmission {
    PlayerSubmission {
        id: Some(id.to_string()),
        surname: Some(surname.to_string()),
        name: Some("John".to_string()),
        ..Default::default()
    }
}
