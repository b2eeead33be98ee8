use crate::server::{
    data::player::PlayerRepository,
    model::{
        actor::{ActorContext, Scope},
        player::{CardFields, ListQuery, PlayerFields, SortColumn},
    },
};
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod list;
mod save_card;

fn plain_fields(surname: &str) -> PlayerFields {
    PlayerFields {
        surname: surname.to_string(),
        name: String::new(),
        patronymic: String::new(),
        photo: None,
    }
}
