use crate::server::{data::team::TeamRepository, model::actor::Scope};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
