use crate::server::{
    data::reference::ReferenceRepository, model::reference::ReferenceKind,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod resolve;
