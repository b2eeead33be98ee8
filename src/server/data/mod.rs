//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! parameter models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.
//!
//! Every query over owned rows filters on exactly one ownership partition
//! (`user_id` for individual scope, `club_id` for club scope), derived from the
//! request's [`Scope`](crate::server::model::actor::Scope).

pub mod characteristic;
pub mod player;
pub mod questionnaire;
pub mod reference;
pub mod team;
pub mod user;
