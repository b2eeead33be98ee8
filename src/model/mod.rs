//! Wire-level DTOs shared by all API endpoints.
//!
//! Every response body carries a `success` flag alongside either a data
//! payload or an error message; clients check the flag, not just the HTTP
//! status code.

pub mod api;
pub mod auth;
pub mod player;
pub mod reference;
