//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let team = factory::team::create_user_team(&db, user.id).await?;
//!
//!     // Create a user together with a team and a player on it
//!     let (user, team, player) = factory::helpers::create_player_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .name("Coach")
//!     .can_delete_players(false)
//!     .build()
//!     .await?;
//! ```

pub mod characteristic;
pub mod club;
pub mod helpers;
pub mod player;
pub mod questionnaire;
pub mod reference;
pub mod team;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use characteristic::{create_club_characteristic_row, create_user_characteristic_row};
pub use club::create_club;
pub use player::{create_club_player, create_user_player};
pub use questionnaire::{create_club_questionnaire_row, create_user_questionnaire_row};
pub use team::{create_club_team, create_user_team};
pub use user::{create_club_user, create_user};
