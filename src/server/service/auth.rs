use sea_orm::DatabaseConnection;

use crate::server::{data::user::UserRepository, error::AppError};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the account for a session bootstrap.
    ///
    /// Authentication proper lives outside this application; this narrow
    /// collaborator only establishes which known account a session belongs to.
    pub async fn login(&self, user_id: i32) -> Result<entity::user::Model, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found.".to_string()))?;

        tracing::info!("User {} logged in", user.id);

        Ok(user)
    }
}
