use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::actor::ActorContext,
};

/// Capabilities a handler may require before running its operation.
pub enum Permission {
    ViewPlayers,
    EditPlayers,
    DeletePlayers,
}

impl Permission {
    fn granted_to(&self, user: &entity::user::Model) -> bool {
        match self {
            Self::ViewPlayers => user.can_view_players,
            Self::EditPlayers => user.can_edit_players,
            Self::DeletePlayers => user.can_delete_players,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::ViewPlayers => "view players",
            Self::EditPlayers => "edit players",
            Self::DeletePlayers => "delete players",
        }
    }
}

/// Resolves the acting account from the session and enforces capabilities.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires an authenticated account holding every listed capability.
    ///
    /// An empty permission list requires authentication only. On success the
    /// returned [`ActorContext`] carries the account and its resolved scope
    /// for the rest of the request.
    ///
    /// # Returns
    /// - `Ok(ActorContext)` - Authenticated actor with all capabilities
    /// - `Err(AppError::AuthErr(_))` - Not logged in, stale session, or a
    ///   missing capability
    pub async fn require(&self, permissions: &[Permission]) -> Result<ActorContext, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            if !permission.granted_to(&user) {
                return Err(AuthError::AccessDenied(
                    user_id,
                    format!("missing the {} capability", permission.name()),
                )
                .into());
            }
        }

        Ok(ActorContext::new(user))
    }
}
