//! The acting account and its ownership scope.
//!
//! Request state (who is acting, in which scope) is carried explicitly in an
//! `ActorContext` threaded through every operation; nothing reads ambient
//! session state below the controller layer.

/// Ownership context of a request: an individual account or a club.
///
/// The two scopes are mutually exclusive. Queries over owned rows filter on
/// exactly one of the owner columns and must never mix the partitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    Individual { user_id: i32 },
    Club { club_id: i32 },
}

impl Scope {
    /// Derives the scope from an account: club members act in club scope.
    pub fn of(user: &entity::user::Model) -> Self {
        match user.club_id {
            Some(club_id) => Self::Club { club_id },
            None => Self::Individual { user_id: user.id },
        }
    }

    /// Owner column pair `(user_id, club_id)` for rows written in this scope.
    pub fn owner_pair(&self) -> (Option<i32>, Option<i32>) {
        match self {
            Self::Individual { user_id } => (Some(*user_id), None),
            Self::Club { club_id } => (None, Some(*club_id)),
        }
    }
}

/// The authenticated account together with its resolved scope.
pub struct ActorContext {
    pub user: entity::user::Model,
    pub scope: Scope,
}

impl ActorContext {
    pub fn new(user: entity::user::Model) -> Self {
        let scope = Scope::of(&user);
        Self { user, scope }
    }
}
