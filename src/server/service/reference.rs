use sea_orm::DatabaseConnection;

use crate::server::{
    data::reference::ReferenceRepository,
    error::AppError,
    model::reference::{PlayerReferences, ReferenceData, ReferenceItem, ReferenceKind},
    util::lang::by_language_code,
};

/// Localizes one lookup table for the request language.
///
/// The label resolves through the row's translations map; rows without a
/// usable translation fall back to their machine name.
fn localize(rows: Vec<ReferenceData>, lang: &str) -> Vec<ReferenceItem> {
    rows.into_iter()
        .map(|row| {
            let title = by_language_code(row.translations.as_ref(), lang);
            ReferenceItem {
                id: row.id,
                title: if title.is_empty() {
                    row.name.clone()
                } else {
                    title
                },
                name: row.name,
            }
        })
        .collect()
}

pub struct ReferenceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReferenceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches all five player reference tables, labels localized to `lang`.
    pub async fn player_refs(&self, lang: &str) -> Result<PlayerReferences, AppError> {
        let repo = ReferenceRepository::new(self.db);

        Ok(PlayerReferences {
            team_status: localize(repo.all(ReferenceKind::TeamStatus).await?, lang),
            player_status: localize(repo.all(ReferenceKind::PlayerStatus).await?, lang),
            level: localize(repo.all(ReferenceKind::Level).await?, lang),
            position: localize(repo.all(ReferenceKind::Position).await?, lang),
            foot: localize(repo.all(ReferenceKind::Foot).await?, lang),
        })
    }
}
