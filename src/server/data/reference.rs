use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};

use crate::server::{
    model::reference::{ReferenceData, ReferenceKind},
    util::field::int_field,
};

pub struct ReferenceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReferenceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether the lookup table selected by `kind` contains `id`.
    pub async fn exists(&self, kind: ReferenceKind, id: i32) -> Result<bool, DbErr> {
        let count = match kind {
            ReferenceKind::TeamStatus => {
                entity::prelude::TeamStatus::find_by_id(id).count(self.db).await?
            }
            ReferenceKind::PlayerStatus => {
                entity::prelude::PlayerStatus::find_by_id(id).count(self.db).await?
            }
            ReferenceKind::Level => entity::prelude::Level::find_by_id(id).count(self.db).await?,
            ReferenceKind::Position => {
                entity::prelude::Position::find_by_id(id).count(self.db).await?
            }
            ReferenceKind::Foot => entity::prelude::Foot::find_by_id(id).count(self.db).await?,
        };

        Ok(count > 0)
    }

    /// Resolves a raw submitted field to a live reference id.
    ///
    /// The field is parsed as an integer and probed against the table selected
    /// by `kind`. A malformed value, a missing field, or an id with no live
    /// row all resolve to `None`; only a real lookup failure is an error.
    pub async fn resolve(
        &self,
        kind: ReferenceKind,
        raw: Option<&str>,
    ) -> Result<Option<i32>, DbErr> {
        let Some(id) = int_field(raw, None) else {
            return Ok(None);
        };

        Ok(self.exists(kind, id).await?.then_some(id))
    }

    /// Fetches every row of the lookup table selected by `kind`.
    pub async fn all(&self, kind: ReferenceKind) -> Result<Vec<ReferenceData>, DbErr> {
        let rows = match kind {
            ReferenceKind::TeamStatus => entity::prelude::TeamStatus::find()
                .all(self.db)
                .await?
                .into_iter()
                .map(|m| ReferenceData {
                    id: m.id,
                    name: m.name,
                    translations: m.translations,
                })
                .collect(),
            ReferenceKind::PlayerStatus => entity::prelude::PlayerStatus::find()
                .all(self.db)
                .await?
                .into_iter()
                .map(|m| ReferenceData {
                    id: m.id,
                    name: m.name,
                    translations: m.translations,
                })
                .collect(),
            ReferenceKind::Level => entity::prelude::Level::find()
                .all(self.db)
                .await?
                .into_iter()
                .map(|m| ReferenceData {
                    id: m.id,
                    name: m.name,
                    translations: m.translations,
                })
                .collect(),
            ReferenceKind::Position => entity::prelude::Position::find()
                .all(self.db)
                .await?
                .into_iter()
                .map(|m| ReferenceData {
                    id: m.id,
                    name: m.name,
                    translations: m.translations,
                })
                .collect(),
            ReferenceKind::Foot => entity::prelude::Foot::find()
                .all(self.db)
                .await?
                .into_iter()
                .map(|m| ReferenceData {
                    id: m.id,
                    name: m.name,
                    translations: m.translations,
                })
                .collect(),
        };

        Ok(rows)
    }
}
