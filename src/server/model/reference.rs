//! Domain models for the player reference lookup tables.

use crate::model::reference::{PlayerReferencesDto, ReferenceItemDto};

/// Identifies one of the five player lookup tables.
///
/// Each kind is statically associated with its table; resolving a submitted
/// id dispatches on this enum rather than a string tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReferenceKind {
    TeamStatus,
    PlayerStatus,
    Level,
    Position,
    Foot,
}

/// One lookup row as stored: machine name plus raw translations map.
pub struct ReferenceData {
    pub id: i32,
    pub name: String,
    pub translations: Option<serde_json::Value>,
}

/// One lookup row with its label resolved for a request language.
pub struct ReferenceItem {
    pub id: i32,
    pub name: String,
    pub title: String,
}

impl ReferenceItem {
    pub fn into_dto(self) -> ReferenceItemDto {
        ReferenceItemDto {
            id: self.id,
            name: self.name,
            title: self.title,
        }
    }
}

/// All five localized reference tables for the references endpoint.
pub struct PlayerReferences {
    pub team_status: Vec<ReferenceItem>,
    pub player_status: Vec<ReferenceItem>,
    pub level: Vec<ReferenceItem>,
    pub position: Vec<ReferenceItem>,
    pub foot: Vec<ReferenceItem>,
}

impl PlayerReferences {
    pub fn into_dto(self) -> PlayerReferencesDto {
        let convert = |items: Vec<ReferenceItem>| {
            items.into_iter().map(ReferenceItem::into_dto).collect()
        };
        PlayerReferencesDto {
            team_status: convert(self.team_status),
            player_status: convert(self.player_status),
            level: convert(self.level),
            position: convert(self.position),
            foot: convert(self.foot),
        }
    }
}
