//! Domain models and parameter types for player operations.

use chrono::NaiveDate;

use crate::model::player::{
    CharacteristicEntryDto, PlayerDetailDto, PlayerRowDto, QuestionnaireEntryDto, SubmitReportDto,
};
use crate::server::util::photo::photo_url;

/// An uploaded photo file from a profile submission.
pub struct PhotoUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Raw profile submission as it arrives off the wire.
///
/// Every field is an unparsed string; coercion into typed values happens in
/// the reconciler with the `util::field` helpers. The three characteristic
/// sequences and the two questionnaire sequences are parallel arrays.
#[derive(Default)]
pub struct PlayerSubmission {
    pub id: Option<String>,
    pub surname: Option<String>,
    pub name: Option<String>,
    pub patronymic: Option<String>,
    pub team: Option<String>,
    pub citizenship: Option<String>,
    pub club_from: Option<String>,
    pub growth: Option<String>,
    pub weight: Option<String>,
    pub game_num: Option<String>,
    pub birthsday: Option<String>,
    pub come: Option<String>,
    pub leave: Option<String>,
    pub team_status: Option<String>,
    pub player_status: Option<String>,
    pub level: Option<String>,
    pub position: Option<String>,
    pub foot: Option<String>,
    pub characteristics_id: Vec<String>,
    pub characteristics_stars: Vec<String>,
    pub characteristics_notes: Vec<String>,
    pub questionnaires_ids: Vec<String>,
    pub questionnaires_notes: Vec<String>,
    pub photo: Option<PhotoUpload>,
}

/// Typed player columns written by the reconciler.
///
/// `photo` is `Some` only when a new photo reference should replace the
/// stored one; `None` leaves the existing photo untouched.
pub struct PlayerFields {
    pub surname: String,
    pub name: String,
    pub patronymic: String,
    pub photo: Option<String>,
}

/// Typed card columns written by the reconciler.
///
/// All values already passed field coercion; anything malformed in the
/// submission is `None` here.
#[derive(Default)]
pub struct CardFields {
    pub citizenship: Option<String>,
    pub club_from: Option<String>,
    pub growth: Option<i32>,
    pub weight: Option<i32>,
    pub game_num: Option<i32>,
    pub birthsday: Option<NaiveDate>,
    pub come: Option<NaiveDate>,
    pub leave: Option<NaiveDate>,
    pub team_status_id: Option<i32>,
    pub player_status_id: Option<i32>,
    pub level_id: Option<i32>,
    pub position_id: Option<i32>,
    pub foot_id: Option<i32>,
}

/// Outcome of one profile submission.
///
/// The player write succeeded if this struct exists at all; card and row
/// outcomes are tracked individually since their failures are non-fatal.
pub struct SaveReport {
    pub player_id: i32,
    pub created: bool,
    pub card_saved: bool,
    pub characteristics_saved: usize,
    pub characteristics_failed: usize,
    pub questionnaires_saved: usize,
    pub questionnaires_failed: usize,
}

impl SaveReport {
    pub fn new(player_id: i32, created: bool) -> Self {
        Self {
            player_id,
            created,
            card_saved: false,
            characteristics_saved: 0,
            characteristics_failed: 0,
            questionnaires_saved: 0,
            questionnaires_failed: 0,
        }
    }

    /// Renders the human-readable multi-line account of the submission.
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();
        if self.created {
            lines.push(format!(
                "Player with id [{}] added successfully.",
                self.player_id
            ));
        } else {
            lines.push(format!(
                "Player with id [{}] edited successfully.",
                self.player_id
            ));
        }
        if self.card_saved {
            lines.push("Player card saved.".to_string());
        } else {
            lines.push("Error while saving player card.".to_string());
        }
        lines.push(format!(
            "{} characteristic entries saved.",
            self.characteristics_saved
        ));
        if self.characteristics_failed > 0 {
            lines.push(format!(
                "{} characteristic entries failed.",
                self.characteristics_failed
            ));
        }
        lines.push(format!(
            "{} questionnaire entries saved.",
            self.questionnaires_saved
        ));
        if self.questionnaires_failed > 0 {
            lines.push(format!(
                "{} questionnaire entries failed.",
                self.questionnaires_failed
            ));
        }
        lines.join("\n")
    }

    pub fn into_dto(self) -> SubmitReportDto {
        SubmitReportDto {
            id: self.player_id,
            created: self.created,
            summary: self.summary(),
        }
    }
}

/// Flat read-side projection of a player: entity, optional card, team name.
pub struct PlayerRow {
    pub player: entity::player::Model,
    pub card: Option<entity::player_card::Model>,
    pub team_name: String,
}

impl PlayerRow {
    pub fn into_dto(self) -> PlayerRowDto {
        let card = self.card;
        PlayerRowDto {
            id: self.player.id,
            surname: self.player.surname,
            name: self.player.name,
            patronymic: self.player.patronymic,
            citizenship: card
                .as_ref()
                .and_then(|c| c.citizenship.clone())
                .unwrap_or_default(),
            team: self.team_name,
            club_from: card
                .as_ref()
                .and_then(|c| c.club_from.clone())
                .unwrap_or_default(),
            growth: card.as_ref().and_then(|c| c.growth),
            weight: card.as_ref().and_then(|c| c.weight),
            game_num: card.as_ref().and_then(|c| c.game_num),
            birthsday: card.as_ref().and_then(|c| c.birthsday),
            come: card.as_ref().and_then(|c| c.come),
            leave: card.as_ref().and_then(|c| c.leave),
        }
    }
}

/// Trend of a characteristic row between its two most recent observations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    /// No prior observation to compare against.
    None,
    Equal,
    Up,
    Down,
}

impl Trend {
    /// Compares the latest value against the previous one, if any.
    pub fn between(latest: i32, previous: Option<i32>) -> Self {
        match previous {
            None => Self::None,
            Some(prev) if latest == prev => Self::Equal,
            Some(prev) if latest > prev => Self::Up,
            Some(_) => Self::Down,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "-",
            Self::Equal => "=",
            Self::Up => ">",
            Self::Down => "<",
        }
    }
}

/// Latest observation state for one characteristic row.
pub struct CharacteristicEntry {
    pub row_id: i32,
    pub value: i32,
    pub notes: String,
    pub diff: Trend,
}

/// Current answer for one questionnaire row.
pub struct QuestionnaireEntry {
    pub row_id: i32,
    pub notes: String,
}

/// Full single-player projection.
pub struct PlayerDetail {
    pub row: PlayerRow,
    pub characteristics: Vec<CharacteristicEntry>,
    pub questionnaires: Vec<QuestionnaireEntry>,
}

impl PlayerDetail {
    pub fn into_dto(self) -> PlayerDetailDto {
        let player = self.row.player;
        let card = self.row.card;
        PlayerDetailDto {
            id: player.id,
            surname: player.surname,
            name: player.name,
            patronymic: player.patronymic,
            team: player.team_id,
            team_name: self.row.team_name,
            photo: photo_url(&player.photo),
            citizenship: card.as_ref().and_then(|c| c.citizenship.clone()),
            club_from: card.as_ref().and_then(|c| c.club_from.clone()),
            growth: card.as_ref().and_then(|c| c.growth),
            weight: card.as_ref().and_then(|c| c.weight),
            game_num: card.as_ref().and_then(|c| c.game_num),
            birthsday: card.as_ref().and_then(|c| c.birthsday),
            come: card.as_ref().and_then(|c| c.come),
            leave: card.as_ref().and_then(|c| c.leave),
            team_status: card.as_ref().and_then(|c| c.team_status_id),
            player_status: card.as_ref().and_then(|c| c.player_status_id),
            level: card.as_ref().and_then(|c| c.level_id),
            position: card.as_ref().and_then(|c| c.position_id),
            foot: card.as_ref().and_then(|c| c.foot_id),
            characteristics: self
                .characteristics
                .into_iter()
                .map(|e| CharacteristicEntryDto {
                    row_id: e.row_id,
                    value: e.value,
                    notes: e.notes,
                    diff: e.diff.as_str().to_string(),
                })
                .collect(),
            questionnaires: self
                .questionnaires
                .into_iter()
                .map(|e| QuestionnaireEntryDto {
                    row_id: e.row_id,
                    notes: e.notes,
                })
                .collect(),
        }
    }
}

/// Sortable columns of the players table, in request index order.
///
/// The allow-list mirrors the table's column layout; anything outside it
/// falls back to sorting by id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortColumn {
    Id,
    Surname,
    Name,
    Patronymic,
    Citizenship,
    TeamName,
    ClubFrom,
    Growth,
    Weight,
    GameNum,
    Birthsday,
    Come,
    Leave,
}

impl SortColumn {
    /// Maps a requested column index onto the allow-list, defaulting to id.
    pub fn from_index(index: usize) -> Self {
        match index {
            1 => Self::Surname,
            2 => Self::Name,
            3 => Self::Patronymic,
            4 => Self::Citizenship,
            5 => Self::TeamName,
            6 => Self::ClubFrom,
            7 => Self::Growth,
            8 => Self::Weight,
            9 => Self::GameNum,
            10 => Self::Birthsday,
            11 => Self::Come,
            12 => Self::Leave,
            _ => Self::Id,
        }
    }
}

/// Table query parameters for the list view: page window, sort, search.
pub struct ListQuery {
    pub start: u64,
    pub length: u64,
    pub sort: SortColumn,
    pub descending: bool,
    pub search: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            start: 0,
            length: 10,
            sort: SortColumn::Id,
            descending: false,
            search: None,
        }
    }
}
