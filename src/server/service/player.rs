use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{
        characteristic::CharacteristicRepository, player::PlayerRepository,
        questionnaire::QuestionnaireRepository, reference::ReferenceRepository,
        team::TeamRepository,
    },
    error::{player::PlayerError, AppError},
    model::{
        actor::ActorContext,
        player::{
            CardFields, CharacteristicEntry, ListQuery, PlayerDetail, PlayerFields,
            PlayerRow, PlayerSubmission, QuestionnaireEntry, SaveReport, Trend,
        },
        reference::ReferenceKind,
    },
    service::photo::PhotoStorage,
    util::field::{date_field, int_field},
};

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reconciles a profile submission into the player and its dependents.
    ///
    /// Creates or updates the player identified by the submission, then
    /// upserts the card, the dated characteristic observations, and the
    /// questionnaire answers. Validation failures (`TeamNotFound`) and a
    /// rejected player write (`SaveFailed`) abort before anything else runs;
    /// once the player write stands, card and per-row failures are recorded
    /// in the report and do not roll anything back. The player write and the
    /// card write are two separate persistence operations, not atomic with
    /// each other.
    ///
    /// # Arguments
    /// - `actor` - The acting account and scope
    /// - `team_id` - The current team, replaced by the submission's team
    ///   field when one is supplied
    /// - `submission` - Raw profile submission
    /// - `photos` - Storage for an uploaded photo, if the submission has one
    ///
    /// # Returns
    /// - `Ok(SaveReport)` - The player write succeeded; per-part outcomes inside
    /// - `Err(AppError::PlayerErr(_))` - Invalid team or rejected player write
    pub async fn save_profile(
        &self,
        actor: &ActorContext,
        team_id: i32,
        submission: PlayerSubmission,
        photos: &PhotoStorage,
    ) -> Result<SaveReport, AppError> {
        let repo = PlayerRepository::new(self.db);

        let player_id = int_field(submission.id.as_deref(), Some(-1)).unwrap_or(-1);
        let existing = if player_id > 0 {
            repo.find_owned(player_id, &actor.scope, team_id).await?
        } else {
            None
        };

        // Team binding: an explicit submission value wins over the current
        // team and must resolve within scope before anything is written.
        let target_team_id = match submission
            .team
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            Some(raw) => int_field(Some(raw), None).ok_or(PlayerError::TeamNotFound)?,
            None => team_id,
        };
        let team = TeamRepository::new(self.db)
            .find_in_scope(target_team_id, &actor.scope)
            .await?
            .ok_or(PlayerError::TeamNotFound)?;

        // Coerce card fields up front; reference resolution is read-only and
        // degrades malformed or dead ids to unset fields.
        let card_fields = self.card_fields(&submission).await?;

        let photo = match &submission.photo {
            Some(upload) if !upload.bytes.is_empty() => {
                Some(photos.store(&upload.file_name, &upload.bytes).await?)
            }
            _ => None,
        };

        let fields = PlayerFields {
            surname: submission.surname.clone().unwrap_or_default(),
            name: submission.name.clone().unwrap_or_default(),
            patronymic: submission.patronymic.clone().unwrap_or_default(),
            photo,
        };

        let (player, created) = match existing {
            Some(player) => {
                let updated = repo
                    .update(player, team.id, fields)
                    .await
                    .map_err(PlayerError::SaveFailed)?;
                (updated, false)
            }
            None => {
                let inserted = repo
                    .create(actor, team.id, fields)
                    .await
                    .map_err(PlayerError::SaveFailed)?;
                (inserted, true)
            }
        };

        let mut report = SaveReport::new(player.id, created);

        // The card write is non-fatal: the player write already stands.
        let card_result = async {
            let existing_card = repo.find_card(player.id).await?;
            repo.save_card(player.id, existing_card, card_fields).await
        }
        .await;
        match card_result {
            Ok(_) => report.card_saved = true,
            Err(err) => {
                tracing::warn!("Failed to save card for player {}: {}", player.id, err);
            }
        }

        self.reconcile_characteristics(actor, &player, &submission, &mut report)
            .await;
        self.reconcile_questionnaires(actor, &player, &submission, &mut report)
            .await;

        Ok(report)
    }

    /// Coerces the card columns from the raw submission.
    async fn card_fields(&self, submission: &PlayerSubmission) -> Result<CardFields, DbErr> {
        let refs = ReferenceRepository::new(self.db);

        Ok(CardFields {
            citizenship: submission.citizenship.clone(),
            club_from: submission.club_from.clone(),
            growth: int_field(submission.growth.as_deref(), None),
            weight: int_field(submission.weight.as_deref(), None),
            game_num: int_field(submission.game_num.as_deref(), None),
            birthsday: date_field(submission.birthsday.as_deref(), None),
            come: date_field(submission.come.as_deref(), None),
            leave: date_field(submission.leave.as_deref(), None),
            team_status_id: refs
                .resolve(ReferenceKind::TeamStatus, submission.team_status.as_deref())
                .await?,
            player_status_id: refs
                .resolve(
                    ReferenceKind::PlayerStatus,
                    submission.player_status.as_deref(),
                )
                .await?,
            level_id: refs
                .resolve(ReferenceKind::Level, submission.level.as_deref())
                .await?,
            position_id: refs
                .resolve(ReferenceKind::Position, submission.position.as_deref())
                .await?,
            foot_id: refs
                .resolve(ReferenceKind::Foot, submission.foot.as_deref())
                .await?,
        })
    }

    /// Upserts today's observation for each submitted characteristic entry.
    ///
    /// A length mismatch between the three parallel sequences drops the whole
    /// batch. Per entry: an unresolvable row is skipped silently, a failed
    /// write is counted and the loop continues.
    async fn reconcile_characteristics(
        &self,
        actor: &ActorContext,
        player: &entity::player::Model,
        submission: &PlayerSubmission,
        report: &mut SaveReport,
    ) {
        let ids = &submission.characteristics_id;
        let stars = &submission.characteristics_stars;
        let notes = &submission.characteristics_notes;
        if ids.len() != stars.len() || stars.len() != notes.len() {
            return;
        }

        let repo = CharacteristicRepository::new(self.db);
        let today = Utc::now().date_naive();

        for index in 0..ids.len() {
            let row_id = int_field(Some(ids[index].as_str()), Some(-1)).unwrap_or(-1);
            let value = int_field(Some(stars[index].as_str()), Some(0)).unwrap_or(0);
            let note = notes[index].as_str();

            let outcome = async {
                let Some(row) = repo.find_row(row_id, &actor.scope).await? else {
                    return Ok::<bool, DbErr>(false);
                };
                repo.upsert_observation(row.id, player.id, &actor.scope, today, value, note)
                    .await?;
                Ok(true)
            }
            .await;

            match outcome {
                Ok(true) => report.characteristics_saved += 1,
                Ok(false) => {}
                Err(err) => {
                    tracing::warn!(
                        "Failed to save characteristic {} for player {}: {}",
                        row_id,
                        player.id,
                        err
                    );
                    report.characteristics_failed += 1;
                }
            }
        }
    }

    /// Upserts the live answer for each submitted questionnaire entry.
    ///
    /// Same skip and failure rules as the characteristics batch, over the
    /// (ids, notes) pair of sequences.
    async fn reconcile_questionnaires(
        &self,
        actor: &ActorContext,
        player: &entity::player::Model,
        submission: &PlayerSubmission,
        report: &mut SaveReport,
    ) {
        let ids = &submission.questionnaires_ids;
        let notes = &submission.questionnaires_notes;
        if ids.len() != notes.len() {
            return;
        }

        let repo = QuestionnaireRepository::new(self.db);

        for index in 0..ids.len() {
            let row_id = int_field(Some(ids[index].as_str()), Some(-1)).unwrap_or(-1);
            let note = notes[index].as_str();

            let outcome = async {
                let Some(row) = repo.find_row(row_id, &actor.scope).await? else {
                    return Ok::<bool, DbErr>(false);
                };
                repo.upsert_answer(row.id, player.id, &actor.scope, note).await?;
                Ok(true)
            }
            .await;

            match outcome {
                Ok(true) => report.questionnaires_saved += 1,
                Ok(false) => {}
                Err(err) => {
                    tracing::warn!(
                        "Failed to save questionnaire {} for player {}: {}",
                        row_id,
                        player.id,
                        err
                    );
                    report.questionnaires_failed += 1;
                }
            }
        }
    }

    /// Deletes a player owned by the actor, cascading to its card,
    /// observations, and answers.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the deleted player
    /// - `Err(AppError::PlayerErr(NotFound))` - Missing or foreign target; no
    ///   store mutation occurs
    pub async fn delete(
        &self,
        actor: &ActorContext,
        team_id: i32,
        id: i32,
    ) -> Result<i32, AppError> {
        let repo = PlayerRepository::new(self.db);

        let Some(player) = repo.find_owned(id, &actor.scope, team_id).await? else {
            return Err(PlayerError::NotFound.into());
        };

        repo.delete(player).await?;

        Ok(id)
    }

    /// Builds the full single-player projection.
    ///
    /// Flattens player and card, resolves the team name, then attaches the
    /// latest observation plus trend marker for every visible characteristic
    /// row and the current answer for every visible questionnaire row.
    pub async fn get_detail(
        &self,
        actor: &ActorContext,
        team_id: i32,
        id: i32,
    ) -> Result<PlayerDetail, AppError> {
        let repo = PlayerRepository::new(self.db);

        let Some(player) = repo.find_owned(id, &actor.scope, team_id).await? else {
            return Err(PlayerError::NotFound.into());
        };
        let card = repo.find_card(player.id).await?;
        let team_name = TeamRepository::new(self.db)
            .find_by_id(player.team_id)
            .await?
            .map(|t| t.name)
            .unwrap_or_default();

        let characteristic_repo = CharacteristicRepository::new(self.db);
        let mut characteristics = Vec::new();
        for row in characteristic_repo.visible_rows(&actor.scope).await? {
            let observations = characteristic_repo
                .latest_observations(row.id, player.id, &actor.scope, 2)
                .await?;
            let Some(latest) = observations.first() else {
                continue;
            };
            characteristics.push(CharacteristicEntry {
                row_id: row.id,
                value: latest.value,
                notes: latest.notes.clone(),
                diff: Trend::between(latest.value, observations.get(1).map(|o| o.value)),
            });
        }

        let questionnaire_repo = QuestionnaireRepository::new(self.db);
        let mut questionnaires = Vec::new();
        for row in questionnaire_repo.visible_rows(&actor.scope).await? {
            if let Some(answer) = questionnaire_repo
                .find_answer(row.id, player.id, &actor.scope)
                .await?
            {
                questionnaires.push(QuestionnaireEntry {
                    row_id: row.id,
                    notes: answer.notes,
                });
            }
        }

        Ok(PlayerDetail {
            row: PlayerRow {
                player,
                card,
                team_name,
            },
            characteristics,
            questionnaires,
        })
    }

    /// Fetches one page of the players table for the actor's scope.
    pub async fn list(
        &self,
        actor: &ActorContext,
        team_id: i32,
        query: &ListQuery,
    ) -> Result<Vec<PlayerRow>, AppError> {
        let rows = PlayerRepository::new(self.db)
            .list(&actor.scope, team_id, query)
            .await?;

        Ok(rows)
    }
}
