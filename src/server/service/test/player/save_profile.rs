use super::*;

/// Tests the create path of the reconciler.
///
/// A submission with id -1 creates exactly one new player bound to the
/// current team.
///
/// Expected: Ok with created=true and one player in the store
#[tokio::test]
async fn creates_new_player_for_negative_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let team = factory::create_user_team(db, user.id).await?;
    let actor = ActorContext::new(user);

    let service = PlayerService::new(db);
    let report = service
        .save_profile(&actor, team.id, submission(-1, "Smith"), &photos())
        .await?;

    assert!(report.created);
    assert!(report.card_saved);

    let players = entity::prelude::Player::find()
        .filter(entity::player::Column::TeamId.eq(team.id))
        .all(db)
        .await?;
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].surname, "Smith");
    assert_eq!(players[0].id, report.player_id);

    Ok(())
}

/// Tests the update path of the reconciler.
///
/// Resubmitting with an existing player's id overwrites its fields without
/// creating a duplicate.
///
/// Expected: Ok with created=false and still one player
#[tokio::test]
async fn updates_existing_player_without_duplicate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, team, player) = factory::helpers::create_player_with_dependencies(db).await?;
    let actor = ActorContext::new(user);

    let service = PlayerService::new(db);
    let report = service
        .save_profile(&actor, team.id, submission(player.id, "Renamed"), &photos())
        .await?;

    assert!(!report.created);
    assert_eq!(report.player_id, player.id);

    let players = entity::prelude::Player::find()
        .filter(entity::player::Column::TeamId.eq(team.id))
        .all(db)
        .await?;
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].surname, "Renamed");

    Ok(())
}

/// Tests team validation on the create path.
///
/// A team outside the actor's scope fails the whole submission before any
/// write.
///
/// Expected: Err(TeamNotFound) and an empty player store
#[tokio::test]
async fn rejects_team_outside_scope() -> Result<(), AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let foreign_team = factory::create_user_team(db, stranger.id).await?;
    let actor = ActorContext::new(user);

    let service = PlayerService::new(db);
    let result = service
        .save_profile(&actor, foreign_team.id, submission(-1, "Smith"), &photos())
        .await;

    assert!(matches!(
        result,
        Err(AppError::PlayerErr(PlayerError::TeamNotFound))
    ));

    let count = entity::prelude::Player::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests team reassignment through the submission's team field.
///
/// Expected: Ok with the player moved to the submitted team
#[tokio::test]
async fn reassigns_team_from_submission_field() -> Result<(), AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, team, player) = factory::helpers::create_player_with_dependencies(db).await?;
    let new_team = factory::create_user_team(db, user.id).await?;
    let actor = ActorContext::new(user);

    let mut sub = submission(player.id, "Smith");
    sub.team = Some(new_team.id.to_string());

    let service = PlayerService::new(db);
    service
        .save_profile(&actor, team.id, sub, &photos())
        .await?;

    let moved = entity::prelude::Player::find_by_id(player.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(moved.team_id, new_team.id);

    Ok(())
}

/// Tests that a malformed submitted team fails rather than silently
/// falling back.
///
/// Expected: Err(TeamNotFound)
#[tokio::test]
async fn rejects_malformed_team_field() -> Result<(), AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let team = factory::create_user_team(db, user.id).await?;
    let actor = ActorContext::new(user);

    let mut sub = submission(-1, "Smith");
    sub.team = Some("not a team id".to_string());

    let service = PlayerService::new(db);
    let result = service.save_profile(&actor, team.id, sub, &photos()).await;

    assert!(matches!(
        result,
        Err(AppError::PlayerErr(PlayerError::TeamNotFound))
    ));

    Ok(())
}

/// Tests card field coercion through a full submission.
///
/// Well-formed values land typed on the card; malformed values and dead
/// reference ids silently become unset instead of failing the operation.
///
/// Expected: Ok with a card carrying the coerced mixture
#[tokio::test]
async fn coerces_card_fields_softly() -> Result<(), AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let team = factory::create_user_team(db, user.id).await?;
    let position = factory::reference::create_position(db, None).await?;
    let actor = ActorContext::new(user);

    let mut sub = submission(-1, "Smith");
    sub.citizenship = Some("England".to_string());
    sub.growth = Some("180".to_string());
    sub.weight = Some("not a number".to_string());
    sub.birthsday = Some("31/01/2005".to_string());
    sub.come = Some("2025-08-01".to_string());
    sub.leave = Some("someday".to_string());
    sub.position = Some(position.id.to_string());
    sub.foot = Some("9999".to_string());

    let service = PlayerService::new(db);
    let report = service.save_profile(&actor, team.id, sub, &photos()).await?;
    assert!(report.card_saved);

    let card = PlayerRepository::new(db)
        .find_card(report.player_id)
        .await?
        .unwrap();
    assert_eq!(card.citizenship.as_deref(), Some("England"));
    assert_eq!(card.growth, Some(180));
    assert!(card.weight.is_none());
    assert_eq!(
        card.birthsday,
        chrono::NaiveDate::from_ymd_opt(2005, 1, 31)
    );
    assert_eq!(card.come, chrono::NaiveDate::from_ymd_opt(2025, 8, 1));
    assert!(card.leave.is_none());
    assert_eq!(card.position_id, Some(position.id));
    assert!(card.foot_id.is_none());

    Ok(())
}

/// Tests the parallel-array length guard.
///
/// Mismatched characteristic sequences skip the whole batch but the player
/// and card writes still succeed.
///
/// Expected: Ok with zero characteristic entries and card_saved=true
#[tokio::test]
async fn skips_characteristics_on_length_mismatch() -> Result<(), AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let team = factory::create_user_team(db, user.id).await?;
    let row = factory::create_user_characteristic_row(db, user.id).await?;
    let actor = ActorContext::new(user);

    let mut sub = submission(-1, "Smith");
    sub.characteristics_id = vec![row.id.to_string(), row.id.to_string()];
    sub.characteristics_stars = vec!["3".to_string()];
    sub.characteristics_notes = vec!["a".to_string(), "b".to_string()];

    let service = PlayerService::new(db);
    let report = service.save_profile(&actor, team.id, sub, &photos()).await?;

    assert!(report.card_saved);
    assert_eq!(report.characteristics_saved, 0);
    assert_eq!(report.characteristics_failed, 0);

    let count = entity::prelude::CharacteristicObservation::find()
        .count(db)
        .await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests the per-day observation invariant within a single submission.
///
/// The same row submitted twice in one batch lands as one observation
/// holding the last value.
///
/// Expected: Ok with one observation, value 4
#[tokio::test]
async fn same_row_twice_in_one_day_keeps_latest_value() -> Result<(), AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let team = factory::create_user_team(db, user.id).await?;
    let row = factory::create_user_characteristic_row(db, user.id).await?;
    let actor = ActorContext::new(user);

    let mut sub = submission(-1, "Smith");
    sub.characteristics_id = vec![row.id.to_string(), row.id.to_string()];
    sub.characteristics_stars = vec!["2".to_string(), "4".to_string()];
    sub.characteristics_notes = vec!["first".to_string(), "second".to_string()];

    let service = PlayerService::new(db);
    let report = service.save_profile(&actor, team.id, sub, &photos()).await?;
    assert_eq!(report.characteristics_saved, 2);

    let observations = entity::prelude::CharacteristicObservation::find()
        .filter(entity::characteristic_observation::Column::RowId.eq(row.id))
        .all(db)
        .await?;
    assert_eq!(observations.len(), 1);
    assert_eq!(observations[0].value, 4);
    assert_eq!(observations[0].notes, "second");

    Ok(())
}

/// Tests that unresolvable rows are skipped without blocking the batch.
///
/// A foreign row and a malformed id contribute nothing while the valid entry
/// still lands.
///
/// Expected: Ok with exactly one observation saved
#[tokio::test]
async fn skips_unresolvable_rows_in_batch() -> Result<(), AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let team = factory::create_user_team(db, user.id).await?;
    let mine = factory::create_user_characteristic_row(db, user.id).await?;
    let stranger = factory::create_user(db).await?;
    let foreign = factory::create_user_characteristic_row(db, stranger.id).await?;
    let actor = ActorContext::new(user);

    let mut sub = submission(-1, "Smith");
    sub.characteristics_id = vec![
        foreign.id.to_string(),
        "garbage".to_string(),
        mine.id.to_string(),
    ];
    sub.characteristics_stars = vec!["5".to_string(), "5".to_string(), "3".to_string()];
    sub.characteristics_notes = vec![String::new(), String::new(), "kept".to_string()];

    let service = PlayerService::new(db);
    let report = service.save_profile(&actor, team.id, sub, &photos()).await?;

    assert_eq!(report.characteristics_saved, 1);
    assert_eq!(report.characteristics_failed, 0);

    let observations = entity::prelude::CharacteristicObservation::find()
        .all(db)
        .await?;
    assert_eq!(observations.len(), 1);
    assert_eq!(observations[0].row_id, mine.id);
    assert_eq!(observations[0].notes, "kept");

    Ok(())
}

/// Tests questionnaire reconciliation across two submissions.
///
/// The second submission replaces the live answer instead of appending.
///
/// Expected: Ok with a single answer holding the latest note
#[tokio::test]
async fn questionnaire_answer_updates_in_place() -> Result<(), AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let team = factory::create_user_team(db, user.id).await?;
    let row = factory::create_user_questionnaire_row(db, user.id).await?;
    let actor = ActorContext::new(user);

    let service = PlayerService::new(db);

    let mut first = submission(-1, "Smith");
    first.questionnaires_ids = vec![row.id.to_string()];
    first.questionnaires_notes = vec!["initial".to_string()];
    let report = service
        .save_profile(&actor, team.id, first, &photos())
        .await?;
    assert_eq!(report.questionnaires_saved, 1);

    let mut second = submission(report.player_id, "Smith");
    second.questionnaires_ids = vec![row.id.to_string()];
    second.questionnaires_notes = vec!["revised".to_string()];
    service
        .save_profile(&actor, team.id, second, &photos())
        .await?;

    let answers = entity::prelude::QuestionnaireAnswer::find()
        .filter(entity::questionnaire_answer::Column::RowId.eq(row.id))
        .all(db)
        .await?;
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].notes, "revised");

    Ok(())
}

/// Tests the report summary rendering.
///
/// Expected: a multi-line account naming the player, card, and row counts
#[tokio::test]
async fn report_summary_enumerates_outcomes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let team = factory::create_user_team(db, user.id).await?;
    let row = factory::create_user_characteristic_row(db, user.id).await?;
    let actor = ActorContext::new(user);

    let mut sub = submission(-1, "Smith");
    sub.characteristics_id = vec![row.id.to_string()];
    sub.characteristics_stars = vec!["3".to_string()];
    sub.characteristics_notes = vec![String::new()];

    let service = PlayerService::new(db);
    let report = service.save_profile(&actor, team.id, sub, &photos()).await?;

    let summary = report.summary();
    let lines: Vec<&str> = summary.lines().collect();
    assert!(lines[0].contains(&format!("[{}]", report.player_id)));
    assert!(lines[0].contains("added"));
    assert!(summary.contains("Player card saved."));
    assert!(summary.contains("1 characteristic entries saved."));
    assert!(summary.contains("0 questionnaire entries saved."));

    Ok(())
}
