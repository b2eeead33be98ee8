use super::*;

use chrono::NaiveDate;

fn day(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, day).unwrap()
}

/// Tests every trend marker of the detail projection.
///
/// Four rows: a single observation ("-"), an unchanged pair ("="), an
/// increase (">"), and a decrease ("<").
///
/// Expected: Ok with the matching diff per row
#[tokio::test]
async fn attaches_trend_markers_per_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, team, player) = factory::helpers::create_player_with_dependencies(db).await?;
    let scope = Scope::Individual { user_id: user.id };

    let lone = factory::create_user_characteristic_row(db, user.id).await?;
    let steady = factory::create_user_characteristic_row(db, user.id).await?;
    let rising = factory::create_user_characteristic_row(db, user.id).await?;
    let falling = factory::create_user_characteristic_row(db, user.id).await?;

    let repo = CharacteristicRepository::new(db);
    repo.upsert_observation(lone.id, player.id, &scope, day(2), 3, "only")
        .await?;
    repo.upsert_observation(steady.id, player.id, &scope, day(1), 3, "")
        .await?;
    repo.upsert_observation(steady.id, player.id, &scope, day(2), 3, "")
        .await?;
    repo.upsert_observation(rising.id, player.id, &scope, day(1), 2, "")
        .await?;
    repo.upsert_observation(rising.id, player.id, &scope, day(2), 5, "")
        .await?;
    repo.upsert_observation(falling.id, player.id, &scope, day(1), 5, "")
        .await?;
    repo.upsert_observation(falling.id, player.id, &scope, day(2), 1, "")
        .await?;

    let actor = ActorContext::new(user);
    let detail = PlayerService::new(db)
        .get_detail(&actor, team.id, player.id)
        .await?;
    let dto = detail.into_dto();

    let diff_of = |row_id: i32| {
        dto.characteristics
            .iter()
            .find(|e| e.row_id == row_id)
            .map(|e| e.diff.clone())
            .unwrap()
    };
    assert_eq!(diff_of(lone.id), "-");
    assert_eq!(diff_of(steady.id), "=");
    assert_eq!(diff_of(rising.id), ">");
    assert_eq!(diff_of(falling.id), "<");

    // Latest values win
    let rising_entry = dto
        .characteristics
        .iter()
        .find(|e| e.row_id == rising.id)
        .unwrap();
    assert_eq!(rising_entry.value, 5);

    Ok(())
}

/// Tests that rows without observations stay out of the projection.
///
/// Expected: Ok with an empty characteristics list
#[tokio::test]
async fn omits_rows_without_observations() -> Result<(), AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, team, player) = factory::helpers::create_player_with_dependencies(db).await?;
    factory::create_user_characteristic_row(db, user.id).await?;

    let actor = ActorContext::new(user);
    let detail = PlayerService::new(db)
        .get_detail(&actor, team.id, player.id)
        .await?;

    assert!(detail.characteristics.is_empty());

    Ok(())
}

/// Tests questionnaire notes and the flattened card in the projection.
///
/// Expected: Ok with the answer attached and card fields flat on the DTO
#[tokio::test]
async fn flattens_card_and_attaches_answers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, team, player) = factory::helpers::create_player_with_dependencies(db).await?;
    let row = factory::create_user_questionnaire_row(db, user.id).await?;
    let scope = Scope::Individual { user_id: user.id };

    crate::server::data::questionnaire::QuestionnaireRepository::new(db)
        .upsert_answer(row.id, player.id, &scope, "works hard")
        .await?;
    PlayerRepository::new(db)
        .save_card(
            player.id,
            None,
            crate::server::model::player::CardFields {
                citizenship: Some("England".to_string()),
                game_num: Some(9),
                ..Default::default()
            },
        )
        .await?;

    let actor = ActorContext::new(user);
    let dto = PlayerService::new(db)
        .get_detail(&actor, team.id, player.id)
        .await?
        .into_dto();

    assert_eq!(dto.citizenship.as_deref(), Some("England"));
    assert_eq!(dto.game_num, Some(9));
    assert_eq!(dto.team, team.id);
    assert_eq!(dto.team_name, team.name);
    assert_eq!(dto.questionnaires.len(), 1);
    assert_eq!(dto.questionnaires[0].row_id, row.id);
    assert_eq!(dto.questionnaires[0].notes, "works hard");

    Ok(())
}

/// Tests photo normalization in the projection.
///
/// A conventional stored reference becomes a `/media/...` path; anything
/// else degrades to an empty string.
///
/// Expected: Ok with the normalized photo field
#[tokio::test]
async fn normalizes_photo_reference() -> Result<(), AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let team = factory::create_user_team(db, user.id).await?;
    let player = factory::player::PlayerFactory::new(db)
        .user_id(user.id)
        .team_id(team.id)
        .photo("players/img/42.jpg")
        .build()
        .await?;

    let actor = ActorContext::new(user);
    let dto = PlayerService::new(db)
        .get_detail(&actor, team.id, player.id)
        .await?
        .into_dto();

    assert_eq!(dto.photo, "/media/players/img/42.jpg");

    Ok(())
}

/// Tests scope enforcement on the detail read.
///
/// Expected: Err(NotFound) for a foreign player
#[tokio::test]
async fn foreign_player_yields_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team, player) = factory::helpers::create_player_with_dependencies(db).await?;
    let intruder = factory::create_user(db).await?;
    let actor = ActorContext::new(intruder);

    let result = PlayerService::new(db)
        .get_detail(&actor, team.id, player.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::PlayerErr(PlayerError::NotFound))
    ));

    Ok(())
}
