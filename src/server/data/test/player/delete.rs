use super::*;

/// Tests that deleting a player removes everything it owns.
///
/// Verifies the explicit cascade: card, characteristic observations, and
/// questionnaire answers are deleted together with the player row.
///
/// Expected: Ok with no orphaned dependent rows
#[tokio::test]
async fn deletes_player_and_cascades_to_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, player) = factory::helpers::create_player_with_dependencies(db).await?;
    let row = factory::create_user_characteristic_row(db, user.id).await?;
    let question = factory::create_user_questionnaire_row(db, user.id).await?;

    let repo = PlayerRepository::new(db);
    repo.save_card(player.id, None, CardFields::default()).await?;

    entity::characteristic_observation::ActiveModel {
        row_id: ActiveValue::Set(row.id),
        player_id: ActiveValue::Set(player.id),
        user_id: ActiveValue::Set(Some(user.id)),
        club_id: ActiveValue::Set(None),
        date_creation: ActiveValue::Set(NaiveDate::from_ymd_opt(2026, 1, 10).unwrap()),
        value: ActiveValue::Set(3),
        notes: ActiveValue::Set(String::new()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    entity::questionnaire_answer::ActiveModel {
        row_id: ActiveValue::Set(question.id),
        player_id: ActiveValue::Set(player.id),
        user_id: ActiveValue::Set(Some(user.id)),
        club_id: ActiveValue::Set(None),
        notes: ActiveValue::Set("note".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    repo.delete(player.clone()).await?;

    assert!(entity::prelude::Player::find_by_id(player.id)
        .one(db)
        .await?
        .is_none());

    let cards = entity::prelude::PlayerCard::find()
        .filter(entity::player_card::Column::PlayerId.eq(player.id))
        .count(db)
        .await?;
    assert_eq!(cards, 0);

    let observations = entity::prelude::CharacteristicObservation::find()
        .filter(entity::characteristic_observation::Column::PlayerId.eq(player.id))
        .count(db)
        .await?;
    assert_eq!(observations, 0);

    let answers = entity::prelude::QuestionnaireAnswer::find()
        .filter(entity::questionnaire_answer::Column::PlayerId.eq(player.id))
        .count(db)
        .await?;
    assert_eq!(answers, 0);

    Ok(())
}

/// Tests that deleting one player leaves other players' records alone.
///
/// Expected: Ok with the sibling player and its rows untouched
#[tokio::test]
async fn leaves_other_players_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, team, player) = factory::helpers::create_player_with_dependencies(db).await?;
    let sibling = factory::create_user_player(db, user.id, team.id).await?;

    let repo = PlayerRepository::new(db);
    repo.save_card(sibling.id, None, CardFields::default()).await?;

    repo.delete(player).await?;

    assert!(entity::prelude::Player::find_by_id(sibling.id)
        .one(db)
        .await?
        .is_some());
    assert!(repo.find_card(sibling.id).await?.is_some());

    Ok(())
}
