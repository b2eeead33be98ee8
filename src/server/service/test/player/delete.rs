use super::*;

/// Tests deleting an owned player through the service.
///
/// Expected: Ok(id) with the player and its dependents gone
#[tokio::test]
async fn deletes_owned_player() -> Result<(), AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, team, player) = factory::helpers::create_player_with_dependencies(db).await?;
    let actor = ActorContext::new(user);

    let service = PlayerService::new(db);
    let deleted = service.delete(&actor, team.id, player.id).await?;

    assert_eq!(deleted, player.id);
    assert!(entity::prelude::Player::find_by_id(player.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests that a nonexistent id yields NotFound and no mutation.
///
/// Expected: Err(NotFound), store unchanged
#[tokio::test]
async fn missing_player_yields_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, team, player) = factory::helpers::create_player_with_dependencies(db).await?;
    let actor = ActorContext::new(user);

    let service = PlayerService::new(db);
    let result = service.delete(&actor, team.id, player.id + 999).await;

    assert!(matches!(
        result,
        Err(AppError::PlayerErr(PlayerError::NotFound))
    ));
    assert!(entity::prelude::Player::find_by_id(player.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests that a foreign-owned player cannot be deleted.
///
/// Expected: Err(NotFound), the foreign player survives
#[tokio::test]
async fn foreign_player_yields_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team, player) = factory::helpers::create_player_with_dependencies(db).await?;
    let intruder = factory::create_user(db).await?;
    let actor = ActorContext::new(intruder);

    let service = PlayerService::new(db);
    let result = service.delete(&actor, team.id, player.id).await;

    assert!(matches!(
        result,
        Err(AppError::PlayerErr(PlayerError::NotFound))
    ));
    assert!(entity::prelude::Player::find_by_id(player.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
