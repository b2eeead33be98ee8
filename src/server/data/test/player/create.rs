use super::*;

/// Tests creating a player in individual scope.
///
/// Verifies that the repository records the creating user as the owner and
/// leaves the club column unset.
///
/// Expected: Ok with user-owned player bound to the team
#[tokio::test]
async fn creates_individual_player_bound_to_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let team = factory::create_user_team(db, user.id).await?;
    let actor = ActorContext::new(user.clone());

    let repo = PlayerRepository::new(db);
    let player = repo.create(&actor, team.id, plain_fields("Smith")).await?;

    assert_eq!(player.surname, "Smith");
    assert_eq!(player.team_id, team.id);
    assert_eq!(player.user_id, Some(user.id));
    assert!(player.club_id.is_none());
    assert!(player.photo.is_empty());

    Ok(())
}

/// Tests creating a player in club scope.
///
/// Verifies that the club owner column is set alongside the creating user.
///
/// Expected: Ok with club-owned player
#[tokio::test]
async fn creates_club_player_with_club_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let user = factory::create_club_user(db, club.id).await?;
    let team = factory::create_club_team(db, club.id).await?;
    let actor = ActorContext::new(user.clone());

    let repo = PlayerRepository::new(db);
    let player = repo.create(&actor, team.id, plain_fields("Meier")).await?;

    assert_eq!(player.club_id, Some(club.id));
    assert_eq!(player.user_id, Some(user.id));
    assert!(matches!(actor.scope, Scope::Club { club_id } if club_id == club.id));

    Ok(())
}
