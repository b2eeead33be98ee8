use super::*;

/// Tests the starts-with search property end to end.
///
/// Only players matching "Smi" at the start of a searched column come back.
///
/// Expected: Ok with the two matching players
#[tokio::test]
async fn search_returns_only_prefix_matches() -> Result<(), AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let team = factory::create_user_team(db, user.id).await?;
    for surname in ["Smith", "smirnov", "Blacksmith", "Jones"] {
        factory::player::PlayerFactory::new(db)
            .surname(surname)
            .user_id(user.id)
            .team_id(team.id)
            .build()
            .await?;
    }
    let actor = ActorContext::new(user);

    let rows = PlayerService::new(db)
        .list(
            &actor,
            team.id,
            &ListQuery {
                search: Some("Smi".to_string()),
                ..Default::default()
            },
        )
        .await?;

    let mut surnames: Vec<String> = rows.into_iter().map(|r| r.player.surname).collect();
    surnames.sort();
    // "Blacksmith" contains the term but does not start with it
    assert_eq!(surnames, vec!["Smith".to_string(), "smirnov".to_string()]);

    Ok(())
}

/// Tests the flat row projection of the list view.
///
/// Expected: Ok with card fields flattened and empty strings without a card
#[tokio::test]
async fn projects_flat_rows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, team, player) = factory::helpers::create_player_with_dependencies(db).await?;
    PlayerRepository::new(db)
        .save_card(
            player.id,
            None,
            crate::server::model::player::CardFields {
                citizenship: Some("England".to_string()),
                growth: Some(185),
                ..Default::default()
            },
        )
        .await?;
    let bare = factory::create_user_player(db, user.id, team.id).await?;
    let actor = ActorContext::new(user);

    let rows = PlayerService::new(db)
        .list(&actor, team.id, &ListQuery::default())
        .await?;
    assert_eq!(rows.len(), 2);

    let dtos: Vec<_> = rows
        .into_iter()
        .map(crate::server::model::player::PlayerRow::into_dto)
        .collect();
    let carded = dtos.iter().find(|d| d.id == player.id).unwrap();
    assert_eq!(carded.citizenship, "England");
    assert_eq!(carded.growth, Some(185));
    assert_eq!(carded.team, team.name);

    let plain = dtos.iter().find(|d| d.id == bare.id).unwrap();
    assert_eq!(plain.citizenship, "");
    assert!(plain.growth.is_none());

    Ok(())
}
