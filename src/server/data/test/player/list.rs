use super::*;

async fn named_player(
    db: &sea_orm::DatabaseConnection,
    user_id: i32,
    team_id: i32,
    surname: &str,
) -> Result<entity::player::Model, DbErr> {
    factory::player::PlayerFactory::new(db)
        .surname(surname)
        .user_id(user_id)
        .team_id(team_id)
        .build()
        .await
}

/// Tests the case-insensitive starts-with search over the surname column.
///
/// Expected: Ok with only players whose surname starts with the term
#[tokio::test]
async fn search_matches_surname_prefix_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let team = factory::create_user_team(db, user.id).await?;
    named_player(db, user.id, team.id, "Smith").await?;
    named_player(db, user.id, team.id, "smythe").await?;
    named_player(db, user.id, team.id, "Jones").await?;

    let repo = PlayerRepository::new(db);
    let scope = Scope::Individual { user_id: user.id };
    let rows = repo
        .list(
            &scope,
            team.id,
            &ListQuery {
                search: Some("Sm".to_string()),
                ..Default::default()
            },
        )
        .await?;

    let mut surnames: Vec<String> = rows.into_iter().map(|r| r.player.surname).collect();
    surnames.sort();
    assert_eq!(surnames, vec!["Smith".to_string(), "smythe".to_string()]);

    Ok(())
}

/// Tests that the search also covers card citizenship.
///
/// Expected: Ok with the player matched through its card column
#[tokio::test]
async fn search_matches_card_citizenship() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let team = factory::create_user_team(db, user.id).await?;
    let matched = named_player(db, user.id, team.id, "Jones").await?;
    named_player(db, user.id, team.id, "Brown").await?;

    let repo = PlayerRepository::new(db);
    repo.save_card(
        matched.id,
        None,
        CardFields {
            citizenship: Some("Wales".to_string()),
            ..Default::default()
        },
    )
    .await?;

    let scope = Scope::Individual { user_id: user.id };
    let rows = repo
        .list(
            &scope,
            team.id,
            &ListQuery {
                search: Some("wal".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].player.id, matched.id);
    assert_eq!(rows[0].team_name, team.name);

    Ok(())
}

/// Tests the page window.
///
/// Expected: Ok with `length` rows starting at offset `start`
#[tokio::test]
async fn applies_page_window() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let team = factory::create_user_team(db, user.id).await?;
    for surname in ["A", "B", "C", "D", "E"] {
        named_player(db, user.id, team.id, surname).await?;
    }

    let repo = PlayerRepository::new(db);
    let scope = Scope::Individual { user_id: user.id };
    let rows = repo
        .list(
            &scope,
            team.id,
            &ListQuery {
                start: 1,
                length: 2,
                sort: SortColumn::Surname,
                ..Default::default()
            },
        )
        .await?;

    let surnames: Vec<String> = rows.into_iter().map(|r| r.player.surname).collect();
    assert_eq!(surnames, vec!["B".to_string(), "C".to_string()]);

    Ok(())
}

/// Tests descending sort on an allow-listed column.
///
/// Expected: Ok with rows ordered by surname descending
#[tokio::test]
async fn sorts_by_surname_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let team = factory::create_user_team(db, user.id).await?;
    for surname in ["Adams", "Clark", "Baker"] {
        named_player(db, user.id, team.id, surname).await?;
    }

    let repo = PlayerRepository::new(db);
    let scope = Scope::Individual { user_id: user.id };
    let rows = repo
        .list(
            &scope,
            team.id,
            &ListQuery {
                sort: SortColumn::Surname,
                descending: true,
                ..Default::default()
            },
        )
        .await?;

    let surnames: Vec<String> = rows.into_iter().map(|r| r.player.surname).collect();
    assert_eq!(
        surnames,
        vec!["Clark".to_string(), "Baker".to_string(), "Adams".to_string()]
    );

    Ok(())
}

/// Tests that the listing never crosses team or owner boundaries.
///
/// Expected: Ok with only the requested team's players for the actor
#[tokio::test]
async fn filters_to_scope_and_team() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let team = factory::create_user_team(db, user.id).await?;
    let mine = named_player(db, user.id, team.id, "Mine").await?;

    let other_team = factory::create_user_team(db, user.id).await?;
    named_player(db, user.id, other_team.id, "OtherTeam").await?;

    let stranger = factory::create_user(db).await?;
    let stranger_team = factory::create_user_team(db, stranger.id).await?;
    named_player(db, stranger.id, stranger_team.id, "Stranger").await?;

    let repo = PlayerRepository::new(db);
    let scope = Scope::Individual { user_id: user.id };
    let rows = repo.list(&scope, team.id, &ListQuery::default()).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].player.id, mine.id);

    Ok(())
}
