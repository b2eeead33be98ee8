use super::*;

/// Tests lazy card creation on the first write.
///
/// Expected: Ok with a new card carrying the submitted fields
#[tokio::test]
async fn creates_card_lazily_on_first_write() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, player) = factory::helpers::create_player_with_dependencies(db).await?;

    let repo = PlayerRepository::new(db);
    assert!(repo.find_card(player.id).await?.is_none());

    let card = repo
        .save_card(
            player.id,
            None,
            CardFields {
                citizenship: Some("England".to_string()),
                growth: Some(180),
                birthsday: NaiveDate::from_ymd_opt(2005, 6, 1),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(card.player_id, player.id);
    assert_eq!(card.citizenship.as_deref(), Some("England"));
    assert_eq!(card.growth, Some(180));
    assert_eq!(card.birthsday, NaiveDate::from_ymd_opt(2005, 6, 1));

    Ok(())
}

/// Tests that a second write updates the existing card in place.
///
/// Expected: Ok with the same card id and every field overwritten
#[tokio::test]
async fn overwrites_existing_card_in_place() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, player) = factory::helpers::create_player_with_dependencies(db).await?;

    let repo = PlayerRepository::new(db);
    let first = repo
        .save_card(
            player.id,
            None,
            CardFields {
                citizenship: Some("England".to_string()),
                weight: Some(70),
                ..Default::default()
            },
        )
        .await?;

    let existing = repo.find_card(player.id).await?;
    let second = repo
        .save_card(
            player.id,
            existing,
            CardFields {
                citizenship: Some("Scotland".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(second.id, first.id);
    assert_eq!(second.citizenship.as_deref(), Some("Scotland"));
    // Fields absent from the new write are cleared, not kept
    assert!(second.weight.is_none());

    let count = entity::prelude::PlayerCard::find()
        .filter(entity::player_card::Column::PlayerId.eq(player.id))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}
