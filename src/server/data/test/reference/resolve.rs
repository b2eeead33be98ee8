use super::*;

/// Tests resolving a live reference id from a raw field.
///
/// Expected: Ok(Some(id)) for an existing row in the matching table
#[tokio::test]
async fn resolves_live_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let position = factory::reference::create_position(db, None).await?;

    let repo = ReferenceRepository::new(db);
    let raw = position.id.to_string();
    let resolved = repo
        .resolve(ReferenceKind::Position, Some(raw.as_str()))
        .await?;

    assert_eq!(resolved, Some(position.id));

    Ok(())
}

/// Tests the soft-failure contract of reference resolution.
///
/// Malformed input, absent input, and dead ids all degrade to None rather
/// than raising.
///
/// Expected: Ok(None) in every case
#[tokio::test]
async fn degrades_to_none_on_bad_input() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReferenceRepository::new(db);

    assert!(repo
        .resolve(ReferenceKind::Foot, Some("not a number"))
        .await?
        .is_none());
    assert!(repo.resolve(ReferenceKind::Foot, None).await?.is_none());
    assert!(repo.resolve(ReferenceKind::Foot, Some("9999")).await?.is_none());

    Ok(())
}

/// Tests that resolution never crosses lookup tables.
///
/// Expected: Ok(None) when the id only exists in another table
#[tokio::test]
async fn does_not_resolve_across_tables() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let level = factory::reference::create_level(db, None).await?;

    let repo = ReferenceRepository::new(db);
    let raw = level.id.to_string();
    let resolved = repo
        .resolve(ReferenceKind::Foot, Some(raw.as_str()))
        .await?;

    assert!(resolved.is_none());

    Ok(())
}

/// Tests fetching a whole lookup table.
///
/// Expected: Ok with every row and its translations map
#[tokio::test]
async fn fetches_all_rows_of_a_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let translations = factory::reference::translations_en_ru("Right", "Правая");
    factory::reference::create_foot(db, Some(translations)).await?;
    factory::reference::create_foot(db, None).await?;

    let repo = ReferenceRepository::new(db);
    let rows = repo.all(ReferenceKind::Foot).await?;

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().any(|r| r.translations.is_some()));

    Ok(())
}
