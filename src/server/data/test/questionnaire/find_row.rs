use super::*;

/// Tests resolving an owned questionnaire row.
///
/// Expected: Ok(Some) for the owner, Ok(None) for anyone else
#[tokio::test]
async fn scopes_row_lookup_by_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let row = factory::create_user_questionnaire_row(db, owner.id).await?;
    let other = factory::create_user(db).await?;

    let repo = QuestionnaireRepository::new(db);
    assert!(repo
        .find_row(row.id, &Scope::Individual { user_id: owner.id })
        .await?
        .is_some());
    assert!(repo
        .find_row(row.id, &Scope::Individual { user_id: other.id })
        .await?
        .is_none());

    Ok(())
}

/// Tests that template questionnaire rows never resolve.
///
/// Expected: Ok(None) for a template row id
#[tokio::test]
async fn excludes_template_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let row = factory::questionnaire::QuestionnaireRowFactory::new(db)
        .user_id(user.id)
        .is_template(true)
        .build()
        .await?;

    let repo = QuestionnaireRepository::new(db);
    let found = repo
        .find_row(row.id, &Scope::Individual { user_id: user.id })
        .await?;

    assert!(found.is_none());

    Ok(())
}
