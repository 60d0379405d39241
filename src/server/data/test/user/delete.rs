use super::*;

/// Tests deleting a user removes their reviews.
///
/// Expected: Ok(Some) with the deleted user and no reviews left
#[tokio::test]
async fn deletes_user_and_cascades_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _) = factory::helpers::create_review_with_dependencies(db).await?;
    let repo = UserRepository::new(db);

    let deleted = repo.delete(user.id).await?.unwrap();

    assert_eq!(deleted.id, user.id);
    assert!(repo.find_by_id(user.id).await?.is_none());
    assert!(entity::prelude::Review::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.delete(42).await?.is_none());

    Ok(())
}
