use super::*;

/// Tests deleting a review.
///
/// Expected: Ok(Some) then Ok(None) on repeat
#[tokio::test]
async fn deletes_review() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, review) = factory::helpers::create_review_with_dependencies(db).await?;
    let repo = ReviewRepository::new(db);

    let deleted = repo.delete(review.id).await?.unwrap();
    assert_eq!(deleted.id, review.id);

    assert!(repo.delete(review.id).await?.is_none());
    assert!(repo.find_by_id(review.id).await?.is_none());

    Ok(())
}
