use super::*;

/// Tests listing reviews of a missing game.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn get_by_game_requires_game() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ReviewService::new(db)
        .get_by_game(5, ListOptions::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests listing reviews of one user.
///
/// Expected: only that user's reviews, filter echoed
#[tokio::test]
async fn get_by_user_filters_author() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, review) = factory::helpers::create_review_with_dependencies(db).await?;
    factory::helpers::create_review_with_dependencies(db).await?;

    let reviews = ReviewService::new(db)
        .get_by_user(user.id, ListOptions::default())
        .await?;

    assert_eq!(reviews.page.pagination.total_records, 1);
    assert_eq!(reviews.page.records[0].id, review.id);
    assert_eq!(reviews.filters.user_id, Some(user.id));

    let missing = ReviewService::new(db)
        .get_by_user(user.id + 100, ListOptions::default())
        .await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}
