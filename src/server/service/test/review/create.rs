use super::*;

/// Tests creating a review for a game that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_missing_game() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = ReviewService::new(db)
        .create(CreateReviewParams {
            user_id: user.id,
            game_id: 9999,
            title: "Ghost game".to_string(),
            content: String::new(),
            rating: 3,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests a second review of the same game by the same user.
///
/// Expected: Err(AppError::DbErr) carrying a unique violation
#[tokio::test]
async fn rejects_duplicate_review() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, game, _) = factory::helpers::create_review_with_dependencies(db).await?;

    let result = ReviewService::new(db)
        .create(CreateReviewParams {
            user_id: user.id,
            game_id: game.id,
            title: "Second thoughts".to_string(),
            content: String::new(),
            rating: 2,
        })
        .await;

    match result {
        Err(AppError::DbErr(err)) => assert!(matches!(
            err.sql_err(),
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
        )),
        other => panic!("expected unique violation, got {:?}", other.map(|r| r.id)),
    }

    Ok(())
}
