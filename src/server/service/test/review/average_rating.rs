use super::*;

/// Tests the average of a game's ratings.
///
/// Expected: 4.33 over three reviews
#[tokio::test]
async fn averages_ratings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    for rating in [5, 4, 4] {
        let user = factory::create_user(db).await?;
        factory::review::ReviewFactory::new(db, user.id, game.id)
            .rating(rating)
            .build()
            .await?;
    }

    let average = ReviewService::new(db).average_rating(game.id).await?;

    assert_eq!(average.average_rating, Some(4.33));
    assert_eq!(average.review_count, 3);

    Ok(())
}

/// Tests a game with no reviews.
///
/// Expected: null average and zero count
#[tokio::test]
async fn null_average_without_reviews() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let average = ReviewService::new(db).average_rating(game.id).await?;

    assert_eq!(average.average_rating, None);
    assert_eq!(average.review_count, 0);

    Ok(())
}
