use super::*;

/// Tests aggregating ratings for one game.
///
/// Expected: mean and count of that game's reviews only
#[tokio::test]
async fn summarizes_ratings_of_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let other = factory::create_game(db).await?;
    for rating in [5, 4, 4] {
        let user = factory::create_user(db).await?;
        factory::review::ReviewFactory::new(db, user.id, game.id)
            .rating(rating)
            .build()
            .await?;
    }
    let user = factory::create_user(db).await?;
    factory::review::ReviewFactory::new(db, user.id, other.id)
        .rating(1)
        .build()
        .await?;

    let repo = ReviewRepository::new(db);
    let (mean, count) = repo.rating_summary(game.id).await?;

    assert_eq!(count, 3);
    assert!((mean.unwrap() - 13.0 / 3.0).abs() < 1e-9);

    Ok(())
}

/// Tests a game with no reviews.
///
/// Expected: no mean and a zero count
#[tokio::test]
async fn summary_is_empty_without_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let repo = ReviewRepository::new(db);

    assert_eq!(repo.rating_summary(game.id).await?, (None, 0));
    assert_eq!(repo.rating_summary(game.id + 10).await?, (None, 0));

    Ok(())
}
