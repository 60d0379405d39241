use super::*;

/// Tests creating a review returns author and game details.
///
/// Expected: Ok with username, game title, genre and platform populated
#[tokio::test]
async fn creates_review_with_joined_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("link")
        .build()
        .await?;
    let game = factory::game::GameFactory::new(db)
        .title("Breath of the Wild")
        .genre("Action-Adventure")
        .platform("Nintendo Switch")
        .build()
        .await?;

    let repo = ReviewRepository::new(db);
    let review = repo
        .create(CreateReviewParams {
            user_id: user.id,
            game_id: game.id,
            title: "Masterpiece".to_string(),
            content: "Climb anything.".to_string(),
            rating: 5,
        })
        .await?;

    assert_eq!(review.username, "link");
    assert_eq!(review.game_title, "Breath of the Wild");
    assert_eq!(review.game_genre.as_deref(), Some("Action-Adventure"));
    assert_eq!(review.game_platform.as_deref(), Some("Nintendo Switch"));
    assert_eq!(review.rating, 5);

    Ok(())
}

/// Tests one review per user per game.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_second_review_of_same_game() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, game, _) = factory::helpers::create_review_with_dependencies(db).await?;

    let repo = ReviewRepository::new(db);
    let result = repo
        .create(CreateReviewParams {
            user_id: user.id,
            game_id: game.id,
            title: "Again".to_string(),
            content: String::new(),
            rating: 4,
        })
        .await;

    assert!(matches!(
        result.as_ref().err().and_then(|e| e.sql_err()),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests the rating check constraint.
///
/// Expected: Err for a rating outside 1 to 5
#[tokio::test]
async fn rejects_out_of_range_rating() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;

    let repo = ReviewRepository::new(db);
    let result = repo
        .create(CreateReviewParams {
            user_id: user.id,
            game_id: game.id,
            title: "Too good".to_string(),
            content: String::new(),
            rating: 6,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
