use super::*;

/// Tests rating range, game filter and joined names together.
///
/// Expected: only reviews of the first game rated 2 to 4
#[tokio::test]
async fn filters_by_rating_range_and_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    let other = factory::create_game(db).await?;
    for rating in 1..=5 {
        let user = factory::create_user(db).await?;
        factory::review::ReviewFactory::new(db, user.id, game.id)
            .rating(rating)
            .build()
            .await?;
        factory::review::ReviewFactory::new(db, user.id, other.id)
            .rating(rating)
            .build()
            .await?;
    }

    let repo = ReviewRepository::new(db);
    let query = ReviewListQuery {
        options: ListOptions::new(None, None, Some("rating"), Some("asc"), None),
        rating: Some(RatingFilter::Range(2, 4)),
        game_id: Some(game.id),
        ..Default::default()
    };
    let page = repo.get_all(&query).await?;

    let ratings: Vec<_> = page.records.iter().map(|r| r.rating).collect();
    assert_eq!(ratings, vec![2, 3, 4]);
    assert!(page.records.iter().all(|r| r.game_title == game.title));

    Ok(())
}

/// Tests filtering by author with search on title.
///
/// Expected: the author's single matching review
#[tokio::test]
async fn filters_by_user_and_search() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::create_game(db).await?;
    let second = factory::create_game(db).await?;
    factory::review::ReviewFactory::new(db, user.id, first.id)
        .title("Absolutely stunning")
        .build()
        .await?;
    factory::review::ReviewFactory::new(db, user.id, second.id)
        .title("Mediocre")
        .build()
        .await?;

    let repo = ReviewRepository::new(db);
    let query = ReviewListQuery {
        options: ListOptions::new(None, None, None, None, Some("STUNNING")),
        user_id: Some(user.id),
        ..Default::default()
    };
    let page = repo.get_all(&query).await?;

    assert_eq!(page.pagination.total_records, 1);
    assert_eq!(page.records[0].game_id, first.id);
    assert_eq!(page.records[0].username, user.username);

    Ok(())
}

/// Tests pagination over joined rows.
///
/// Expected: total counts every review, page holds the limit
#[tokio::test]
async fn paginates_joined_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    for _ in 0..7 {
        let user = factory::create_user(db).await?;
        factory::create_review(db, user.id, game.id).await?;
    }

    let repo = ReviewRepository::new(db);
    let query = ReviewListQuery {
        options: ListOptions::new(Some(2), Some(5), None, None, None),
        ..Default::default()
    };
    let page = repo.get_all(&query).await?;

    assert_eq!(page.records.len(), 2);
    assert_eq!(page.pagination.total_records, 7);
    assert_eq!(page.pagination.total_pages, 2);

    Ok(())
}
