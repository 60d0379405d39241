use super::*;

/// Tests creating a game.
///
/// Expected: Ok with matching fields and equal timestamps
#[tokio::test]
async fn creates_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    let game = repo.create(params("Elden Ring")).await?;

    assert_eq!(game.title, "Elden Ring");
    assert_eq!(game.release_date, NaiveDate::from_ymd_opt(2022, 2, 25));
    assert_eq!(game.created_at, game.updated_at);
    assert!(repo.exists(game.id).await?);
    assert!(!repo.exists(game.id + 1).await?);

    Ok(())
}
