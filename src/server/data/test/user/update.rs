use super::*;

/// Tests replacing a user's fields.
///
/// Expected: Ok(Some) with the new values
#[tokio::test]
async fn updates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    let updated = repo
        .update(UpdateUserParams {
            id: user.id,
            username: "renamed".to_string(),
            email: "renamed@example.com".to_string(),
            password_hash: "new-hash".to_string(),
            role: UserRole::Admin,
        })
        .await?
        .unwrap();

    assert_eq!(updated.username, "renamed");
    assert_eq!(updated.role, UserRole::Admin);
    assert_eq!(updated.created_at, user.created_at);

    Ok(())
}

/// Tests updating a user that does not exist.
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
    let result = repo
        .update(UpdateUserParams {
            id: 999,
            username: "ghost".to_string(),
            email: "ghost@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::User,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
