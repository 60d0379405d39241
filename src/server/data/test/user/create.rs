use super::*;

/// Tests creating a user.
///
/// Expected: Ok with the stored fields and no password exposed
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            username: "link".to_string(),
            email: "link@hyrule.com".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::User,
        })
        .await?;

    assert_eq!(user.username, "link");
    assert_eq!(user.email, "link@hyrule.com");
    assert_eq!(user.role, UserRole::User);

    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?.unwrap();
    assert_eq!(stored.password, "hash");

    Ok(())
}

/// Tests the unique email constraint.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let params = CreateUserParams {
        username: "link".to_string(),
        email: "link@hyrule.com".to_string(),
        password_hash: "hash".to_string(),
        role: UserRole::User,
    };
    repo.create(params.clone()).await?;

    let result = repo.create(params).await;

    assert!(matches!(
        result.as_ref().err().and_then(|e| e.sql_err()),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
