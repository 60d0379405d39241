use super::*;

/// Tests that omitting the role keeps the stored one.
///
/// Expected: admin stays admin after self-update without role
#[tokio::test]
async fn keeps_role_when_omitted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let actor = Identity {
        user_id: admin.id,
        role: UserRole::Admin,
    };

    let updated = UserService::new(db)
        .update(admin.id, input("new@hyrule.com", None), &actor)
        .await?
        .unwrap();

    assert_eq!(updated.role, UserRole::Admin);
    assert_eq!(updated.email, "new@hyrule.com");

    Ok(())
}

/// Tests a regular user trying to promote themselves.
///
/// Expected: role resolved to user
#[tokio::test]
async fn non_admin_cannot_promote_self() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let actor = Identity {
        user_id: user.id,
        role: UserRole::User,
    };

    let updated = UserService::new(db)
        .update(user.id, input(&user.email, Some(UserRole::Admin)), &actor)
        .await?
        .unwrap();

    assert_eq!(updated.role, UserRole::User);

    Ok(())
}

/// Tests updating a missing user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let actor = Identity {
        user_id: 1,
        role: UserRole::Admin,
    };
    let result = UserService::new(db)
        .update(99, input("x@hyrule.com", None), &actor)
        .await?;

    assert!(result.is_none());

    Ok(())
}
