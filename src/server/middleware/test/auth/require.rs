use super::*;

/// Tests a request without a token.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let credentials = Credentials::default();

    let result = AuthGuard::new(db, &tokens, &credentials).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token signed with another secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_forged_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let forger = TokenService::new("other-secret", Duration::from_secs(3600));
    let credentials = Credentials::bearer(token_for(&forger, user));
    let tokens = tokens();

    let result = AuthGuard::new(db, &tokens, &credentials).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token whose user has been deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_token_for_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = factory::create_user(db).await?;
    let user_id = user.id;
    let credentials = Credentials::bearer(token_for(&tokens, user));
    <entity::prelude::User as sea_orm::EntityTrait>::delete_by_id(user_id)
        .exec(db)
        .await?;

    let result = AuthGuard::new(db, &tokens, &credentials).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) if id == user_id
    ));

    Ok(())
}

/// Tests the admin permission.
///
/// Expected: admin passes, regular user gets AccessDenied
#[tokio::test]
async fn admin_permission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let admin = factory::user::create_admin(db).await?;
    let user = factory::create_user(db).await?;
    let user_id = user.id;

    let admin_credentials = Credentials::bearer(token_for(&tokens, admin));
    let identity = AuthGuard::new(db, &tokens, &admin_credentials)
        .require(&[Permission::Admin])
        .await?;
    assert!(identity.is_admin());

    let user_credentials = Credentials::bearer(token_for(&tokens, user));
    let result = AuthGuard::new(db, &tokens, &user_credentials)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(id, message))) => {
            assert_eq!(id, user_id);
            assert!(message.contains("admin"));
        }
        other => panic!("expected AccessDenied, got {:?}", other),
    }

    Ok(())
}

/// Tests an admin demoted after their token was issued.
///
/// Expected: the stored role applies, so the old admin token gets AccessDenied
#[tokio::test]
async fn demoted_admin_loses_admin_permission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let admin = factory::user::create_admin(db).await?;
    let credentials = Credentials::bearer(token_for(&tokens, admin.clone()));

    let mut demoted: entity::user::ActiveModel = admin.into();
    demoted.role = ActiveValue::Set(UserRole::User);
    demoted.update(db).await?;

    let result = AuthGuard::new(db, &tokens, &credentials)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let identity = AuthGuard::new(db, &tokens, &credentials).require(&[]).await?;
    assert!(!identity.is_admin());

    Ok(())
}

/// Tests owner and owner-or-admin permissions.
///
/// Expected: owner passes both, stranger fails both, admin passes owner-or-admin only
#[tokio::test]
async fn owner_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let owner = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let owner_id = owner.id;

    let owner_credentials = Credentials::bearer(token_for(&tokens, owner));
    let stranger_credentials = Credentials::bearer(token_for(&tokens, stranger));
    let admin_credentials = Credentials::bearer(token_for(&tokens, admin));

    for permission in [Permission::Owner(owner_id), Permission::OwnerOrAdmin(owner_id)] {
        assert!(AuthGuard::new(db, &tokens, &owner_credentials)
            .require(&[permission])
            .await
            .is_ok());
    }

    for permission in [Permission::Owner(owner_id), Permission::OwnerOrAdmin(owner_id)] {
        assert!(matches!(
            AuthGuard::new(db, &tokens, &stranger_credentials)
                .require(&[permission])
                .await,
            Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
        ));
    }

    assert!(AuthGuard::new(db, &tokens, &admin_credentials)
        .require(&[Permission::OwnerOrAdmin(owner_id)])
        .await
        .is_ok());
    assert!(AuthGuard::new(db, &tokens, &admin_credentials)
        .require(&[Permission::Owner(owner_id)])
        .await
        .is_err());

    Ok(())
}
