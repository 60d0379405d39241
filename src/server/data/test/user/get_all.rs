use super::*;

/// Tests filtering by role.
///
/// Expected: only admins returned, with matching total
#[tokio::test]
async fn filters_by_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    factory::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;

    let repo = UserRepository::new(db);
    let query = UserListQuery {
        role: Some(UserRole::Admin),
        ..Default::default()
    };
    let page = repo.get_all(&query).await?;

    assert_eq!(page.pagination.total_records, 1);
    assert_eq!(page.records[0].id, admin.id);

    Ok(())
}

/// Tests search across username and email combined with sorting.
///
/// Expected: matching users sorted by username descending
#[tokio::test]
async fn searches_and_sorts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("alpha")
        .email("alpha@hyrule.com")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .username("beta")
        .email("beta@HYRULE.com")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .username("gamma")
        .email("gamma@lorule.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let query = UserListQuery {
        options: ListOptions::new(None, None, Some("username"), Some("desc"), Some("hyrule")),
        ..Default::default()
    };
    let page = repo.get_all(&query).await?;

    let names: Vec<_> = page.records.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["beta", "alpha"]);

    Ok(())
}

/// Tests the creation date range is inclusive of both end days.
///
/// Expected: users created on the start and end days included
#[tokio::test]
async fn filters_by_inclusive_date_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (day, hour) in [(1, 0), (15, 12), (31, 23), (32, 0)] {
        let created_at = Utc
            .with_ymd_and_hms(2024, 1, 1, hour, 0, 0)
            .unwrap()
            + chrono::Duration::days(day - 1);
        factory::user::UserFactory::new(db)
            .created_at(created_at)
            .build()
            .await?;
    }

    let repo = UserRepository::new(db);
    let query = UserListQuery {
        start_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1),
        end_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 31),
        ..Default::default()
    };
    let page = repo.get_all(&query).await?;

    assert_eq!(page.pagination.total_records, 3);

    Ok(())
}
