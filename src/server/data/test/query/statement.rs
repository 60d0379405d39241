use super::*;

/// Tests that placeholders are numbered once across every predicate.
///
/// Builds the review list statement with search, a rating range, a game filter and a
/// date range, renders it for Postgres and checks every bound value has exactly one
/// numbered placeholder in order.
///
/// Expected: `$1..$n` present for n bound values and `$n+1` absent
#[test]
fn numbers_placeholders_for_every_bound_value() {
    let query = ReviewListQuery {
        options: ListOptions::new(Some(2), Some(5), Some("rating"), Some("asc"), Some("great")),
        rating: Some(RatingFilter::Range(2, 4)),
        game_id: Some(7),
        user_id: Some(3),
        start_date: Some(date(2024, 1, 1)),
        end_date: Some(date(2024, 1, 31)),
    };

    let stmt = page_select(
        entity::prelude::Review::find().filter(query.filter().into_condition()),
        &query.options,
    )
    .build(DbBackend::Postgres);
    let values = stmt.values.expect("statement has bound values").0;

    assert!(!values.is_empty());
    for n in 1..=values.len() {
        assert!(
            stmt.sql.contains(&format!("${}", n)),
            "missing ${} in {}",
            n,
            stmt.sql
        );
    }
    assert!(!stmt.sql.contains(&format!("${}", values.len() + 1)));
}

/// Tests that user-supplied search text is bound, never inlined.
///
/// Expected: search term absent from SQL text
#[test]
fn binds_search_text() {
    let query = UserListQuery {
        options: ListOptions::new(None, None, None, None, Some("x' OR '1'='1")),
        ..Default::default()
    };

    let stmt = entity::prelude::User::find()
        .filter(query.filter().into_condition())
        .build(DbBackend::Postgres);

    assert!(!stmt.sql.contains("OR '1'='1"));
    assert!(stmt.sql.contains("LIKE"));
}

/// Tests the ORDER BY clause comes from the sort allow-list.
///
/// Expected: unknown sort field falls back to the default column and order
#[test]
fn orders_by_allowed_column_or_default() {
    let options: ListOptions<UserSortField> =
        ListOptions::new(None, None, Some("password; DROP TABLE users"), Some("sideways"), None);

    assert_eq!(options.sort_by, UserSortField::Id);
    assert_eq!(options.order, SortOrder::Asc);

    let stmt = page_select(entity::prelude::User::find(), &options).build(DbBackend::Postgres);

    assert!(stmt.sql.contains(r#"ORDER BY "users"."id" ASC"#));
    assert!(!stmt.sql.contains("DROP"));
}

/// Tests the default review sort.
///
/// Expected: newest first
#[test]
fn reviews_default_to_newest_first() {
    let options: ListOptions<ReviewSortField> = ListOptions::default();

    let stmt = page_select(entity::prelude::Review::find(), &options).build(DbBackend::Postgres);

    assert!(stmt.sql.contains(r#"ORDER BY "reviews"."created_at" DESC"#));
}

/// Tests out-of-range paging values fall back to defaults.
///
/// Expected: page 1, limit 10
#[test]
fn normalizes_out_of_range_paging() {
    let options: ListOptions<UserSortField> =
        ListOptions::new(Some(0), Some(1000), None, None, Some("   "));

    assert_eq!(options.page, 1);
    assert_eq!(options.limit, 10);
    assert_eq!(options.search, None);
    assert_eq!(options.offset(), 0);
}

/// Tests a page whose offset would overflow the bound OFFSET.
///
/// Expected: page falls back to 1; an oversized page set directly still offsets within `i64`
#[test]
fn bounds_offset_for_huge_pages() {
    let options: ListOptions<UserSortField> =
        ListOptions::new(Some(1_000_000_000_000_000_000), Some(10), None, None, None);

    assert_eq!(options.page, 1);

    let options = ListOptions::<UserSortField> {
        page: u64::MAX,
        limit: MAX_LIMIT,
        ..Default::default()
    };

    assert_eq!(options.offset(), i64::MAX as u64);
}
