///! List query builder: filters, sorting and pagination rendered as
///! Postgres SQL. No database connection is needed.
///!
///! Run with: `cargo test --test query_test`
use std::collections::HashMap;

use sea_orm::{ColumnTrait, DbBackend, EntityTrait, QueryTrait};
use uuid::Uuid;

use yatra_backend::db::{bookings as booking_db, packages as package_db, users as user_db};
use yatra_backend::models::{bookings, packages, users};
use yatra_backend::query::filter::like_pattern;
use yatra_backend::query::{
    FilterError, ListEnvelope, ListQuery, Page, PageParams, SortDirection, resolve_sort,
};

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn package_sql(pairs: &[(&str, &str)]) -> String {
    ListQuery::parse(&params(pairs), &package_db::LIST_SPEC)
        .expect("query should parse")
        .apply(packages::Entity::find())
        .build(DbBackend::Postgres)
        .to_string()
}

// ── Filters ──

fn package_query(pairs: &[(&str, &str)]) -> ListQuery<packages::Column> {
    ListQuery::parse(&params(pairs), &package_db::LIST_SPEC).expect("query should parse")
}

#[test]
fn test_no_params_means_no_predicate() {
    assert!(package_query(&[]).condition.is_empty());
    let sql = package_sql(&[]);
    assert!(!sql.contains("WHERE") || sql.contains("WHERE TRUE ORDER BY"), "{sql}");
}

#[test]
fn test_empty_values_are_ignored() {
    let list = package_query(&[("type", ""), ("minPrice", "  "), ("search", "")]);
    assert!(list.condition.is_empty());
}

#[test]
fn test_exact_filter_on_enum_field() {
    let sql = package_sql(&[("type", "international")]);
    assert!(sql.contains(r#""packages"."package_type" = 'international'"#), "{sql}");
}

#[test]
fn test_contains_filter_is_case_insensitive() {
    let sql = package_sql(&[("destination", "GoA")]);
    assert!(sql.contains(r#"LOWER("packages"."destination") LIKE '%goa%'"#), "{sql}");
}

#[test]
fn test_search_spans_name_and_destination() {
    let sql = package_sql(&[("search", "beach")]);
    assert!(sql.contains(r#"LOWER("packages"."name") LIKE '%beach%'"#), "{sql}");
    assert!(sql.contains(r#"LOWER("packages"."destination") LIKE '%beach%'"#), "{sql}");
    assert!(sql.contains(" OR "), "{sql}");
}

#[test]
fn test_price_range_both_bounds() {
    let sql = package_sql(&[("minPrice", "100"), ("maxPrice", "500")]);
    assert!(sql.contains(r#""packages"."price" >= 100"#), "{sql}");
    assert!(sql.contains(r#""packages"."price" <= 500"#), "{sql}");
}

#[test]
fn test_single_bound_applies_alone() {
    let sql = package_sql(&[("maxDays", "7")]);
    assert!(sql.contains(r#""packages"."duration_days" <= 7"#), "{sql}");
    assert!(!sql.contains(r#""packages"."duration_days" >="#), "{sql}");
}

#[test]
fn test_filters_compose_with_and() {
    let sql = package_sql(&[("type", "domestic"), ("minRating", "4")]);
    assert!(sql.contains(r#""packages"."package_type" = 'domestic'"#), "{sql}");
    assert!(sql.contains(r#""packages"."average_rating" >= 4"#), "{sql}");
    assert!(sql.contains(" AND "), "{sql}");
}

#[test]
fn test_malformed_number_is_rejected() {
    let err = ListQuery::parse(&params(&[("minPrice", "cheap")]), &package_db::LIST_SPEC)
        .unwrap_err();
    assert_eq!(
        err,
        FilterError::InvalidValue {
            param: "minPrice",
            value: "cheap".to_string(),
        }
    );
}

#[test]
fn test_non_finite_number_is_rejected() {
    let result = ListQuery::parse(&params(&[("maxPrice", "NaN")]), &package_db::LIST_SPEC);
    assert!(result.is_err());
}

#[test]
fn test_booking_date_and_id_filters() {
    let user_id = Uuid::new_v4();
    let user_param = user_id.to_string();
    let sql = ListQuery::parse(
        &params(&[
            ("user", user_param.as_str()),
            ("startDate", "2025-01-01"),
            ("endDate", "2025-12-31"),
            ("bookingStatus", "confirmed"),
        ]),
        &booking_db::LIST_SPEC,
    )
    .unwrap()
    .apply(bookings::Entity::find())
    .build(DbBackend::Postgres)
    .to_string();

    assert!(sql.contains(&user_id.to_string()), "{sql}");
    assert!(sql.contains(r#""bookings"."travel_date" >="#), "{sql}");
    assert!(sql.contains("2025-01-01"), "{sql}");
    assert!(sql.contains("2025-12-31"), "{sql}");
    assert!(sql.contains(r#""bookings"."booking_status" = 'confirmed'"#), "{sql}");
}

#[test]
fn test_malformed_date_and_id_are_rejected() {
    let bad_date = ListQuery::parse(&params(&[("startDate", "31/12/2025")]), &booking_db::LIST_SPEC);
    assert!(matches!(
        bad_date,
        Err(FilterError::InvalidValue { param: "startDate", .. })
    ));

    let bad_id = ListQuery::parse(&params(&[("package", "abc123")]), &booking_db::LIST_SPEC);
    assert!(matches!(
        bad_id,
        Err(FilterError::InvalidValue { param: "package", .. })
    ));
}

#[test]
fn test_scoped_constraint_is_added() {
    let owner = Uuid::new_v4();
    let sql = ListQuery::parse(&params(&[("paymentStatus", "pending")]), &booking_db::LIST_SPEC)
        .unwrap()
        .scoped(bookings::Column::UserId.eq(owner))
        .apply(bookings::Entity::find())
        .build(DbBackend::Postgres)
        .to_string();

    assert!(sql.contains(r#""bookings"."payment_status" = 'pending'"#), "{sql}");
    assert!(sql.contains(&owner.to_string()), "{sql}");
}

#[test]
fn test_user_search_covers_email() {
    let sql = ListQuery::parse(&params(&[("search", "ALICE@")]), &user_db::LIST_SPEC)
        .unwrap()
        .apply(users::Entity::find())
        .build(DbBackend::Postgres)
        .to_string();

    assert!(sql.contains(r#"LOWER("users"."email") LIKE '%alice@%'"#), "{sql}");
}

#[test]
fn test_like_pattern_escapes_wildcards() {
    assert_eq!(like_pattern("Goa"), "%goa%");
    assert_eq!(like_pattern("50%_off"), r"%50\%\_off%");
}

// ── Sorting ──

const SORTABLE: &[(&str, packages::Column)] = &[
    ("createdAt", packages::Column::CreatedAt),
    ("price", packages::Column::Price),
];

#[test]
fn test_default_sort_is_created_at_desc() {
    let spec = resolve_sort(None, SORTABLE, packages::Column::CreatedAt);
    assert!(matches!(spec.column, packages::Column::CreatedAt));
    assert_eq!(spec.direction, SortDirection::Desc);

    let sql = package_sql(&[]);
    assert!(sql.contains(r#"ORDER BY "packages"."created_at" DESC"#), "{sql}");
}

#[test]
fn test_sort_direction_parsing() {
    let desc = resolve_sort(Some("price:desc"), SORTABLE, packages::Column::CreatedAt);
    assert!(matches!(desc.column, packages::Column::Price));
    assert_eq!(desc.direction, SortDirection::Desc);

    let asc = resolve_sort(Some("price:asc"), SORTABLE, packages::Column::CreatedAt);
    assert_eq!(asc.direction, SortDirection::Asc);

    // Anything that is not exactly `desc` sorts ascending.
    let bare = resolve_sort(Some("price"), SORTABLE, packages::Column::CreatedAt);
    assert_eq!(bare.direction, SortDirection::Asc);
    let odd = resolve_sort(Some("price:DESC"), SORTABLE, packages::Column::CreatedAt);
    assert_eq!(odd.direction, SortDirection::Asc);
}

#[test]
fn test_unknown_sort_field_falls_back_to_default() {
    let spec = resolve_sort(Some("password:asc"), SORTABLE, packages::Column::CreatedAt);
    assert!(matches!(spec.column, packages::Column::CreatedAt));
    assert_eq!(spec.direction, SortDirection::Desc);
}

#[test]
fn test_sort_by_is_rendered() {
    let sql = package_sql(&[("sortBy", "price:asc")]);
    assert!(sql.contains(r#"ORDER BY "packages"."price" ASC"#), "{sql}");
}

// ── Pagination ──

#[test]
fn test_page_defaults() {
    let page = PageParams::from_query(&params(&[]));
    assert_eq!(page, PageParams { page: 1, limit: 10 });
    assert_eq!(page.skip(), 0);
}

#[test]
fn test_page_values_are_clamped() {
    let page = PageParams::from_query(&params(&[("page", "0"), ("limit", "5000")]));
    assert_eq!(page, PageParams { page: 1, limit: 100 });

    let page = PageParams::from_query(&params(&[("page", "-3"), ("limit", "0")]));
    assert_eq!(page, PageParams { page: 1, limit: 1 });
}

#[test]
fn test_unparseable_page_values_fall_back() {
    let page = PageParams::from_query(&params(&[("page", "two"), ("limit", "ten")]));
    assert_eq!(page, PageParams::default());
}

#[test]
fn test_skip_and_limit_are_rendered() {
    let sql = package_sql(&[("page", "3"), ("limit", "20")]);
    assert!(sql.contains("LIMIT 20"), "{sql}");
    assert!(sql.contains("OFFSET 40"), "{sql}");
}

#[test]
fn test_huge_page_does_not_overflow_offset() {
    let page = PageParams::from_query(&params(&[
        ("page", "9223372036854775807"),
        ("limit", "100"),
    ]));
    assert_eq!(page.page, 9_223_372_036_854_775_807);
    assert_eq!(page.skip(), i64::MAX as u64);

    let sql = package_sql(&[("page", "9223372036854775807"), ("limit", "100")]);
    assert!(sql.contains("OFFSET 9223372036854775807"), "{sql}");
    assert_eq!(page.total_pages(25), 1);
}

#[test]
fn test_total_pages_rounds_up() {
    let page = PageParams { page: 1, limit: 10 };
    assert_eq!(page.total_pages(0), 0);
    assert_eq!(page.total_pages(10), 1);
    assert_eq!(page.total_pages(25), 3);
}

#[test]
fn test_envelope_shape() {
    let page = Page {
        items: vec!["a", "b"],
        total: 12,
        params: PageParams { page: 2, limit: 10 },
    };
    let value = serde_json::to_value(ListEnvelope::from(page)).unwrap();

    assert_eq!(value["success"], true);
    assert_eq!(value["count"], 2);
    assert_eq!(value["total"], 12);
    assert_eq!(value["page"], 2);
    assert_eq!(value["totalPages"], 2);
    assert_eq!(value["data"], serde_json::json!(["a", "b"]));
}

#[test]
fn test_page_beyond_last_keeps_totals() {
    let page: Page<&str> = Page {
        items: Vec::new(),
        total: 25,
        params: PageParams { page: 9, limit: 10 },
    };
    let envelope = ListEnvelope::from(page);

    assert_eq!(envelope.count, 0);
    assert_eq!(envelope.total, 25);
    assert_eq!(envelope.page, 9);
    assert_eq!(envelope.total_pages, 3);
    assert!(envelope.data.is_empty());
}
