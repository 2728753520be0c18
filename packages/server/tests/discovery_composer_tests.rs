//! Tests for discovery SQL composition.
//!
//! The composer separates SQL generation from execution, so the shape of
//! the generated query is asserted here without a database.

use uuid::Uuid;

use server_core::common::{CityId, PageArgs};
use server_core::domains::discovery::{compose, DiscoverFilters, SortBy, VendorKind};

fn compose_sql(kind: VendorKind, filters: DiscoverFilters) -> String {
    let validated = filters.validate().expect("filters should validate");
    compose(kind, &validated).into_sql()
}

#[test]
fn baseline_query_shape() {
    let sql = compose_sql(VendorKind::Artist, DiscoverFilters::default());

    // Enrichment joins are always present
    assert!(sql.contains("LEFT JOIN vendor_media m"));
    assert!(sql.contains("LEFT JOIN vendor_tags vt"));
    assert!(sql.contains("LEFT JOIN tags t"));

    // One read carries the pre-pagination total and grouped enrichment
    assert!(sql.contains("count(*) AS total_count"));
    assert!(sql.contains("array_agg(t.name) FILTER (WHERE t.name IS NOT NULL)"));
    assert!(sql.contains("GROUP BY v.id"));

    // Hidden listings never surface; kind is bound, not inlined
    assert!(sql.contains("v.status = 'active'"));
    assert!(sql.contains("v.kind = $1"));

    // No filter joins without tag filters
    assert!(!sql.contains("INNER JOIN"));
}

#[test]
fn total_count_does_not_depend_on_the_page_having_rows() {
    // The total is counted over the filtered CTE and left-joined to the
    // page subquery, so an out-of-range page still carries the true total
    let sql = compose_sql(VendorKind::Artist, DiscoverFilters::default());

    assert!(sql.contains("WITH filtered AS ("));
    assert!(sql.contains("FROM (SELECT count(*) AS total_count FROM filtered) t"));
    assert!(sql.contains("LEFT JOIN (SELECT * FROM filtered"));
    assert!(sql.contains(") f ON TRUE"));

    // The count subquery sits on the outer side of the left join, not the
    // paginated page
    let count_pos = sql.find("SELECT count(*) AS total_count").unwrap();
    let page_pos = sql.find("LEFT JOIN (SELECT * FROM filtered").unwrap();
    assert!(count_pos < page_pos);
}

#[test]
fn kind_only_changes_the_bound_value() {
    let artists = compose_sql(VendorKind::Artist, DiscoverFilters::default());
    let venues = compose_sql(VendorKind::Venue, DiscoverFilters::default());
    assert_eq!(artists, venues);
}

#[test]
fn empty_tag_lists_compose_identical_sql_to_absent() {
    let absent = compose_sql(VendorKind::Venue, DiscoverFilters::default());
    let empty = compose_sql(
        VendorKind::Venue,
        DiscoverFilters {
            category_ids: Vec::new(),
            amenity_ids: Vec::new(),
            ..Default::default()
        },
    );
    assert_eq!(absent, empty);
}

#[test]
fn non_empty_category_ids_add_an_inner_join() {
    let sql = compose_sql(
        VendorKind::Venue,
        DiscoverFilters {
            category_ids: vec![Uuid::new_v4()],
            ..Default::default()
        },
    );
    assert!(sql.contains("INNER JOIN vendor_tags cat ON cat.vendor_id = v.id"));
    assert!(!sql.contains("INNER JOIN vendor_tags am"));
}

#[test]
fn non_empty_amenity_ids_add_an_inner_join() {
    let sql = compose_sql(
        VendorKind::Venue,
        DiscoverFilters {
            amenity_ids: vec![Uuid::new_v4(), Uuid::new_v4()],
            ..Default::default()
        },
    );
    assert!(sql.contains("INNER JOIN vendor_tags am ON am.vendor_id = v.id"));
    assert!(!sql.contains("INNER JOIN vendor_tags cat"));
}

#[test]
fn both_tag_filters_join_independently() {
    let sql = compose_sql(
        VendorKind::Venue,
        DiscoverFilters {
            category_ids: vec![Uuid::new_v4()],
            amenity_ids: vec![Uuid::new_v4()],
            ..Default::default()
        },
    );
    assert!(sql.contains("INNER JOIN vendor_tags cat"));
    assert!(sql.contains("INNER JOIN vendor_tags am"));
}

#[test]
fn pagination_binds_come_last() {
    // Default filters bind only kind, limit, and offset
    let sql = compose_sql(VendorKind::Artist, DiscoverFilters::default());
    assert!(sql.contains("LIMIT $2 OFFSET $3"));
}

#[test]
fn search_and_city_add_bound_predicates() {
    let sql = compose_sql(
        VendorKind::Venue,
        DiscoverFilters {
            search_query: Some("jazz club".to_string()),
            city_id: Some(CityId::new()),
            category_ids: Vec::new(),
            amenity_ids: Vec::new(),
            page: PageArgs::new(Some(1), Some(20)),
            ..Default::default()
        },
    );

    assert!(sql.contains("v.name ILIKE $2"));
    assert!(sql.contains("v.city_id = $3"));
    assert!(!sql.contains("INNER JOIN"));
    assert!(sql.contains("LIMIT $4 OFFSET $5"));
}

#[test]
fn price_and_capacity_ranges_add_predicates() {
    let sql = compose_sql(
        VendorKind::Venue,
        DiscoverFilters {
            price_min: Some(100),
            price_max: Some(500),
            capacity_min: Some(50),
            capacity_max: Some(300),
            ..Default::default()
        },
    );

    assert!(sql.contains("v.base_price >= $2"));
    assert!(sql.contains("v.base_price <= $3"));
    assert!(sql.contains("v.capacity >= $4"));
    assert!(sql.contains("v.capacity <= $5"));
}

#[test]
fn relevance_and_newest_order_by_creation_time() {
    for sort_by in [SortBy::Relevance, SortBy::Newest] {
        let sql = compose_sql(
            VendorKind::Artist,
            DiscoverFilters {
                sort_by,
                ..Default::default()
            },
        );
        assert!(sql.contains("ORDER BY created_at DESC, id DESC"));
    }
}

#[test]
fn price_and_rating_sorts_keep_nulls_last() {
    let low = compose_sql(
        VendorKind::Artist,
        DiscoverFilters {
            sort_by: SortBy::PriceLow,
            ..Default::default()
        },
    );
    assert!(low.contains("ORDER BY base_price ASC NULLS LAST"));

    let high = compose_sql(
        VendorKind::Artist,
        DiscoverFilters {
            sort_by: SortBy::PriceHigh,
            ..Default::default()
        },
    );
    assert!(high.contains("ORDER BY base_price DESC NULLS LAST"));

    let rating = compose_sql(
        VendorKind::Artist,
        DiscoverFilters {
            sort_by: SortBy::Rating,
            ..Default::default()
        },
    );
    assert!(rating.contains("ORDER BY rating_avg DESC NULLS LAST"));
}

#[test]
fn search_escapes_like_wildcards_via_bind() {
    // Wildcards in the search text never land in the SQL text itself
    let sql = compose_sql(
        VendorKind::Artist,
        DiscoverFilters {
            search_query: Some("100% jazz_band".to_string()),
            ..Default::default()
        },
    );
    assert!(sql.contains("v.name ILIKE $2"));
    assert!(!sql.contains("100%"));
}

#[test]
fn invalid_filters_never_reach_composition() {
    let filters = DiscoverFilters {
        price_min: Some(500),
        price_max: Some(100),
        ..Default::default()
    };
    assert!(filters.validate().is_err());
}
