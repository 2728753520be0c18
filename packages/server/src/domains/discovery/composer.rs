//! The discovery query composer.
//!
//! Builds exactly one paginated read per invocation: vendor rows with the
//! primary media URL and aggregated tag names, plus the pre-pagination total
//! counted over the same predicate set. The total is computed in a subquery
//! left-joined to the page, so a page past the end of the result set still
//! carries the true total. Composition is separated from execution so the
//! generated SQL is testable without a database.
//!
//! Join rules:
//! - media and tags are always left-joined for enrichment;
//! - a non-empty tag id list adds an inner join on the junction table,
//!   because a left join cannot filter rows by joined-table predicates.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::filters::{SortBy, ValidatedFilters, VendorKind};
use super::DiscoveryError;
use crate::common::{CityId, VendorId};

/// One raw row from the composed query, one per vendor. Tag names arrive
/// un-deduplicated; filter joins multiply the enrichment rows.
///
/// When the requested page lies past the end of the result set, the query
/// yields a single carrier row with the total and NULL vendor columns, so
/// every vendor column is optional here.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DiscoverRow {
    pub id: Option<VendorId>,
    pub kind: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub city_id: Option<CityId>,
    pub base_price: Option<i32>,
    pub capacity: Option<i32>,
    pub rating_avg: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
    pub primary_image_url: Option<String>,
    pub tag_names: Option<Vec<String>>,
    pub total_count: i64,
}

/// A display-ready discovery result row.
#[derive(Debug, Clone, Serialize)]
pub struct DiscoverResult {
    pub id: VendorId,
    pub kind: String,
    pub name: String,
    pub description: Option<String>,
    pub city_id: Option<CityId>,
    pub base_price: Option<i32>,
    pub capacity: Option<i32>,
    pub rating_avg: Option<f64>,
    pub created_at: DateTime<Utc>,
    /// URL of the media row flagged primary; None if the vendor has none.
    pub primary_image_url: Option<String>,
    /// De-duplicated tag names (order not guaranteed).
    pub tag_names: Vec<String>,
}

/// One page of discovery results with the pre-pagination total.
#[derive(Debug, Clone)]
pub struct DiscoverPage {
    pub results: Vec<DiscoverResult>,
    pub total_count: i64,
    pub page: i32,
    pub page_size: i32,
    pub has_next_page: bool,
}

/// Escape LIKE wildcards in user-supplied search text so it matches
/// literally inside the `%…%` pattern.
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// De-duplicate tag names from aggregated join rows, preserving first
/// occurrence.
pub fn dedup_tag_names(names: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

// Column references are unqualified: the clause is applied both inside the
// page subquery over `filtered` and on the outer select's output columns.
fn order_clause(sort_by: SortBy) -> &'static str {
    match sort_by {
        // Relevance falls back to newest-first; creation time descending is
        // also the tie-break for every other ordering.
        SortBy::Relevance | SortBy::Newest => " ORDER BY created_at DESC, id DESC",
        SortBy::PriceLow => " ORDER BY base_price ASC NULLS LAST, created_at DESC",
        SortBy::PriceHigh => " ORDER BY base_price DESC NULLS LAST, created_at DESC",
        SortBy::Rating => " ORDER BY rating_avg DESC NULLS LAST, created_at DESC",
    }
}

/// Compose the single discovery read for a vendor kind and validated
/// filters.
///
/// Each optional filter contributes a predicate only when present; empty id
/// lists compose byte-identical SQL to absent ones. The filtered set goes
/// into a CTE; the total is counted over that CTE and left-joined to the
/// paginated page, so the total never depends on the page having rows.
pub fn compose(kind: VendorKind, filters: &ValidatedFilters) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(
        "WITH filtered AS (\
         SELECT v.id, v.kind, v.name, v.description, v.city_id, v.base_price, v.capacity, \
         v.rating_avg, v.created_at, \
         min(m.url) AS primary_image_url, \
         array_agg(t.name) FILTER (WHERE t.name IS NOT NULL) AS tag_names \
         FROM vendors v \
         LEFT JOIN vendor_media m ON m.vendor_id = v.id AND m.is_primary \
         LEFT JOIN vendor_tags vt ON vt.vendor_id = v.id \
         LEFT JOIN tags t ON t.id = vt.tag_id",
    );

    // Tag predicates need an inner join on the junction table; the
    // enrichment left join above would not drop unmatched vendors.
    if !filters.category_ids.is_empty() {
        qb.push(" INNER JOIN vendor_tags cat ON cat.vendor_id = v.id AND cat.tag_id = ANY(");
        qb.push_bind(filters.category_ids.clone());
        qb.push(")");
    }
    if !filters.amenity_ids.is_empty() {
        qb.push(" INNER JOIN vendor_tags am ON am.vendor_id = v.id AND am.tag_id = ANY(");
        qb.push_bind(filters.amenity_ids.clone());
        qb.push(")");
    }

    qb.push(" WHERE v.status = 'active' AND v.kind = ");
    qb.push_bind(kind.as_str());

    if let Some(query) = &filters.search_query {
        qb.push(" AND v.name ILIKE ");
        qb.push_bind(format!("%{}%", escape_like(query)));
    }
    if let Some(city_id) = filters.city_id {
        qb.push(" AND v.city_id = ");
        qb.push_bind(city_id.into_uuid());
    }
    if let Some(min) = filters.price_min {
        qb.push(" AND v.base_price >= ");
        qb.push_bind(min);
    }
    if let Some(max) = filters.price_max {
        qb.push(" AND v.base_price <= ");
        qb.push_bind(max);
    }
    if let Some(min) = filters.capacity_min {
        qb.push(" AND v.capacity >= ");
        qb.push_bind(min);
    }
    if let Some(max) = filters.capacity_max {
        qb.push(" AND v.capacity <= ");
        qb.push_bind(max);
    }

    qb.push(" GROUP BY v.id)");

    qb.push(
        " SELECT f.id, f.kind, f.name, f.description, f.city_id, f.base_price, f.capacity, \
         f.rating_avg, f.created_at, f.primary_image_url, f.tag_names, t.total_count \
         FROM (SELECT count(*) AS total_count FROM filtered) t \
         LEFT JOIN (SELECT * FROM filtered",
    );
    qb.push(order_clause(filters.sort_by));
    qb.push(" LIMIT ");
    qb.push_bind(filters.page.limit());
    qb.push(" OFFSET ");
    qb.push_bind(filters.page.offset());
    qb.push(") f ON TRUE");
    qb.push(order_clause(filters.sort_by));

    qb
}

/// Flatten raw rows into display-ready results.
///
/// The total comes from any row, including the carrier row an out-of-range
/// page yields; rows without a vendor id are dropped from the results.
fn flatten(rows: Vec<DiscoverRow>) -> (Vec<DiscoverResult>, i64) {
    let total_count = rows.first().map(|row| row.total_count).unwrap_or(0);

    let results = rows
        .into_iter()
        .filter_map(|row| {
            Some(DiscoverResult {
                id: row.id?,
                kind: row.kind?,
                name: row.name?,
                description: row.description,
                city_id: row.city_id,
                base_price: row.base_price,
                capacity: row.capacity,
                rating_avg: row.rating_avg,
                created_at: row.created_at?,
                primary_image_url: row.primary_image_url,
                tag_names: dedup_tag_names(row.tag_names.unwrap_or_default()),
            })
        })
        .collect();

    (results, total_count)
}

/// Run a discovery query: validate, compose, execute the single read, and
/// flatten the rows.
pub async fn discover(
    kind: VendorKind,
    filters: super::DiscoverFilters,
    pool: &PgPool,
) -> Result<DiscoverPage, DiscoveryError> {
    let filters = filters.validate()?;
    let mut qb = compose(kind, &filters);

    let rows: Vec<DiscoverRow> = qb.build_query_as().fetch_all(pool).await?;
    let (results, total_count) = flatten(rows);

    Ok(DiscoverPage {
        results,
        total_count,
        page: filters.page.page,
        page_size: filters.page.page_size,
        has_next_page: filters.page.has_next_page(total_count),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_passes_plain_text() {
        assert_eq!(escape_like("jazz club"), "jazz club");
    }

    #[test]
    fn escape_like_escapes_wildcards() {
        assert_eq!(escape_like("100% jazz"), "100\\% jazz");
        assert_eq!(escape_like("under_score"), "under\\_score");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn dedup_preserves_first_occurrence() {
        let names = vec![
            "jazz".to_string(),
            "soul".to_string(),
            "jazz".to_string(),
            "funk".to_string(),
            "soul".to_string(),
        ];
        assert_eq!(dedup_tag_names(names), vec!["jazz", "soul", "funk"]);
    }

    #[test]
    fn dedup_of_empty_is_empty() {
        assert!(dedup_tag_names(Vec::new()).is_empty());
    }

    #[test]
    fn flatten_of_no_rows_yields_zero_total() {
        let (results, total) = flatten(Vec::new());
        assert!(results.is_empty());
        assert_eq!(total, 0);
    }

    fn carrier_row(total_count: i64) -> DiscoverRow {
        DiscoverRow {
            id: None,
            kind: None,
            name: None,
            description: None,
            city_id: None,
            base_price: None,
            capacity: None,
            rating_avg: None,
            created_at: None,
            primary_image_url: None,
            tag_names: None,
            total_count,
        }
    }

    #[test]
    fn page_past_the_end_still_reports_the_full_total() {
        // Page 4 at size 20 over 50 matching vendors yields no vendor rows,
        // only the total carrier row
        let (results, total) = flatten(vec![carrier_row(50)]);
        assert!(results.is_empty());
        assert_eq!(total, 50);
    }

    #[test]
    fn flatten_builds_results_from_vendor_rows() {
        let row = DiscoverRow {
            id: Some(VendorId::new()),
            kind: Some("artist".to_string()),
            name: Some("Night Owls".to_string()),
            description: None,
            city_id: None,
            base_price: Some(400),
            capacity: None,
            rating_avg: Some(4.5),
            created_at: Some(Utc::now()),
            primary_image_url: Some("https://img.example/owls.jpg".to_string()),
            tag_names: Some(vec!["jazz".to_string(), "jazz".to_string()]),
            total_count: 37,
        };

        let (results, total) = flatten(vec![row]);
        assert_eq!(total, 37);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Night Owls");
        assert_eq!(results[0].tag_names, vec!["jazz"]);
    }
}
