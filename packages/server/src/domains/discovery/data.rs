//! GraphQL types for discovery queries.

use chrono::{DateTime, Utc};
use juniper::{GraphQLEnum, GraphQLInputObject, GraphQLObject};
use uuid::Uuid;

use super::composer::{DiscoverPage, DiscoverResult};
use super::filters::{DiscoverFilters, SortBy};
use crate::common::{CityId, PageArgs};

/// Sort order for discovery results
#[derive(Debug, Clone, Copy, GraphQLEnum)]
pub enum SortByData {
    Relevance,
    PriceLow,
    PriceHigh,
    Rating,
    Newest,
}

impl From<SortByData> for SortBy {
    fn from(sort: SortByData) -> Self {
        match sort {
            SortByData::Relevance => SortBy::Relevance,
            SortByData::PriceLow => SortBy::PriceLow,
            SortByData::PriceHigh => SortBy::PriceHigh,
            SortByData::Rating => SortBy::Rating,
            SortByData::Newest => SortBy::Newest,
        }
    }
}

/// Filter input for discovery queries.
///
/// Omitted fields and empty id lists add no filter.
#[derive(Debug, Clone, Default, GraphQLInputObject)]
pub struct DiscoverFilterInput {
    pub search_query: Option<String>,
    pub category_ids: Option<Vec<Uuid>>,
    pub amenity_ids: Option<Vec<Uuid>>,
    pub price_min: Option<i32>,
    pub price_max: Option<i32>,
    pub capacity_min: Option<i32>,
    pub capacity_max: Option<i32>,
    pub city_id: Option<Uuid>,
    pub sort_by: Option<SortByData>,
    pub page: Option<i32>,
    pub page_size: Option<i32>,
}

impl From<DiscoverFilterInput> for DiscoverFilters {
    fn from(input: DiscoverFilterInput) -> Self {
        DiscoverFilters {
            search_query: input.search_query,
            category_ids: input.category_ids.unwrap_or_default(),
            amenity_ids: input.amenity_ids.unwrap_or_default(),
            price_min: input.price_min,
            price_max: input.price_max,
            capacity_min: input.capacity_min,
            capacity_max: input.capacity_max,
            city_id: input.city_id.map(CityId::from_uuid),
            sort_by: input.sort_by.map(Into::into).unwrap_or_default(),
            page: PageArgs::new(input.page, input.page_size),
        }
    }
}

/// One discovery result row
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "A discoverable vendor (artist or venue)")]
pub struct DiscoverResultData {
    pub id: Uuid,
    pub kind: String,
    pub name: String,
    pub description: Option<String>,
    pub city_id: Option<Uuid>,
    pub base_price: Option<i32>,
    pub capacity: Option<i32>,
    pub rating_avg: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub primary_image_url: Option<String>,
    pub tag_names: Vec<String>,
}

impl From<DiscoverResult> for DiscoverResultData {
    fn from(result: DiscoverResult) -> Self {
        Self {
            id: result.id.into_uuid(),
            kind: result.kind,
            name: result.name,
            description: result.description,
            city_id: result.city_id.map(|id| id.into_uuid()),
            base_price: result.base_price,
            capacity: result.capacity,
            rating_avg: result.rating_avg,
            created_at: result.created_at,
            primary_image_url: result.primary_image_url,
            tag_names: result.tag_names,
        }
    }
}

/// A page of discovery results
#[derive(Debug, Clone, GraphQLObject)]
pub struct DiscoverConnection {
    pub nodes: Vec<DiscoverResultData>,
    pub total_count: i32,
    pub page: i32,
    pub page_size: i32,
    pub has_next_page: bool,
}

impl From<DiscoverPage> for DiscoverConnection {
    fn from(page: DiscoverPage) -> Self {
        Self {
            nodes: page.results.into_iter().map(Into::into).collect(),
            // GraphQL Int is 32-bit; saturate rather than wrap
            total_count: i32::try_from(page.total_count).unwrap_or(i32::MAX),
            page: page.page,
            page_size: page.page_size,
            has_next_page: page.has_next_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_total(total_count: i64) -> DiscoverPage {
        DiscoverPage {
            results: Vec::new(),
            total_count,
            page: 1,
            page_size: 20,
            has_next_page: true,
        }
    }

    #[test]
    fn total_count_saturates_at_int_max() {
        let connection = DiscoverConnection::from(page_with_total(i64::MAX));
        assert_eq!(connection.total_count, i32::MAX);

        let connection = DiscoverConnection::from(page_with_total(42));
        assert_eq!(connection.total_count, 42);
    }
}
