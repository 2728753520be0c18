//! Filter state for discovery queries and its validation.
//!
//! Predicate composition rule: every optional field contributes a predicate
//! only when present and non-empty. An empty id list is identical to an
//! absent one (no filter), never "match nothing".

use uuid::Uuid;

use super::DiscoveryError;
use crate::common::{CityId, PageArgs, ValidatedPage};

/// Which vendor table partition a discovery query runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorKind {
    Artist,
    Venue,
}

impl VendorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VendorKind::Artist => "artist",
            VendorKind::Venue => "venue",
        }
    }
}

/// Result ordering for discovery queries.
///
/// `Relevance` (and unset) falls back to newest-first; ranking was delegated
/// to an external search endpoint and is not reimplemented here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Relevance,
    PriceLow,
    PriceHigh,
    Rating,
    Newest,
}

/// User-facing filter state, as it arrives from the API layer.
#[derive(Debug, Clone, Default)]
pub struct DiscoverFilters {
    pub search_query: Option<String>,
    /// Genre tags for artists, venue-type tags for venues.
    pub category_ids: Vec<Uuid>,
    /// Amenity tags (venues).
    pub amenity_ids: Vec<Uuid>,
    pub price_min: Option<i32>,
    pub price_max: Option<i32>,
    pub capacity_min: Option<i32>,
    pub capacity_max: Option<i32>,
    pub city_id: Option<CityId>,
    pub sort_by: SortBy,
    pub page: PageArgs,
}

/// Validated filter state, ready for composition.
#[derive(Debug, Clone)]
pub struct ValidatedFilters {
    /// Trimmed, non-blank search text.
    pub search_query: Option<String>,
    pub category_ids: Vec<Uuid>,
    pub amenity_ids: Vec<Uuid>,
    pub price_min: Option<i32>,
    pub price_max: Option<i32>,
    pub capacity_min: Option<i32>,
    pub capacity_max: Option<i32>,
    pub city_id: Option<CityId>,
    pub sort_by: SortBy,
    pub page: ValidatedPage,
}

impl DiscoverFilters {
    /// Validate the filter state. Rejection happens here, before any query
    /// is built or executed.
    pub fn validate(self) -> Result<ValidatedFilters, DiscoveryError> {
        let page = self.page.validate().map_err(DiscoveryError::InvalidFilter)?;

        if let (Some(min), Some(max)) = (self.price_min, self.price_max) {
            if min > max {
                return Err(DiscoveryError::InvalidFilter("price_min exceeds price_max"));
            }
        }
        if let (Some(min), Some(max)) = (self.capacity_min, self.capacity_max) {
            if min > max {
                return Err(DiscoveryError::InvalidFilter(
                    "capacity_min exceeds capacity_max",
                ));
            }
        }
        if self.price_min.map_or(false, |v| v < 0) || self.price_max.map_or(false, |v| v < 0) {
            return Err(DiscoveryError::InvalidFilter("price must be non-negative"));
        }
        if self.capacity_min.map_or(false, |v| v < 0) || self.capacity_max.map_or(false, |v| v < 0)
        {
            return Err(DiscoveryError::InvalidFilter(
                "capacity must be non-negative",
            ));
        }

        // Blank search text is treated as absent.
        let search_query = self
            .search_query
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty());

        Ok(ValidatedFilters {
            search_query,
            category_ids: self.category_ids,
            amenity_ids: self.amenity_ids,
            price_min: self.price_min,
            price_max: self.price_max,
            capacity_min: self.capacity_min,
            capacity_max: self.capacity_max,
            city_id: self.city_id,
            sort_by: self.sort_by,
            page,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filters_validate() {
        let validated = DiscoverFilters::default().validate().unwrap();
        assert!(validated.search_query.is_none());
        assert!(validated.category_ids.is_empty());
        assert_eq!(validated.page.page, 1);
        assert_eq!(validated.sort_by, SortBy::Relevance);
    }

    #[test]
    fn blank_search_query_treated_as_absent() {
        let filters = DiscoverFilters {
            search_query: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(filters.validate().unwrap().search_query.is_none());

        let filters = DiscoverFilters {
            search_query: Some("  jazz club ".to_string()),
            ..Default::default()
        };
        assert_eq!(
            filters.validate().unwrap().search_query.as_deref(),
            Some("jazz club")
        );
    }

    #[test]
    fn rejects_inverted_ranges() {
        let filters = DiscoverFilters {
            price_min: Some(500),
            price_max: Some(100),
            ..Default::default()
        };
        assert!(matches!(
            filters.validate(),
            Err(DiscoveryError::InvalidFilter(_))
        ));

        let filters = DiscoverFilters {
            capacity_min: Some(300),
            capacity_max: Some(50),
            ..Default::default()
        };
        assert!(filters.validate().is_err());
    }

    #[test]
    fn rejects_negative_bounds() {
        let filters = DiscoverFilters {
            price_min: Some(-1),
            ..Default::default()
        };
        assert!(filters.validate().is_err());

        let filters = DiscoverFilters {
            capacity_max: Some(-10),
            ..Default::default()
        };
        assert!(filters.validate().is_err());
    }

    #[test]
    fn rejects_invalid_page() {
        let filters = DiscoverFilters {
            page: PageArgs::new(Some(0), None),
            ..Default::default()
        };
        assert!(filters.validate().is_err());
    }
}
