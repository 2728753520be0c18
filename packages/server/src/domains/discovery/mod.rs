//! Vendor discovery: the filtered, paginated read that powers search and
//! browse pages.
//!
//! The composer translates a structured filter state into exactly one SQL
//! read over the denormalized `vendors` read model, joined with media and
//! tag rows, and flattens the result into display-ready rows.

pub mod composer;
pub mod data;
pub mod filters;

pub use composer::{compose, discover, DiscoverPage, DiscoverResult};
pub use filters::{DiscoverFilters, SortBy, ValidatedFilters, VendorKind};

use thiserror::Error;

/// Discovery errors.
///
/// Malformed filter input is rejected before any query is issued; backend
/// query failures surface verbatim as a single typed error with no partial
/// results.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("invalid filter: {0}")]
    InvalidFilter(&'static str),

    #[error("discovery query failed: {0}")]
    Query(#[from] sqlx::Error),
}
