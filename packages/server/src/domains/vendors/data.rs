//! GraphQL types for vendor listings.

use chrono::{DateTime, Utc};
use juniper::{GraphQLInputObject, GraphQLObject};
use uuid::Uuid;

use super::models::{Vendor, VendorMedia};

/// GraphQL type for a vendor listing
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "An artist or venue listing")]
pub struct VendorData {
    pub id: Uuid,
    pub owner_profile_id: Uuid,
    pub kind: String,
    pub name: String,
    pub description: Option<String>,
    pub city_id: Option<Uuid>,
    pub base_price: Option<i32>,
    pub capacity: Option<i32>,
    pub rating_avg: Option<f64>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Vendor> for VendorData {
    fn from(vendor: Vendor) -> Self {
        Self {
            id: vendor.id.into_uuid(),
            owner_profile_id: vendor.owner_profile_id.into_uuid(),
            kind: vendor.kind,
            name: vendor.name,
            description: vendor.description,
            city_id: vendor.city_id.map(|id| id.into_uuid()),
            base_price: vendor.base_price,
            capacity: vendor.capacity,
            rating_avg: vendor.rating_avg,
            status: vendor.status,
            created_at: vendor.created_at,
        }
    }
}

/// GraphQL type for a vendor media row
#[derive(Debug, Clone, GraphQLObject)]
pub struct VendorMediaData {
    pub id: Uuid,
    pub vendor_id: Uuid,
    pub url: String,
    pub is_primary: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

impl From<VendorMedia> for VendorMediaData {
    fn from(media: VendorMedia) -> Self {
        Self {
            id: media.id.into_uuid(),
            vendor_id: media.vendor_id.into_uuid(),
            url: media.url,
            is_primary: media.is_primary,
            sort_order: media.sort_order,
            created_at: media.created_at,
        }
    }
}

/// Input for creating a vendor listing
#[derive(Debug, Clone, GraphQLInputObject)]
pub struct CreateVendorInput {
    pub kind: String,
    pub name: String,
    pub description: Option<String>,
    pub city_id: Option<Uuid>,
    pub base_price: Option<i32>,
    pub capacity: Option<i32>,
    pub tag_ids: Option<Vec<Uuid>>,
}

/// Input for updating a vendor listing; absent fields are left unchanged
#[derive(Debug, Clone, GraphQLInputObject)]
pub struct UpdateVendorInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub city_id: Option<Uuid>,
    pub base_price: Option<i32>,
    pub capacity: Option<i32>,
    pub tag_ids: Option<Vec<Uuid>>,
}
