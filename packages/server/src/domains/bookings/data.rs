//! GraphQL types for booking requests.

use chrono::{DateTime, Utc};
use juniper::{GraphQLInputObject, GraphQLObject};
use uuid::Uuid;

use super::models::BookingRequest;

/// GraphQL type for a booking request
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "An organizer's request to book a vendor")]
pub struct BookingRequestData {
    pub id: Uuid,
    pub organizer_id: Uuid,
    pub vendor_id: Uuid,
    /// ISO 8601 date (YYYY-MM-DD)
    pub event_date: String,
    pub message: Option<String>,
    pub offered_price: Option<i32>,
    pub status: String,
    pub responded_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<BookingRequest> for BookingRequestData {
    fn from(booking: BookingRequest) -> Self {
        Self {
            id: booking.id.into_uuid(),
            organizer_id: booking.organizer_id.into_uuid(),
            vendor_id: booking.vendor_id.into_uuid(),
            event_date: booking.event_date.to_string(),
            message: booking.message,
            offered_price: booking.offered_price,
            status: booking.status,
            responded_at: booking.responded_at,
            created_at: booking.created_at,
        }
    }
}

/// Input for submitting a booking request
#[derive(Debug, Clone, GraphQLInputObject)]
pub struct SubmitBookingRequestInput {
    pub vendor_id: Uuid,
    /// ISO 8601 date (YYYY-MM-DD)
    pub event_date: String,
    pub message: Option<String>,
    pub offered_price: Option<i32>,
}
