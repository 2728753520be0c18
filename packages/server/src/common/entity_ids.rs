//! Typed ID aliases for all domain entities.
//!
//! One alias per entity, providing compile-time safety for ID usage
//! throughout the application: a `VendorId` never silently stands in
//! for a `ProfileId`.

pub use super::id::{Id, V7};

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Profile entities (organizer and vendor accounts).
pub struct Profile;

/// Marker type for Vendor entities (artist or venue listings).
pub struct Vendor;

/// Marker type for City entities.
pub struct City;

/// Marker type for Tag entities (genres, venue types, amenities).
pub struct Tag;

/// Marker type for VendorMedia entities.
pub struct VendorMedia;

/// Marker type for BookingRequest entities.
pub struct BookingRequest;

/// Marker type for Conversation entities.
pub struct Conversation;

/// Marker type for Message entities.
pub struct Message;

/// Marker type for Notification entities.
pub struct Notification;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Profile entities.
pub type ProfileId = Id<Profile>;

/// Typed ID for Vendor entities.
pub type VendorId = Id<Vendor>;

/// Typed ID for City entities.
pub type CityId = Id<City>;

/// Typed ID for Tag entities.
pub type TagId = Id<Tag>;

/// Typed ID for VendorMedia entities.
pub type MediaId = Id<VendorMedia>;

/// Typed ID for BookingRequest entities.
pub type BookingRequestId = Id<BookingRequest>;

/// Typed ID for Conversation entities.
pub type ConversationId = Id<Conversation>;

/// Typed ID for Message entities.
pub type MessageId = Id<Message>;

/// Typed ID for Notification entities.
pub type NotificationId = Id<Notification>;
