// Common types and utilities shared across the application

pub mod auth;
pub mod entity_ids;
pub mod id;
pub mod pagination;

pub use auth::AuthError;
pub use entity_ids::{
    BookingRequestId, CityId, ConversationId, MediaId, MessageId, NotificationId, ProfileId,
    TagId, VendorId,
};
pub use id::{Id, V7};
pub use pagination::{PageArgs, ValidatedPage};
