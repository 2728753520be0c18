// Booking requests between organizers and vendors

pub mod data;
pub mod models;

pub use data::{BookingRequestData, SubmitBookingRequestInput};
pub use models::{BookingRequest, BookingStatus};
