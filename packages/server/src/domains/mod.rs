// Business domains

pub mod auth;
pub mod bookings;
pub mod discovery;
pub mod favorites;
pub mod locations;
pub mod messaging;
pub mod notifications;
pub mod profiles;
pub mod tag;
pub mod vendors;
