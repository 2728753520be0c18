// Marketplace accounts (organizers and vendor owners)

pub mod data;
pub mod models;

pub use data::{ProfileData, UpdateProfileInput};
pub use models::{Profile, ProfileRole};
