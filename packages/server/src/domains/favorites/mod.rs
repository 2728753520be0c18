// Saved vendors per profile

pub mod models;

pub use models::Favorite;
