// Tags: genres, venue types, and amenities

pub mod data;
pub mod models;

pub use data::{TagData, TagKindData};
pub use models::{Tag, TagKind};
