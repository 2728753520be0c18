//! GraphQL types for tags.

use juniper::{GraphQLEnum, GraphQLObject};
use uuid::Uuid;

use super::models::{Tag, TagKind};

/// Tag kind for GraphQL
#[derive(Debug, Clone, Copy, GraphQLEnum)]
pub enum TagKindData {
    Genre,
    VenueType,
    Amenity,
}

impl From<TagKindData> for TagKind {
    fn from(kind: TagKindData) -> Self {
        match kind {
            TagKindData::Genre => TagKind::Genre,
            TagKindData::VenueType => TagKind::VenueType,
            TagKindData::Amenity => TagKind::Amenity,
        }
    }
}

/// GraphQL type for a tag
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "A genre, venue type, or amenity")]
pub struct TagData {
    pub id: Uuid,
    pub kind: String,
    pub name: String,
}

impl From<Tag> for TagData {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.into_uuid(),
            kind: tag.kind,
            name: tag.name,
        }
    }
}
