//! GraphQL types for profiles.

use chrono::{DateTime, Utc};
use juniper::{GraphQLInputObject, GraphQLObject};
use uuid::Uuid;

use super::models::Profile;

/// GraphQL type for a profile
#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "A marketplace account")]
pub struct ProfileData {
    pub id: Uuid,
    pub display_name: String,
    pub email: String,
    pub role: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Profile> for ProfileData {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id.into_uuid(),
            display_name: profile.display_name,
            email: profile.email,
            role: profile.role,
            bio: profile.bio,
            avatar_url: profile.avatar_url,
            created_at: profile.created_at,
        }
    }
}

/// Input for updating the signed-in profile
#[derive(Debug, Clone, GraphQLInputObject)]
pub struct UpdateProfileInput {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}
